use generalize_rs::prelude::*;

// ============================================================================
// Builder Validation Tests
// ============================================================================

#[test]
fn test_default_build_succeeds() {
    let model = Generalizer::builder().build();
    assert!(model.is_ok());
}

#[test]
fn test_invalid_threshold_rejected() {
    let err = Generalizer::builder().threshold(-1.0).build().unwrap_err();
    assert_eq!(err, GeneralizeError::InvalidThreshold(-1.0));

    let err = Generalizer::builder().threshold(f64::NAN).build();
    assert!(matches!(err, Err(GeneralizeError::InvalidThreshold(_))));

    let err = Generalizer::builder().threshold(f64::INFINITY).build();
    assert!(matches!(err, Err(GeneralizeError::InvalidThreshold(_))));
}

#[test]
fn test_zero_threshold_is_valid() {
    // Zero disables generalization rather than failing.
    assert!(Generalizer::builder().threshold(0.0).build().is_ok());
}

#[test]
fn test_invalid_gap_threshold_rejected() {
    let err = Generalizer::builder()
        .no_data_gap_threshold(-0.1)
        .build()
        .unwrap_err();
    assert_eq!(err, GeneralizeError::InvalidGapThreshold(-0.1));

    let err = Generalizer::builder().no_data_gap_threshold(f64::NAN).build();
    assert!(matches!(err, Err(GeneralizeError::InvalidGapThreshold(_))));
}

#[test]
fn test_invalid_tolerance_rejected() {
    let err = Generalizer::builder().tolerance(0.0).build().unwrap_err();
    assert_eq!(err, GeneralizeError::InvalidTolerance(0.0));

    let err = Generalizer::builder().tolerance(-2.0).build();
    assert!(matches!(err, Err(GeneralizeError::InvalidTolerance(_))));
}

#[test]
fn test_duplicate_parameter_rejected() {
    let err = Generalizer::builder()
        .threshold(100.0)
        .threshold(200.0)
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        GeneralizeError::DuplicateParameter {
            parameter: "threshold"
        }
    );
}

#[test]
fn test_duplicate_method_rejected() {
    let err = Generalizer::builder()
        .method(DouglasPeucker)
        .method(LargestTriangleThreeBuckets)
        .build();
    assert!(matches!(
        err,
        Err(GeneralizeError::DuplicateParameter { parameter: "method" })
    ));
}

// ============================================================================
// Series Tests
// ============================================================================

fn ramp_series(len: usize) -> Series<f64> {
    (0..len)
        .map(|i| Sample::new(i as i64 * 1_000, (i as f64 * 0.01).sin()))
        .collect()
}

#[test]
fn test_default_threshold_bounds_output() {
    let series = ramp_series(1_000);
    let model = Generalizer::builder().build().unwrap();

    let generalized = model.generalize(&series).unwrap();
    assert_eq!(generalized.len(), 200);
}

#[test]
fn test_series_metadata_reference_values_generalized() {
    let mut metadata = SeriesMetadata::new();
    metadata.add_reference_values("forecast", ramp_series(500));

    let series = ramp_series(1_000).with_metadata(metadata);
    let model = Generalizer::builder().threshold(50.0).build().unwrap();

    let generalized = model.generalize(&series).unwrap();
    assert_eq!(generalized.len(), 50);

    let generalized_metadata = generalized.metadata.unwrap();
    let reference = &generalized_metadata.reference_values["forecast"];
    assert_eq!(reference.len(), 50);
}

#[test]
fn test_series_without_metadata_stays_bare() {
    let model = Generalizer::builder().threshold(50.0).build().unwrap();
    let generalized = model.generalize(&ramp_series(1_000)).unwrap();
    assert!(generalized.metadata.is_none());
}

// ============================================================================
// Collection Tests
// ============================================================================

#[test]
fn test_collection_preserves_keys() {
    let mut collection = DataCollection::new();
    collection.add_series("sensor-a", ramp_series(1_000));
    collection.add_series("sensor-b", ramp_series(600));

    let model = Generalizer::builder().threshold(100.0).build().unwrap();
    let generalized = model.generalize_collection(&collection).unwrap();

    assert_eq!(generalized.len(), 2);
    assert_eq!(generalized.get_series("sensor-a").unwrap().len(), 100);
    assert_eq!(generalized.get_series("sensor-b").unwrap().len(), 100);
}

#[test]
fn test_empty_collection_passes_through() {
    let collection: DataCollection<f64> = DataCollection::new();
    let model = Generalizer::builder().build().unwrap();
    let generalized = model.generalize_collection(&collection).unwrap();
    assert!(generalized.is_empty());
}

#[test]
fn test_collection_error_propagates() {
    let mut collection = DataCollection::new();
    collection.add_series("too-big", ramp_series(100));

    let model = Generalizer::builder()
        .method(DouglasPeucker)
        .tolerance(0.1)
        .max_entries(50)
        .build()
        .unwrap();

    let err = model.generalize_collection(&collection).unwrap_err();
    assert_eq!(err, GeneralizeError::MaxEntriesExceeded { got: 100, max: 50 });
}

#[test]
fn test_fallback_returns_original_on_error() {
    let mut collection = DataCollection::new();
    collection.add_series("too-big", ramp_series(100));

    let model = Generalizer::builder()
        .method(DouglasPeucker)
        .tolerance(0.1)
        .max_entries(50)
        .build()
        .unwrap();

    let result = model.generalize_collection_or_original(&collection);
    assert_eq!(result, collection);
}

#[test]
fn test_fallback_generalizes_on_success() {
    let mut collection = DataCollection::new();
    collection.add_series("ok", ramp_series(1_000));

    let model = Generalizer::builder().threshold(100.0).build().unwrap();
    let result = model.generalize_collection_or_original(&collection);
    assert_eq!(result.get_series("ok").unwrap().len(), 100);
}

// ============================================================================
// Float Type Tests
// ============================================================================

#[test]
fn test_f32_series_supported() {
    let series: Series<f32> = (0..500)
        .map(|i| Sample::new(i as i64, i as f32 * 0.5))
        .collect();

    let model = Generalizer::builder().threshold(50.0).build().unwrap();
    let generalized = model.generalize(&series).unwrap();
    assert_eq!(generalized.len(), 50);
}
