#![cfg(feature = "dev")]

use generalize_rs::internals::math::bucket::{bucket_average, bucket_range, bucket_size};
use generalize_rs::internals::primitives::gap::GapThreshold;
use generalize_rs::internals::primitives::sample::Sample;

// ============================================================================
// Range Tests
// ============================================================================

#[test]
fn test_bucket_size_is_continuous() {
    assert_eq!(bucket_size(6, 4.0), 2.0);
    assert_eq!(bucket_size(12, 7.0), 2.0);
    // Fractional sizes keep buckets as equal as possible.
    assert!((bucket_size(100, 20.0) - 98.0 / 18.0).abs() < 1e-12);
}

#[test]
fn test_bucket_range_skips_first_sample() {
    assert_eq!(bucket_range(0, 2.0, 5), (1, 3));
    assert_eq!(bucket_range(1, 2.0, 5), (3, 5));
}

#[test]
fn test_bucket_range_fractional_boundaries() {
    // Size 2.5: boundaries land on floor(2.5)=2 and floor(5.0)=5.
    assert_eq!(bucket_range(0, 2.5, 100), (1, 3));
    assert_eq!(bucket_range(1, 2.5, 100), (3, 6));
    assert_eq!(bucket_range(2, 2.5, 100), (6, 8));
}

#[test]
fn test_bucket_range_clamps_to_max_end() {
    assert_eq!(bucket_range(10, 2.0, 5), (5, 5));
    assert_eq!(bucket_range(1, 2.0, 4), (3, 4));
}

// ============================================================================
// Average Tests
// ============================================================================

fn samples() -> Vec<Sample<f64>> {
    vec![
        Sample::new(0, 10.0),
        Sample::new(1, 12.0),
        Sample::new(2, 8.0),
        Sample::new(3, 25.0),
        Sample::new(4, 6.0),
        Sample::new(5, 11.0),
    ]
}

#[test]
fn test_average_of_complete_bucket() {
    let data = samples();
    let average = bucket_average(1, 2.0, &data, GapThreshold::default());

    assert_eq!(average.timestamp, 3.5);
    assert_eq!(average.value, Some(15.5));
}

#[test]
fn test_average_clamped_past_end_falls_back_to_last_sample() {
    let data = samples();
    let average = bucket_average(3, 2.0, &data, GapThreshold::default());

    assert_eq!(average.timestamp, 5.0);
    assert_eq!(average.value, Some(11.0));
}

#[test]
fn test_average_timestamp_survives_a_gap() {
    let mut data = samples();
    data[3] = Sample::no_data(3);
    data[4] = Sample::no_data(4);

    // Both samples of bucket 1 are missing: the value is voided but the
    // timestamp still averages over the full range.
    let average = bucket_average(1, 2.0, &data, GapThreshold::Fraction(0.5));
    assert_eq!(average.timestamp, 3.5);
    assert_eq!(average.value, None);
}

#[test]
fn test_average_below_gap_threshold_keeps_value() {
    let mut data = samples();
    data[3] = Sample::no_data(3);

    // One of two samples missing against an absolute allowance of two:
    // the sum still divides by the full range length.
    let average = bucket_average(1, 2.0, &data, GapThreshold::Absolute(2.0));
    assert_eq!(average.timestamp, 3.5);
    assert_eq!(average.value, Some(3.0));
}

#[test]
fn test_no_data_sample_truncates_timestamp() {
    let data = samples();
    let average = bucket_average(1, 2.0, &data, GapThreshold::default());
    let sample = average.no_data_sample();

    assert_eq!(sample.timestamp, 3);
    assert!(sample.is_no_data());
}
