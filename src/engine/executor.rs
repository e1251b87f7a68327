//! Collection-level orchestration.
//!
//! ## Purpose
//!
//! This module drives one generalization pass: it applies the configured
//! algorithm independently to every series of a collection, generalizes
//! any reference series attached to a series' metadata with the identical
//! configuration, and reattaches the results under the same keys.
//!
//! ## Design notes
//!
//! * **Per-series independence**: series never interact; each call reads
//!   its own input and allocates its own output. Callers may fan the work
//!   out across threads without coordination.
//! * **Reduction logging**: the driver logs the per-series reduction
//!   amount at debug level, and the conservative wrapper logs at error
//!   level when it falls back to the ungeneralized input.
//! * **Non-nested references**: reference series are generalized once;
//!   they do not themselves carry further reference series.
//!
//! ## Invariants
//!
//! * Output collections carry exactly the input's keys.
//! * The fallback wrapper never fails and never returns partial output.
//!
//! ## Non-goals
//!
//! * No request-level deadlines or cancellation; callers impose their own
//!   timeouts externally.

use num_traits::Float;
use tracing::{debug, error};

use crate::algorithms::{douglas_peucker, lttb, GeneralizerMethod};
use crate::primitives::errors::GeneralizeError;
use crate::primitives::gap::GapThreshold;
use crate::primitives::sample::{DataCollection, Sample, Series, SeriesMetadata};

// ============================================================================
// Resolved Configuration
// ============================================================================

/// Immutable configuration for one generalization pass, produced by the
/// builder after validation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedConfig {
    /// Target maximum output sample count.
    pub threshold: f64,

    /// Resolved no-data gap threshold.
    pub gap_threshold: GapThreshold,

    /// Selected algorithm.
    pub method: GeneralizerMethod,

    /// Douglas-Peucker tolerance.
    pub tolerance: f64,

    /// Douglas-Peucker input size guard.
    pub max_entries: Option<usize>,
}

// ============================================================================
// Drivers
// ============================================================================

/// Run the configured algorithm over one sample slice.
pub fn generalize_values<T: Float>(
    config: &ResolvedConfig,
    values: &[Sample<T>],
) -> Result<Vec<Sample<T>>, GeneralizeError> {
    match config.method {
        GeneralizerMethod::LargestTriangleThreeBuckets => {
            Ok(lttb::generalize(values, config.threshold, config.gap_threshold))
        }
        GeneralizerMethod::DouglasPeucker => {
            douglas_peucker::generalize(values, config.tolerance, config.max_entries)
        }
    }
}

/// Generalize one series, including its metadata reference series.
pub fn generalize_series<T: Float>(
    config: &ResolvedConfig,
    series: &Series<T>,
) -> Result<Series<T>, GeneralizeError> {
    let values = generalize_values(config, &series.values)?;

    let metadata = match &series.metadata {
        None => None,
        Some(metadata) => {
            let mut generalized = SeriesMetadata::new();
            for (id, reference) in &metadata.reference_values {
                let reference_values = generalize_values(config, &reference.values)?;
                generalized.reference_values.insert(
                    id.clone(),
                    Series {
                        values: reference_values,
                        metadata: reference.metadata.clone(),
                    },
                );
            }
            Some(generalized)
        }
    };

    Ok(Series { values, metadata })
}

/// Generalize every series of a collection, preserving keys.
pub fn generalize_collection<T: Float>(
    config: &ResolvedConfig,
    data: &DataCollection<T>,
) -> Result<DataCollection<T>, GeneralizeError> {
    let mut generalized = DataCollection::new();
    for (id, series) in data.iter() {
        let result = generalize_series(config, series)?;
        debug!(
            series = %id,
            original = series.len(),
            generalized = result.len(),
            "generalized series"
        );
        generalized.add_series(id.clone(), result);
    }
    Ok(generalized)
}

/// Generalize a collection, falling back to the ungeneralized input on
/// failure.
///
/// A generalization failure should not abort the surrounding request; the
/// error is logged and the caller receives the original data.
pub fn generalize_collection_or_original<T: Float>(
    config: &ResolvedConfig,
    data: &DataCollection<T>,
) -> DataCollection<T> {
    match generalize_collection(config, data) {
        Ok(generalized) => generalized,
        Err(e) => {
            error!(error = %e, "could not generalize collection, returning original data");
            data.clone()
        }
    }
}
