//! High-level API for time-series generalization.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point. It implements
//! a fluent builder pattern for configuring the generalization parameters
//! and a [`Generalizer`] handle that applies the frozen configuration to
//! series and collections of any [`num_traits::Float`] value type.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all
//!   parameters.
//! * **Validated**: Parameters are validated when `.build()` is called;
//!   the algorithms never see a malformed configuration.
//! * **Configuration is plain `f64`**: the request parameters are numeric
//!   knobs, not data, so the builder is non-generic. Only the samples are
//!   generic over the float type.
//!
//! ## Key concepts
//!
//! * **Configuration Flow**: `Generalizer::builder()`, chained setters,
//!   `.build()` returning a validated [`Generalizer`].
//! * **Dual gap semantics**: `no_data_gap_threshold` up to `1.0` is a
//!   fraction of the bucket size; above `1.0` it is an absolute count. The
//!   builder resolves this once into a [`GapThreshold`].

// Internal dependencies
use num_traits::Float;

use crate::engine::executor::{self, ResolvedConfig};
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::algorithms::GeneralizerMethod;
pub use crate::primitives::errors::GeneralizeError;
pub use crate::primitives::gap::GapThreshold;
pub use crate::primitives::sample::{DataCollection, Sample, Series, SeriesMetadata};

// ============================================================================
// Defaults
// ============================================================================

/// Default output threshold when none is configured.
pub const DEFAULT_THRESHOLD: f64 = 200.0;

/// Default raw no-data gap threshold (20% of a bucket).
pub const DEFAULT_NO_DATA_GAP_THRESHOLD: f64 = 0.2;

/// Default Douglas-Peucker tolerance.
pub const DEFAULT_TOLERANCE: f64 = 0.1;

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring a [`Generalizer`].
#[derive(Debug, Clone, Default)]
pub struct GeneralizerBuilder {
    /// Target maximum output sample count.
    pub threshold: Option<f64>,

    /// Raw no-data gap threshold (fraction up to `1.0`, count above).
    pub no_data_gap_threshold: Option<f64>,

    /// Algorithm selection.
    pub method: Option<GeneralizerMethod>,

    /// Douglas-Peucker distance tolerance.
    pub tolerance: Option<f64>,

    /// Douglas-Peucker input size guard.
    pub max_entries: Option<usize>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl GeneralizerBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            threshold: None,
            no_data_gap_threshold: None,
            method: None,
            tolerance: None,
            max_entries: None,
            duplicate_param: None,
        }
    }

    /// Set the target maximum output sample count.
    ///
    /// `0` disables generalization, as does any value not below the input
    /// length.
    pub fn threshold(mut self, threshold: f64) -> Self {
        if self.threshold.is_some() {
            self.duplicate_param = Some("threshold");
        }
        self.threshold = Some(threshold);
        self
    }

    /// Set the tolerated amount of missing samples per bucket.
    ///
    /// Values up to and including `1.0` are a fraction of the bucket size;
    /// larger values are an absolute sample count.
    pub fn no_data_gap_threshold(mut self, gap_threshold: f64) -> Self {
        if self.no_data_gap_threshold.is_some() {
            self.duplicate_param = Some("no_data_gap_threshold");
        }
        self.no_data_gap_threshold = Some(gap_threshold);
        self
    }

    /// Select the generalization algorithm.
    pub fn method(mut self, method: GeneralizerMethod) -> Self {
        if self.method.is_some() {
            self.duplicate_param = Some("method");
        }
        self.method = Some(method);
        self
    }

    /// Set the Douglas-Peucker distance tolerance.
    pub fn tolerance(mut self, tolerance: f64) -> Self {
        if self.tolerance.is_some() {
            self.duplicate_param = Some("tolerance");
        }
        self.tolerance = Some(tolerance);
        self
    }

    /// Bound the accepted input size for Douglas-Peucker.
    pub fn max_entries(mut self, max_entries: usize) -> Self {
        if self.max_entries.is_some() {
            self.duplicate_param = Some("max_entries");
        }
        self.max_entries = Some(max_entries);
        self
    }

    /// Validate the configuration and build a [`Generalizer`].
    pub fn build(self) -> Result<Generalizer, GeneralizeError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let threshold = self.threshold.unwrap_or(DEFAULT_THRESHOLD);
        Validator::validate_threshold(threshold)?;

        let raw_gap = self
            .no_data_gap_threshold
            .unwrap_or(DEFAULT_NO_DATA_GAP_THRESHOLD);
        Validator::validate_gap_threshold(raw_gap)?;

        let tolerance = self.tolerance.unwrap_or(DEFAULT_TOLERANCE);
        Validator::validate_tolerance(tolerance)?;

        Ok(Generalizer {
            config: ResolvedConfig {
                threshold,
                gap_threshold: GapThreshold::resolve(raw_gap),
                method: self.method.unwrap_or_default(),
                tolerance,
                max_entries: self.max_entries,
            },
        })
    }
}

// ============================================================================
// Generalizer
// ============================================================================

/// A validated, immutable generalization configuration ready to run.
///
/// Cheap to clone and safe to share across threads; every call reads the
/// frozen configuration and allocates its own output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Generalizer {
    config: ResolvedConfig,
}

impl Generalizer {
    /// Start configuring a generalizer.
    pub fn builder() -> GeneralizerBuilder {
        GeneralizerBuilder::new()
    }

    /// Generalize one series, including any metadata reference series.
    pub fn generalize<T: Float>(&self, series: &Series<T>) -> Result<Series<T>, GeneralizeError> {
        executor::generalize_series(&self.config, series)
    }

    /// Generalize a raw sample slice.
    pub fn generalize_values<T: Float>(
        &self,
        values: &[Sample<T>],
    ) -> Result<Vec<Sample<T>>, GeneralizeError> {
        executor::generalize_values(&self.config, values)
    }

    /// Generalize every series of a collection, preserving keys.
    pub fn generalize_collection<T: Float>(
        &self,
        data: &DataCollection<T>,
    ) -> Result<DataCollection<T>, GeneralizeError> {
        executor::generalize_collection(&self.config, data)
    }

    /// Generalize a collection, returning the ungeneralized input if the
    /// pass fails.
    ///
    /// The error is logged; this method never fails and never returns
    /// partial output.
    pub fn generalize_collection_or_original<T: Float>(
        &self,
        data: &DataCollection<T>,
    ) -> DataCollection<T> {
        executor::generalize_collection_or_original(&self.config, data)
    }
}
