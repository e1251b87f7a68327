//! Samples, series, metadata, and keyed collections.
//!
//! ## Purpose
//!
//! This module defines the data model the generalizers operate on: a
//! [`Sample`] is a timestamped observation whose value may be missing, a
//! [`Series`] is an ordered sequence of samples with optional metadata, and
//! a [`DataCollection`] is a keyed map of series.
//!
//! ## Design notes
//!
//! * **Explicit no-data**: a missing observation is `value: None`, not a
//!   floating NaN. This keeps equality and averaging well-defined while
//!   still modelling the "no data at this instant" sentinel. The `new`
//!   constructor maps NaN input to `None` so callers holding raw float
//!   arrays get the sentinel for free.
//! * **Deterministic collections**: `BTreeMap` keys iterate in order, so
//!   repeated runs over the same input produce identical output.
//! * **Owned output**: generalization produces new, independently owned
//!   series; no aliasing with the input is assumed.
//!
//! ## Invariants
//!
//! * Series timestamps are expected to be non-decreasing. The algorithms
//!   assume but do not enforce this; violating it is undefined behavior.
//!
//! ## Non-goals
//!
//! * This module does not sort, validate, or deduplicate samples.
//! * This module does not model units, phenomena, or any REST-level DTOs.

use std::collections::BTreeMap;

use num_traits::Float;

// ============================================================================
// Sample
// ============================================================================

/// One timestamped observation. A `None` value marks a real measurement
/// gap (no data at this instant).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample<T: Float> {
    /// Epoch milliseconds.
    pub timestamp: i64,

    /// Observed value, or `None` for a no-data gap.
    pub value: Option<T>,
}

impl<T: Float> Sample<T> {
    /// Create a sample from a raw value. NaN input becomes the no-data
    /// sentinel.
    pub fn new(timestamp: i64, value: T) -> Self {
        let value = if value.is_nan() { None } else { Some(value) };
        Self { timestamp, value }
    }

    /// Create a no-data sample at the given instant.
    pub fn no_data(timestamp: i64) -> Self {
        Self {
            timestamp,
            value: None,
        }
    }

    /// Whether this sample marks a measurement gap.
    #[inline]
    pub fn is_no_data(&self) -> bool {
        self.value.is_none()
    }

    /// The value, with the no-data sentinel rendered as NaN.
    ///
    /// Convenience for formatting layers that emit floating point directly.
    pub fn value_or_nan(&self) -> T {
        self.value.unwrap_or_else(T::nan)
    }

    /// Time/value coordinates in `f64`, the no-data sentinel rendered as
    /// NaN.
    pub fn coords(&self) -> (f64, f64) {
        let value = self
            .value
            .map(|v| v.to_f64().unwrap_or(f64::NAN))
            .unwrap_or(f64::NAN);
        (self.timestamp as f64, value)
    }
}

// ============================================================================
// Series
// ============================================================================

/// An ordered sequence of samples with optional metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Series<T: Float> {
    /// The samples, non-decreasing by timestamp.
    pub values: Vec<Sample<T>>,

    /// Optional metadata (reference series plotted alongside this one).
    pub metadata: Option<SeriesMetadata<T>>,
}

impl<T: Float> Series<T> {
    /// Create an empty series.
    pub fn new() -> Self {
        Self {
            values: Vec::new(),
            metadata: None,
        }
    }

    /// Create a series from pre-built samples.
    pub fn from_samples(values: Vec<Sample<T>>) -> Self {
        Self {
            values,
            metadata: None,
        }
    }

    /// Attach metadata, consuming and returning the series.
    pub fn with_metadata(mut self, metadata: SeriesMetadata<T>) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the series holds no samples.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Append a sample.
    pub fn push(&mut self, sample: Sample<T>) {
        self.values.push(sample);
    }
}

impl<T: Float> Default for Series<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> FromIterator<Sample<T>> for Series<T> {
    fn from_iter<I: IntoIterator<Item = Sample<T>>>(iter: I) -> Self {
        Self::from_samples(iter.into_iter().collect())
    }
}

// ============================================================================
// Metadata
// ============================================================================

/// Metadata carried by a series: secondary reference series (forecast or
/// comparison curves) keyed by reference-id.
///
/// Reference series are generalized with the identical configuration as
/// their parent and reattached under the same key. They do not themselves
/// carry further reference series.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesMetadata<T: Float> {
    /// Reference-series-id → series.
    pub reference_values: BTreeMap<String, Series<T>>,
}

impl<T: Float> SeriesMetadata<T> {
    /// Create empty metadata.
    pub fn new() -> Self {
        Self {
            reference_values: BTreeMap::new(),
        }
    }

    /// Attach a reference series under the given id.
    pub fn add_reference_values(&mut self, id: impl Into<String>, series: Series<T>) {
        self.reference_values.insert(id.into(), series);
    }
}

impl<T: Float> Default for SeriesMetadata<T> {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Data Collection
// ============================================================================

/// A keyed collection of series, the unit the surrounding request layer
/// hands to the generalizer.
#[derive(Debug, Clone, PartialEq)]
pub struct DataCollection<T: Float> {
    series: BTreeMap<String, Series<T>>,
}

impl<T: Float> DataCollection<T> {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self {
            series: BTreeMap::new(),
        }
    }

    /// Insert a series under the given id, replacing any previous entry.
    pub fn add_series(&mut self, id: impl Into<String>, series: Series<T>) {
        self.series.insert(id.into(), series);
    }

    /// Look up a series by id.
    pub fn get_series(&self, id: &str) -> Option<&Series<T>> {
        self.series.get(id)
    }

    /// Iterate over (id, series) pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Series<T>)> {
        self.series.iter()
    }

    /// Number of series in the collection.
    pub fn len(&self) -> usize {
        self.series.len()
    }

    /// Whether the collection holds no series.
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

impl<T: Float> Default for DataCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}
