//! # generalize-rs — Visual generalization of observation time series
//!
//! A small, production-oriented library that reduces long, possibly gappy,
//! time-ordered sequences of sensor observations to a bounded number of
//! samples while preserving the visually significant shape of the curve —
//! and, critically, preserving real data gaps instead of smoothing over
//! them.
//!
//! ## What is generalization?
//!
//! Charting a year of ten-second sensor observations means pushing millions
//! of points into a renderer that can only display a few hundred of them.
//! Generalization (also called downsampling) picks a small, representative
//! subset of samples so the rendered curve looks the same as the full one.
//!
//! Two algorithms are provided:
//!
//! - **Largest-Triangle-Three-Buckets (LTTB)**: partitions the interior
//!   samples into equal fractional buckets and keeps, per bucket, the point
//!   forming the largest triangle with the previous pick and the next
//!   bucket's average. The default, and the right choice for bounded output
//!   sizes.
//! - **Douglas-Peucker**: drops points closer than a tolerance to the
//!   tendency line between local extremes. Output size depends on the data,
//!   not on a fixed budget.
//!
//! Unlike generic downsamplers, both preserve *no-data gaps*: a stretch of
//! missing observations (sensor outage) is emitted as an explicit no-data
//! sample rather than interpolated away.
//!
//! ## Quick start
//!
//! ```rust
//! use generalize_rs::prelude::*;
//!
//! // One week of minute data with a simple daily swing.
//! let series: Series<f64> = (0..10_080)
//!     .map(|i| Sample::new(i as i64 * 60_000, (i as f64 * 0.004).sin()))
//!     .collect();
//!
//! let model = Generalizer::builder()
//!     .threshold(200.0)             // at most 200 output samples
//!     .no_data_gap_threshold(0.2)   // 20% missing per bucket marks a gap
//!     .build()?;
//!
//! let generalized = model.generalize(&series)?;
//! assert!(generalized.len() <= 200);
//! # Result::<(), GeneralizeError>::Ok(())
//! ```
//!
//! ## Parameters
//!
//! | Parameter               | Default | Description                                         |
//! |-------------------------|---------|-----------------------------------------------------|
//! | `threshold`             | 200     | Target maximum output sample count. `0` or a value not below the input length disables generalization. |
//! | `no_data_gap_threshold` | 0.2     | Missing samples tolerated per bucket. Values up to `1.0` are a fraction of the bucket size; values above `1.0` are an absolute count. |
//! | `method`                | LTTB    | `LargestTriangleThreeBuckets` or `DouglasPeucker`.  |
//! | `tolerance`             | 0.1     | Douglas-Peucker distance tolerance.                 |
//! | `max_entries`           | none    | Douglas-Peucker input size guard.                   |
//!
//! ## Gap handling
//!
//! A sample with no value ([`prelude::Sample::no_data`]) marks a real
//! measurement gap. When the number of no-data samples inside a bucket
//! exceeds the resolved gap threshold, the whole bucket collapses to a
//! single no-data sample at the bucket's average timestamp. Downstream
//! formatting layers must treat such samples as "no data" markers, never as
//! zeroes.
//!
//! ## Collections and reference series
//!
//! Whole keyed collections of series are generalized in one call; any
//! reference series attached to a series' metadata (forecast or comparison
//! curves) are generalized with the identical configuration and reattached:
//!
//! ```rust
//! use generalize_rs::prelude::*;
//!
//! let series: Series<f64> = (0..500)
//!     .map(|i| Sample::new(i as i64, i as f64))
//!     .collect();
//!
//! let mut collection = DataCollection::new();
//! collection.add_series("sensor-1", series);
//!
//! let model = Generalizer::builder().threshold(100.0).build()?;
//! let generalized = model.generalize_collection(&collection)?;
//! assert_eq!(generalized.len(), 1);
//! # Result::<(), GeneralizeError>::Ok(())
//! ```
//!
//! For request paths that must never fail on a misbehaving generalization,
//! [`prelude::Generalizer::generalize_collection_or_original`] logs the
//! error and returns the ungeneralized input instead.
//!
//! ## References
//!
//! - Steinarsson, S. (2013). "Downsampling Time Series for Visual
//!   Representation" (LTTB).
//! - Douglas, D. & Peucker, T. (1973). "Algorithms for the reduction of the
//!   number of points required to represent a digitized line or its
//!   caricature".

#![deny(missing_docs)]

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - data structures and basic utilities.
//
// Contains the sample/series data model, the error type, and the resolved
// gap-threshold representation.
mod primitives;

// Layer 2: Math - pure mathematical functions.
//
// Contains fractional bucket partitioning, bucket averaging, and the
// triangle-area heuristic.
mod math;

// Layer 3: Algorithms - the generalization algorithms.
//
// Contains the LTTB and Douglas-Peucker implementations operating on raw
// sample slices.
mod algorithms;

// Layer 4: Engine - validation and orchestration.
//
// Contains configuration validation and the collection-level driver that
// applies an algorithm per series and propagates metadata.
mod engine;

// High-level fluent API.
//
// Provides the `GeneralizerBuilder` for configuring and running
// generalization.
mod api;

// ============================================================================
// Prelude
// ============================================================================

/// Standard prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used types:
///
/// ```
/// use generalize_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        DataCollection, GapThreshold, GeneralizeError, Generalizer, GeneralizerBuilder,
        GeneralizerMethod,
        GeneralizerMethod::{DouglasPeucker, LargestTriangleThreeBuckets},
        Sample, Series, SeriesMetadata,
    };
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing
/// purposes. It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change
/// without notice. Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types and utilities.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal core algorithms.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Internal validation and orchestration.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}
