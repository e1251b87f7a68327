//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer implements the generalization algorithms on raw sample
//! slices:
//! - Largest-Triangle-Three-Buckets (bounded output size)
//! - Douglas-Peucker (tolerance-driven simplification)
//!
//! Both retain the first and last sample verbatim and surface no-data gaps
//! as explicit no-data samples.
//!
//! # Architecture
//!
//! ```text
//! API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Douglas-Peucker simplification.
pub mod douglas_peucker;

/// Largest-Triangle-Three-Buckets downsampling.
pub mod lttb;

// ============================================================================
// Method Selection
// ============================================================================

/// Which generalization algorithm a [`crate::prelude::Generalizer`] runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GeneralizerMethod {
    /// Bucketed downsampling to a fixed output budget (the default).
    #[default]
    LargestTriangleThreeBuckets,

    /// Tolerance-driven line simplification.
    DouglasPeucker,
}
