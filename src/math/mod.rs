//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical functions used by the
//! generalization algorithms:
//! - Fractional bucket partitioning and bucket averaging
//! - The triangle-area heuristic
//! - Point-to-line distance for Douglas-Peucker
//!
//! These are reusable building blocks with no algorithm-specific control
//! flow.
//!
//! # Architecture
//!
//! ```text
//! API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Fractional bucket index ranges and bucket averaging.
pub mod bucket;

/// Point-to-line distance.
pub mod distance;

/// Triangle area via the shoelace formula.
pub mod triangle;
