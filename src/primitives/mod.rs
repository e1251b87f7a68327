//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the fundamental building blocks used throughout the
//! crate:
//! - The timestamp/value sample model with its no-data sentinel
//! - Series, metadata, and keyed collections of series
//! - The error type
//! - The resolved dual-mode gap threshold
//!
//! These carry no algorithmic logic; they are plain data with small,
//! well-defined accessors.
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
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Error types for configuration and generalization failures.
pub mod errors;

/// Resolved no-data gap threshold (fractional or absolute).
pub mod gap;

/// Samples, series, metadata, and keyed collections.
pub mod sample;
