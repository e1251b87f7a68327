//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer turns validated configuration into work:
//! - Fail-fast validation of the numeric request parameters
//! - The collection-level driver applying one algorithm per series,
//!   propagating metadata reference series, and logging reduction amounts
//!
//! # Architecture
//!
//! ```text
//! API
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Collection-level orchestration.
pub mod executor;

/// Parameter validation.
pub mod validator;
