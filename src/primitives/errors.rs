//! Error types for configuration and generalization failures.
//!
//! ## Purpose
//!
//! This module defines [`GeneralizeError`], the single error type surfaced
//! by the crate. Configuration errors are caller bugs and are raised before
//! any computation proceeds; the only runtime failure is the
//! Douglas-Peucker input size guard.
//!
//! ## Design notes
//!
//! * **Structured**: Variants carry the offending values for diagnostics.
//! * **Fail-Fast**: Builder validation raises these before any series is
//!   touched.
//! * **Not retryable**: Generalization is a pure computation; there is no
//!   external resource to retry against.
//!
//! ## Invariants
//!
//! * Degenerate inputs (empty or single-sample series) are *not* errors;
//!   they pass through unchanged.
//!
//! ## Non-goals
//!
//! * This module does not log; callers decide how failures surface.

use std::error::Error;
use std::fmt;

// ============================================================================
// Error Type
// ============================================================================

/// Errors raised by builder validation or generalization.
#[derive(Debug, Clone, PartialEq)]
pub enum GeneralizeError {
    /// The output threshold is non-finite or negative.
    InvalidThreshold(f64),

    /// The no-data gap threshold is non-finite or negative.
    InvalidGapThreshold(f64),

    /// The Douglas-Peucker tolerance is non-finite or not positive.
    InvalidTolerance(f64),

    /// The Douglas-Peucker input exceeded the configured entry limit.
    MaxEntriesExceeded {
        /// Number of samples in the input series.
        got: usize,
        /// Configured maximum.
        max: usize,
    },

    /// A builder parameter was set more than once.
    DuplicateParameter {
        /// Name of the offending parameter.
        parameter: &'static str,
    },
}

impl fmt::Display for GeneralizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidThreshold(value) => {
                write!(
                    f,
                    "Invalid threshold: {} (must be finite and non-negative)",
                    value
                )
            }
            Self::InvalidGapThreshold(value) => {
                write!(
                    f,
                    "Invalid no_data_gap_threshold: {} (must be finite and non-negative)",
                    value
                )
            }
            Self::InvalidTolerance(value) => {
                write!(
                    f,
                    "Invalid tolerance: {} (must be finite and positive)",
                    value
                )
            }
            Self::MaxEntriesExceeded { got, max } => {
                write!(f, "Maximum number of entries exceeded ({} > {})", got, max)
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{}' was set multiple times. Each parameter can only be configured once.",
                    parameter
                )
            }
        }
    }
}

impl Error for GeneralizeError {}
