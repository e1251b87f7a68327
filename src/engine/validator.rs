//! Input validation for generalizer configuration.
//!
//! ## Purpose
//!
//! This module provides validation for the numeric request parameters. A
//! malformed configuration must fail at build time rather than produce
//! undefined numeric behavior inside the bucket math.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Caller bug, not data bug**: these errors are never a function of
//!   the series content; degenerate series are handled by the algorithms
//!   as pass-through.
//!
//! ## Invariants
//!
//! * All validated parameters are finite.
//! * Validation is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not validate series data (ordering is assumed, not
//!   enforced).
//! * This module does not provide automatic correction of invalid inputs.

use crate::primitives::errors::GeneralizeError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for generalizer configuration.
///
/// Provides static methods returning `Result<(), GeneralizeError>` that
/// fail fast upon identifying the first violation.
pub struct Validator;

impl Validator {
    /// Validate the output threshold.
    ///
    /// `0` is a valid value and disables generalization entirely.
    pub fn validate_threshold(threshold: f64) -> Result<(), GeneralizeError> {
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(GeneralizeError::InvalidThreshold(threshold));
        }
        Ok(())
    }

    /// Validate the raw no-data gap threshold.
    pub fn validate_gap_threshold(gap_threshold: f64) -> Result<(), GeneralizeError> {
        if !gap_threshold.is_finite() || gap_threshold < 0.0 {
            return Err(GeneralizeError::InvalidGapThreshold(gap_threshold));
        }
        Ok(())
    }

    /// Validate the Douglas-Peucker tolerance.
    pub fn validate_tolerance(tolerance: f64) -> Result<(), GeneralizeError> {
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(GeneralizeError::InvalidTolerance(tolerance));
        }
        Ok(())
    }

    /// Validate that no parameter was set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), GeneralizeError> {
        if let Some(parameter) = duplicate_param {
            return Err(GeneralizeError::DuplicateParameter { parameter });
        }
        Ok(())
    }
}
