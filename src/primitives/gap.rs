//! Resolved no-data gap threshold.
//!
//! ## Purpose
//!
//! The `no_data_gap_threshold` request parameter carries dual semantics: a
//! value up to `1.0` is a fraction of the bucket size, a larger value is an
//! absolute count of tolerated missing samples. This module resolves the
//! raw number into a tagged value once, at configuration time, so the hot
//! loops never re-branch on the raw magnitude.
//!
//! ## Design notes
//!
//! * **Resolved once**: [`GapThreshold::resolve`] is called by the builder
//!   after validation; comparison sites only see the tagged value.
//! * **Two comparison modes**: the bucket scan collapses a bucket when the
//!   missing count strictly *exceeds* the limit; bucket averaging nulls its
//!   value as soon as the count *reaches* the limit.
//!
//! ## Invariants
//!
//! * The raw value is finite and non-negative (enforced by the validator
//!   before resolution).
//! * `resolve(1.0)` is fractional; anything above `1.0` is absolute.
//!
//! ## Non-goals
//!
//! * This module does not count missing samples; it only compares counts
//!   against the limit.

// ============================================================================
// Gap Threshold
// ============================================================================

/// Tolerated amount of missing samples per bucket, resolved from the raw
/// `no_data_gap_threshold` parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GapThreshold {
    /// Limit is a fraction of the bucket's sample count.
    Fraction(f64),

    /// Limit is a literal sample count.
    Absolute(f64),
}

impl GapThreshold {
    /// Resolve a raw parameter value into its tagged form.
    ///
    /// Values up to and including `1.0` are fractional; larger values are
    /// absolute counts.
    pub fn resolve(raw: f64) -> Self {
        if raw <= 1.0 {
            Self::Fraction(raw)
        } else {
            Self::Absolute(raw)
        }
    }

    /// The effective limit for a bucket of `bucket_size` samples.
    fn limit(&self, bucket_size: f64) -> f64 {
        match *self {
            Self::Fraction(fraction) => fraction * bucket_size,
            Self::Absolute(count) => count,
        }
    }

    /// Whether `no_data_count` missing samples strictly exceed the limit
    /// for a bucket of `bucket_size` samples.
    ///
    /// Used by the bucket scan: exceeding the limit collapses the entire
    /// remaining bucket into a no-data gap.
    pub fn is_exceeded(&self, no_data_count: usize, bucket_size: f64) -> bool {
        no_data_count as f64 > self.limit(bucket_size)
    }

    /// Whether `no_data_count` missing samples have reached the limit for
    /// an averaging range of `range_len` samples.
    ///
    /// Used by bucket averaging: reaching the limit nulls the averaged
    /// value while the averaged timestamp keeps being computed.
    pub fn is_reached(&self, no_data_count: usize, range_len: f64) -> bool {
        no_data_count > 0 && no_data_count as f64 >= self.limit(range_len)
    }
}

impl Default for GapThreshold {
    fn default() -> Self {
        Self::Fraction(0.2)
    }
}
