//! Fractional bucket partitioning and bucket averaging.
//!
//! ## Purpose
//!
//! LTTB partitions the interior samples (everything but the retained first
//! and last sample) into `threshold - 2` buckets of *continuous* size
//! `(len - 2) / (threshold - 2)`. The fractional size keeps buckets as
//! equal as possible when the interior count does not divide evenly; index
//! ranges are obtained by flooring the running product. This module
//! computes those ranges and the per-bucket averages used as triangle
//! vertices.
//!
//! ## Design notes
//!
//! * **Half-open ranges**: bucket `i` covers `[floor(i*size)+1,
//!   floor((i+1)*size)+1)`; the `+1` offset skips the reserved first
//!   sample.
//! * **Timestamps always average**: a bucket average's timestamp is
//!   computed over *all* samples in range — timestamps are never missing.
//!   The averaged value goes missing once the no-data count reaches the
//!   gap threshold.
//! * **Range-length denominator**: the averaged value divides the sum of
//!   the numeric samples by the full range length; missing samples pull
//!   the average toward zero until the gap threshold voids it entirely.
//!
//! ## Invariants
//!
//! * `bucket_range` never yields indices at or past `len` when clamped.
//! * An averaging range clamped to emptiness falls back to the last input
//!   sample.
//!
//! ## Non-goals
//!
//! * This module does not select representatives; that is the algorithm's
//!   job.

use num_traits::Float;

use crate::primitives::gap::GapThreshold;
use crate::primitives::sample::Sample;

// ============================================================================
// Bucket Ranges
// ============================================================================

/// Continuous bucket size for `len` samples reduced to `threshold` output
/// samples. The first and last sample are excluded from partitioning.
#[inline]
pub fn bucket_size(len: usize, threshold: f64) -> f64 {
    (len as f64 - 2.0) / (threshold - 2.0)
}

/// Half-open interior index range of bucket `bucket_index`, clamped to
/// `max_end`.
#[inline]
pub fn bucket_range(bucket_index: usize, size: f64, max_end: usize) -> (usize, usize) {
    let start = (bucket_index as f64 * size).floor() as usize + 1;
    let end = ((bucket_index as f64 + 1.0) * size).floor() as usize + 1;
    (start.min(max_end), end.min(max_end))
}

// ============================================================================
// Bucket Average
// ============================================================================

/// The average of one bucket's samples: a fractional timestamp over all
/// samples in range, and a value that is voided once the bucket's no-data
/// count reaches the gap threshold.
///
/// Ephemeral — exists only during one generalizer pass, never exposed to
/// callers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BucketAverage<T: Float> {
    /// Average timestamp (epoch milliseconds, fractional).
    pub timestamp: f64,

    /// Average value, or `None` when the range is a gap.
    pub value: Option<T>,
}

impl<T: Float> BucketAverage<T> {
    /// A no-data sample at the average's timestamp, truncating the
    /// fractional part. This is what a collapsed gap bucket emits.
    pub fn no_data_sample(self) -> Sample<T> {
        Sample::no_data(self.timestamp as i64)
    }
}

/// Average the samples of bucket `bucket_index`.
///
/// The range is truncated to the available samples when it reaches past
/// the end of the input; an empty truncated range falls back to the last
/// sample.
pub fn bucket_average<T: Float>(
    bucket_index: usize,
    size: f64,
    data: &[Sample<T>],
    gap_threshold: GapThreshold,
) -> BucketAverage<T> {
    let len = data.len();
    let start = (bucket_index as f64 * size).floor() as usize + 1;
    let end = (((bucket_index as f64 + 1.0) * size).floor() as usize + 1).min(len);

    if start >= end {
        // Clamped past the end: stand in for the terminal sample.
        let last = data[len - 1];
        return BucketAverage {
            timestamp: last.timestamp as f64,
            value: last.value,
        };
    }

    let range_len = (end - start) as f64;
    let mut sum_timestamp = 0.0;
    let mut sum_value = 0.0;
    let mut no_data_count = 0usize;
    let mut gap = false;

    for sample in &data[start..end] {
        sum_timestamp += sample.timestamp as f64;
        if gap {
            // Timestamps keep averaging across the gap.
            continue;
        }
        match sample.value {
            Some(value) => sum_value += value.to_f64().unwrap_or(f64::NAN),
            None => {
                no_data_count += 1;
                if gap_threshold.is_reached(no_data_count, range_len) {
                    gap = true;
                }
            }
        }
    }

    let value = if gap {
        None
    } else {
        T::from(sum_value / range_len)
    };

    BucketAverage {
        timestamp: sum_timestamp / range_len,
        value,
    }
}
