//! Largest-Triangle-Three-Buckets downsampling with gap preservation.
//!
//! ## Purpose
//!
//! This module implements the LTTB heuristic: interior samples are
//! partitioned into fractional buckets, and each bucket contributes the
//! point forming the largest triangle with the previously selected point
//! and the next bucket's average. On top of plain LTTB it applies a
//! no-data gap policy so real sensor outages surface as no-data samples
//! instead of being interpolated away.
//!
//! ## Design notes
//!
//! * **Threaded anchor**: the previously *selected* representative is the
//!   left triangle vertex of the next bucket. The anchor index is explicit
//!   local state threaded through the loop, not hidden object state.
//! * **Gap wins over shape**: once a bucket's no-data count exceeds the
//!   resolved threshold, the whole remaining bucket collapses to a no-data
//!   sample at the bucket's average timestamp, discarding any high-area
//!   candidate already found in that bucket.
//! * **First-wins tie break**: a candidate replaces the current best only
//!   on a strictly larger area, so ties keep the earliest point and the
//!   output is deterministic.
//! * **Gap right vertex**: when the next bucket's average value is itself
//!   missing, the right vertex borrows the left anchor's value, so the
//!   ranking degenerates to vertical deviation from the anchor instead of
//!   comparing against an undefined vertex.
//!
//! ## Invariants
//!
//! * The first and last input sample appear in the output verbatim.
//! * Output length is at most `ceil(threshold)` for `threshold >= 2`;
//!   thresholds in `(0, 2]` degenerate to the two endpoints.
//! * Output timestamps are non-decreasing whenever input timestamps are.
//! * A no-data region judged a gap is emitted as a no-data sample, never
//!   as an interpolated value.
//!
//! ## Edge cases
//!
//! * `threshold == 0`, `threshold >= len`, or fewer than three samples:
//!   the input is returned unchanged.
//! * A bucket whose scan selects nothing (an all-gap bucket below an
//!   absolute threshold) emits the bucket-average fallback and leaves the
//!   anchor unchanged.
//!
//! ## Non-goals
//!
//! * Input ordering is assumed, not enforced; unordered input is undefined
//!   behavior.

use num_traits::Float;

use crate::math::bucket::{bucket_average, bucket_range, bucket_size};
use crate::math::triangle::triangle_area;
use crate::primitives::gap::GapThreshold;
use crate::primitives::sample::Sample;

// ============================================================================
// LTTB
// ============================================================================

/// Reduce `data` to at most `ceil(threshold)` samples.
///
/// Pure and deterministic: identical input and configuration produce
/// identical output.
pub fn generalize<T: Float>(
    data: &[Sample<T>],
    threshold: f64,
    gap_threshold: GapThreshold,
) -> Vec<Sample<T>> {
    let len = data.len();
    if threshold == 0.0 || threshold >= len as f64 || len < 3 {
        // Nothing to do.
        return data.to_vec();
    }

    let size = bucket_size(len, threshold);
    let bucket_count = (threshold - 2.0).ceil().max(0.0) as usize;

    let mut sampled = Vec::with_capacity(bucket_count + 2);
    sampled.push(data[0]);

    let mut point_index = 0usize;

    for bucket_index in 0..bucket_count {
        // Interior scan range of this bucket; the last sample stays
        // reserved for the terminal push.
        let (range_start, range_end) = bucket_range(bucket_index, size, len - 1);

        let triangle_left = data[point_index];
        if triangle_left.is_no_data() {
            // The anchor sits in a gap: emit the placeholder and skip the
            // area evaluation for this bucket entirely.
            sampled.push(Sample::no_data(triangle_left.timestamp));
            point_index = range_end.saturating_sub(1);
            continue;
        }

        let triangle_right = bucket_average(bucket_index + 1, size, data, gap_threshold);
        // Fallback representative if the whole bucket turns out to be a
        // gap.
        let avg_current = bucket_average::<T>(bucket_index, size, data, gap_threshold);

        let (left_ts, left_value) = triangle_left.coords();
        let right_value = triangle_right
            .value
            .map(|v| v.to_f64().unwrap_or(f64::NAN))
            .unwrap_or(left_value);
        let right = (triangle_right.timestamp, right_value);

        let mut max_area = -1.0f64;
        let mut max_area_point = avg_current.no_data_sample();
        let mut next_point_index = point_index;
        let mut no_data_count = 0usize;

        for index in range_start..range_end {
            let triangle_middle = data[index];
            match triangle_middle.value {
                None => {
                    no_data_count += 1;
                    if gap_threshold.is_exceeded(no_data_count, size) {
                        // Gap wins over shape: void the bucket and stop
                        // scanning it.
                        max_area_point = avg_current.no_data_sample();
                        next_point_index = range_end.saturating_sub(1);
                        break;
                    }
                }
                Some(_) => {
                    let area =
                        triangle_area((left_ts, left_value), right, triangle_middle.coords());
                    if area > max_area {
                        max_area = area;
                        max_area_point = triangle_middle;
                        next_point_index = index;
                    }
                }
            }
        }

        sampled.push(max_area_point);
        // This bucket's pick is the next bucket's left vertex.
        point_index = next_point_index;
    }

    // Always add the last value.
    sampled.push(data[len - 1]);
    sampled
}
