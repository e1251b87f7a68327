//! Douglas-Peucker line simplification for time series.
//!
//! ## Purpose
//!
//! Characteristic samples are picked depending on a tolerance value:
//! samples that differ less than the tolerance from the tendency line
//! between local extremes are dropped. Unlike LTTB the output size is
//! data-dependent — flat stretches collapse hard, busy stretches survive.
//!
//! ## Design notes
//!
//! * **Explicit work stack**: segments are processed iteratively instead
//!   of recursing, so adversarial input cannot exhaust the call stack.
//! * **Gaps are characteristic**: a no-data sample is treated as
//!   infinitely distant from any tendency line and therefore always
//!   retained, preserving gap fidelity.
//! * **Entry guard**: `max_entries` bounds the accepted input size; larger
//!   inputs fail with [`GeneralizeError::MaxEntriesExceeded`].
//!
//! ## Invariants
//!
//! * The first and last input sample are always retained.
//! * Output order equals input order (retention is index-based).
//!
//! ## Edge cases
//!
//! * Fewer than three samples or a non-positive tolerance: the input is
//!   returned unchanged.
//!
//! ## Non-goals
//!
//! * No output size budget; use LTTB for bounded output.

use num_traits::Float;

use crate::math::distance::point_line_distance;
use crate::primitives::errors::GeneralizeError;
use crate::primitives::sample::Sample;

// ============================================================================
// Douglas-Peucker
// ============================================================================

/// Simplify `data` by dropping samples within `tolerance` of the local
/// tendency line.
pub fn generalize<T: Float>(
    data: &[Sample<T>],
    tolerance: f64,
    max_entries: Option<usize>,
) -> Result<Vec<Sample<T>>, GeneralizeError> {
    let len = data.len();
    if len < 3 || tolerance <= 0.0 {
        return Ok(data.to_vec());
    }

    if let Some(max) = max_entries {
        if len > max {
            return Err(GeneralizeError::MaxEntriesExceeded { got: len, max });
        }
    }

    let mut keep = vec![false; len];
    keep[0] = true;
    keep[len - 1] = true;

    // Segment stack of (lo, hi) index pairs still to examine.
    let mut segments = vec![(0usize, len - 1)];
    while let Some((lo, hi)) = segments.pop() {
        if hi <= lo + 1 {
            continue;
        }

        let start = data[lo].coords();
        let end = data[hi].coords();

        // Find the interior point of maximum distance to the tendency
        // line; start and end are not candidates.
        let mut max_distance = 0.0f64;
        let mut split = lo;
        for index in (lo + 1)..hi {
            let sample = data[index];
            let distance = if sample.is_no_data() {
                f64::INFINITY
            } else {
                point_line_distance(start, end, sample.coords())
            };
            if distance > max_distance {
                max_distance = distance;
                split = index;
            }
        }

        if max_distance >= tolerance && split > lo {
            keep[split] = true;
            segments.push((lo, split));
            segments.push((split, hi));
        }
    }

    Ok(data
        .iter()
        .zip(keep.iter())
        .filter(|(_, &kept)| kept)
        .map(|(sample, _)| *sample)
        .collect())
}
