//! Triangle area via the shoelace formula.
//!
//! ## Purpose
//!
//! The LTTB heuristic ranks candidate points by the area of the triangle
//! they form with the previously selected point (left vertex) and the next
//! bucket's average (right vertex). Only the relative ordering of areas
//! matters, but the conventional `× 0.5` factor is kept so values are
//! true areas.
//!
//! ## Invariants
//!
//! * The result is non-negative for finite inputs.
//! * A NaN coordinate yields a NaN area, which never wins a strict
//!   `area > max_area` comparison.
//!
//! ## Non-goals
//!
//! * No orientation (signed area) is exposed; the heuristic only needs
//!   magnitudes.

// ============================================================================
// Area
// ============================================================================

/// Area of the triangle spanned by `left`, `right`, and `middle`, each
/// given as `(timestamp, value)` in the time/value plane.
///
/// Standard 2D cross-product form:
///
/// ```text
/// area = |(l.ts − r.ts)·(m.v − l.v) − (l.ts − m.ts)·(r.v − l.v)| × 0.5
/// ```
#[inline]
pub fn triangle_area(left: (f64, f64), right: (f64, f64), middle: (f64, f64)) -> f64 {
    let (left_ts, left_value) = left;
    let (right_ts, right_value) = right;
    let (middle_ts, middle_value) = middle;

    ((left_ts - right_ts) * (middle_value - left_value)
        - (left_ts - middle_ts) * (right_value - left_value))
        .abs()
        * 0.5
}
