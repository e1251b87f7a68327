//! Point-to-line distance for Douglas-Peucker simplification.
//!
//! ## Purpose
//!
//! Douglas-Peucker measures each interior point's perpendicular distance
//! to the tendency line between a segment's endpoints. Points closer than
//! the tolerance are dropped.
//!
//! ## Design notes
//!
//! * **Infinite line**: distance is measured to the line through the
//!   endpoints, not the clipped segment.
//! * **Degenerate segments**: coincident endpoints reduce to the Euclidean
//!   distance to that point.
//!
//! ## Non-goals
//!
//! * No spatial indexing; inputs are tiny segments of one series.

// ============================================================================
// Distance
// ============================================================================

/// Perpendicular distance from `point` to the line through `start` and
/// `end`, each given as `(timestamp, value)` coordinates.
pub fn point_line_distance(start: (f64, f64), end: (f64, f64), point: (f64, f64)) -> f64 {
    let (x1, y1) = start;
    let (x2, y2) = end;
    let (px, py) = point;

    let dx = x2 - x1;
    let dy = y2 - y1;
    let norm = (dx * dx + dy * dy).sqrt();

    if norm == 0.0 {
        // Degenerate line: distance to the single point.
        return ((px - x1).powi(2) + (py - y1).powi(2)).sqrt();
    }

    (dy * px - dx * py + x2 * y1 - y2 * x1).abs() / norm
}
