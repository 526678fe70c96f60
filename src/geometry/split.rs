//! Waypoint splitting between two taught poses.

use crate::core::types::Pose;

/// Column headers for the rendered waypoint table.
pub const TABLE_HEADER: [&str; 7] = ["No.", "X", "Y", "Z", "W", "P", "R"];

/// How the segment count is chosen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SplitMode {
    /// Target spacing in millimeters between consecutive points.
    ///
    /// Segment count is `ceil(distance / spacing)`, at least 1.
    ByInterval(f64),
    /// Requested total number of points (start and end included).
    ///
    /// Segment count is `value - 1`, at least 1. Kept as `f64` because it
    /// arrives from the same free-text field as the interval.
    ByCount(f64),
}

/// One row of the split result: a point index and its pose.
///
/// Produced only by [`split`]; never persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InterpolatedPoint {
    /// Position in the sequence, 0 = start point
    pub index: usize,
    /// Interpolated pose
    pub pose: Pose,
}

impl InterpolatedPoint {
    /// Render as a display row: index plus all 6 fields at 3 decimals.
    pub fn to_row(&self) -> [String; 7] {
        let f = self.pose.fields();
        [
            self.index.to_string(),
            format!("{:.3}", f[0]),
            format!("{:.3}", f[1]),
            format!("{:.3}", f[2]),
            format!("{:.3}", f[3]),
            format!("{:.3}", f[4]),
            format!("{:.3}", f[5]),
        ]
    }
}

/// Split the move from `start` to `end` into evenly spaced poses.
///
/// Returns N+1 points for N segments, endpoints included, each of the 6
/// pose fields interpolated independently. Spacing is measured over the
/// position components only; orientation rides along linearly.
///
/// The result is eager and fully recomputed on every call. N stays small
/// in practice (a teach move is at most a few hundred points), so there
/// is nothing to win by streaming.
pub fn split(start: &Pose, end: &Pose, mode: SplitMode) -> Vec<InterpolatedPoint> {
    let n = segment_count(start.distance(end), mode);
    (0..=n)
        .map(|i| InterpolatedPoint {
            index: i,
            pose: start.lerp(end, i as f64 / n as f64),
        })
        .collect()
}

/// Segment count for a move of `distance` millimeters.
///
/// A degenerate interval (zero, negative, or non-finite) clamps to a
/// single segment rather than exploding the table.
fn segment_count(distance: f64, mode: SplitMode) -> usize {
    match mode {
        SplitMode::ByInterval(spacing) => {
            if spacing.is_finite() && spacing > 0.0 {
                ((distance / spacing).ceil() as usize).max(1)
            } else {
                1
            }
        }
        SplitMode::ByCount(points) => {
            if points.is_finite() {
                ((points as i64) - 1).max(1) as usize
            } else {
                1
            }
        }
    }
}
