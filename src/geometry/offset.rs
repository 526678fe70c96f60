//! Frame-relative approach/retreat offsets.

use crate::core::math::{deg_to_rad, tool_axis};
use crate::core::types::{FrameClass, NamedFrame, Pose};

/// Offset `base` along a reference frame, producing the paired
/// approach/retreat pose.
///
/// `distance` is signed millimeters: positive advances along the frame's
/// Z direction, negative retreats. Orientation is always copied from
/// `base` unchanged; only the position moves.
///
/// - [`FrameClass::User`]: the frame origin is added to the base position
///   and `distance` goes straight onto Z.
///   ```text
///   p' = base + frame,  z' = base.z + frame.z + distance
///   ```
/// - [`FrameClass::Tool`]: the move runs along the tool's own Z axis. The
///   unit Z axis is rotated through the base W/P/R angles and scaled by
///   `frame.z + distance`; the frame's X/Y land as flat offsets.
///   ```text
///   d  = frame.z + distance
///   p' = base + (frame.x, frame.y, 0) + d·tool_axis(base.wpr)
///   ```
///
/// The function is total: any finite inputs yield a pose, and malformed
/// operator input never reaches here (it is coerced upstream, see
/// [`crate::input`]).
pub fn apply_frame_offset(
    base: &Pose,
    frame: &NamedFrame,
    distance: f64,
    class: FrameClass,
) -> Pose {
    let f = frame.pose;
    match class {
        FrameClass::User => Pose {
            x: base.x + f.x,
            y: base.y + f.y,
            z: base.z + f.z + distance,
            ..*base
        },
        FrameClass::Tool => {
            let d = f.z + distance;
            let axis = tool_axis(deg_to_rad(base.w), deg_to_rad(base.p), deg_to_rad(base.r));
            Pose {
                x: base.x + f.x + d * axis[0],
                y: base.y + f.y + d * axis[1],
                z: base.z + d * axis[2],
                ..*base
            }
        }
    }
}
