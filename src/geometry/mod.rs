//! Pose geometry operations.
//!
//! The two operations a teach operator actually runs:
//!
//! - [`apply_frame_offset`]: derive an approach/retreat target from a base
//!   pose, a reference frame, and a signed distance
//! - [`split`]: evenly spaced intermediate poses between two taught points

mod offset;
mod split;

pub use offset::apply_frame_offset;
pub use split::{split, InterpolatedPoint, SplitMode, TABLE_HEADER};
