//! Core data types for pose geometry.
//!
//! - [`Pose`]: 6-DOF pose (XYZ in millimeters, WPR in degrees)
//! - [`FrameClass`]: User vs. Tool reference frame
//! - [`NamedFrame`]: a pose with an operator-assigned name
//! - [`FRAME_SLOTS`]: size of the fixed frame table per class

mod frame;
mod pose;

pub use frame::{FrameClass, NamedFrame, FRAME_SLOTS};
pub use pose::Pose;
