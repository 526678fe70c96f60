//! 6-DOF pose type.

use crate::core::math::lerp;
use serde::{Deserialize, Serialize};

/// A 6-DOF robot pose: position in millimeters, orientation as W/P/R
/// Euler angles in degrees.
///
/// Poses are immutable values. Edits, offsets, and interpolation all
/// produce fresh poses rather than mutating in place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    /// X position in millimeters
    pub x: f64,
    /// Y position in millimeters
    pub y: f64,
    /// Z position in millimeters
    pub z: f64,
    /// Yaw (W) in degrees
    pub w: f64,
    /// Pitch (P) in degrees
    pub p: f64,
    /// Roll (R) in degrees
    pub r: f64,
}

impl Pose {
    /// The origin pose with zero orientation.
    pub const ZERO: Pose = Pose {
        x: 0.0,
        y: 0.0,
        z: 0.0,
        w: 0.0,
        p: 0.0,
        r: 0.0,
    };

    /// Create a pose from explicit components.
    #[inline]
    pub fn new(x: f64, y: f64, z: f64, w: f64, p: f64, r: f64) -> Self {
        Self { x, y, z, w, p, r }
    }

    /// Euclidean distance between the position components, in millimeters.
    ///
    /// Orientation is ignored; waypoint spacing is purely positional.
    #[inline]
    pub fn distance(&self, other: &Pose) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        let dz = other.z - self.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    /// Component-wise linear interpolation toward `other`.
    ///
    /// All 6 fields are interpolated independently, orientation included.
    /// Angles are treated as plain scalars: the pendant convention is that
    /// a taught move from W=170° to W=-170° really does sweep through 0°.
    #[inline]
    pub fn lerp(&self, other: &Pose, t: f64) -> Pose {
        Pose {
            x: lerp(self.x, other.x, t),
            y: lerp(self.y, other.y, t),
            z: lerp(self.z, other.z, t),
            w: lerp(self.w, other.w, t),
            p: lerp(self.p, other.p, t),
            r: lerp(self.r, other.r, t),
        }
    }

    /// The 6 fields in display order (X, Y, Z, W, P, R).
    #[inline]
    pub fn fields(&self) -> [f64; 6] {
        [self.x, self.y, self.z, self.w, self.p, self.r]
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::ZERO
    }
}
