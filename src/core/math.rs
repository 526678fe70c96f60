//! Mathematical primitives for pose geometry.
//!
//! Degree/radian conversion, scalar interpolation, and the tool-axis
//! direction vector used by tool-frame offsets.

use std::f64::consts::PI;

/// Convert degrees to radians.
///
/// # Example
/// ```
/// use yantra_geom::core::math::deg_to_rad;
/// use std::f64::consts::PI;
///
/// assert!((deg_to_rad(180.0) - PI).abs() < 1e-12);
/// ```
#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// Linear interpolation between two scalars.
///
/// `t` should be in [0, 1] where 0 returns `a` and 1 returns `b`.
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Unit vector of the local +Z (tool) axis after rotating through the
/// W/P/R Euler angles, given in radians.
///
/// ```text
/// x = cos(r)·sin(p)·cos(w) + sin(r)·sin(w)
/// y = sin(r)·sin(p)·cos(w) − cos(r)·sin(w)
/// z = cos(p)·cos(w)
/// ```
///
/// At w = p = r = 0 the tool axis coincides with world +Z.
#[inline]
pub fn tool_axis(w: f64, p: f64, r: f64) -> [f64; 3] {
    let (sin_w, cos_w) = w.sin_cos();
    let (sin_p, cos_p) = p.sin_cos();
    let (sin_r, cos_r) = r.sin_cos();
    [
        cos_r * sin_p * cos_w + sin_r * sin_w,
        sin_r * sin_p * cos_w - cos_r * sin_w,
        cos_p * cos_w,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_deg_to_rad() {
        assert_relative_eq!(deg_to_rad(0.0), 0.0);
        assert_relative_eq!(deg_to_rad(90.0), PI / 2.0);
        assert_relative_eq!(deg_to_rad(-180.0), -PI);
    }

    #[test]
    fn test_lerp_endpoints() {
        assert_relative_eq!(lerp(2.0, 10.0, 0.0), 2.0);
        assert_relative_eq!(lerp(2.0, 10.0, 1.0), 10.0);
        assert_relative_eq!(lerp(2.0, 10.0, 0.5), 6.0);
    }

    #[test]
    fn test_lerp_negative_span() {
        assert_relative_eq!(lerp(10.0, -10.0, 0.25), 5.0);
    }

    #[test]
    fn test_tool_axis_identity() {
        let v = tool_axis(0.0, 0.0, 0.0);
        assert_relative_eq!(v[0], 0.0);
        assert_relative_eq!(v[1], 0.0);
        assert_relative_eq!(v[2], 1.0);
    }

    #[test]
    fn test_tool_axis_pitch_quarter_turn() {
        // Pitch of -90° points the tool axis along -X
        let v = tool_axis(0.0, deg_to_rad(-90.0), 0.0);
        assert_relative_eq!(v[0], -1.0, epsilon = 1e-12);
        assert_relative_eq!(v[1], 0.0, epsilon = 1e-12);
        assert_relative_eq!(v[2], 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_tool_axis_yaw_quarter_turn() {
        // Yaw of 90° swings the axis to -Y
        let v = tool_axis(deg_to_rad(90.0), 0.0, 0.0);
        assert_relative_eq!(v[0], 0.0, epsilon = 1e-12);
        assert_relative_eq!(v[1], -1.0, epsilon = 1e-12);
        assert_relative_eq!(v[2], 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_tool_axis_is_unit_length() {
        let v = tool_axis(deg_to_rad(31.0), deg_to_rad(-47.0), deg_to_rad(118.0));
        let norm = (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt();
        assert_relative_eq!(norm, 1.0, epsilon = 1e-12);
    }
}
