//! Lenient parsing of free-text numeric fields.
//!
//! Every numeric entry on the pendant forms is free text, and a half-typed
//! or cleared field must still produce a result. The rule is uniform:
//! anything that fails to parse contributes `0.0` to the formula, silently.
//! This is the one error-handling rule for operator input and it must stay
//! non-throwing; the forms rely on always-computable output.

use crate::core::types::Pose;
use serde::{Deserialize, Serialize};

/// Parse a numeric field, coercing failure to `0.0`.
///
/// # Example
/// ```
/// use yantra_geom::parse_or_zero;
///
/// assert_eq!(parse_or_zero("12.5"), 12.5);
/// assert_eq!(parse_or_zero("  -3 "), -3.0);
/// assert_eq!(parse_or_zero(""), 0.0);
/// assert_eq!(parse_or_zero("abc"), 0.0);
/// ```
#[inline]
pub fn parse_or_zero(field: &str) -> f64 {
    parse_or(field, 0.0)
}

/// Parse a numeric field, coercing failure to `default`.
///
/// Used where a field has a working fallback other than zero, like the
/// split-parameter entry.
#[inline]
pub fn parse_or(field: &str, default: f64) -> f64 {
    field.trim().parse().unwrap_or(default)
}

/// The six text fields of a pose entry form.
///
/// One value per coordinate, held as the raw strings the operator typed.
/// Modeled as a single value type with copy-on-edit semantics instead of
/// six independent mutable variables.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PoseFields {
    /// X field text
    pub x: String,
    /// Y field text
    pub y: String,
    /// Z field text
    pub z: String,
    /// W field text
    pub w: String,
    /// P field text
    pub p: String,
    /// R field text
    pub r: String,
}

impl PoseFields {
    /// Build fields pre-filled from a pose, for loading a frame into a form.
    pub fn from_pose(pose: &Pose) -> Self {
        Self {
            x: pose.x.to_string(),
            y: pose.y.to_string(),
            z: pose.z.to_string(),
            w: pose.w.to_string(),
            p: pose.p.to_string(),
            r: pose.r.to_string(),
        }
    }

    /// Coerce the six fields into a pose, malformed entries becoming 0.0.
    pub fn to_pose(&self) -> Pose {
        Pose {
            x: parse_or_zero(&self.x),
            y: parse_or_zero(&self.y),
            z: parse_or_zero(&self.z),
            w: parse_or_zero(&self.w),
            p: parse_or_zero(&self.p),
            r: parse_or_zero(&self.r),
        }
    }

    /// Blank out every field (the form's clear button).
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_or_zero_valid() {
        assert_eq!(parse_or_zero("500"), 500.0);
        assert_eq!(parse_or_zero("-90"), -90.0);
        assert_eq!(parse_or_zero("0.125"), 0.125);
    }

    #[test]
    fn test_parse_or_zero_malformed() {
        assert_eq!(parse_or_zero(""), 0.0);
        assert_eq!(parse_or_zero("-"), 0.0);
        assert_eq!(parse_or_zero("12,5"), 0.0);
        assert_eq!(parse_or_zero("1.2.3"), 0.0);
    }

    #[test]
    fn test_parse_or_custom_default() {
        assert_eq!(parse_or("", 20.0), 20.0);
        assert_eq!(parse_or("35", 20.0), 35.0);
    }

    #[test]
    fn test_malformed_field_equals_literal_zero() {
        let typed = PoseFields {
            x: "100".into(),
            y: "garbage".into(),
            z: "50".into(),
            w: "0".into(),
            p: "".into(),
            r: "-90".into(),
        };
        let zeroed = PoseFields {
            x: "100".into(),
            y: "0".into(),
            z: "50".into(),
            w: "0".into(),
            p: "0".into(),
            r: "-90".into(),
        };
        assert_eq!(typed.to_pose(), zeroed.to_pose());
    }

    #[test]
    fn test_from_pose_round_trip() {
        let pose = Pose::new(500.0, 0.0, 500.0, 0.0, -90.0, 0.0);
        assert_eq!(PoseFields::from_pose(&pose).to_pose(), pose);
    }

    #[test]
    fn test_clear_yields_zero_pose() {
        let mut fields = PoseFields::from_pose(&Pose::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0));
        fields.clear();
        assert_eq!(fields.to_pose(), Pose::ZERO);
    }
}
