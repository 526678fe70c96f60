//! Named reference frames.

use super::Pose;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of frame slots per class, matching the pendant's fixed table.
pub const FRAME_SLOTS: usize = 10;

/// Which reference frame table a frame belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FrameClass {
    /// User frame (UF): a work-surface origin.
    User,
    /// Tool frame (TF): the working-point offset from the flange.
    Tool,
}

impl FrameClass {
    /// Short label used in slot names and display ("UF" / "TF").
    pub fn label(&self) -> &'static str {
        match self {
            FrameClass::User => "UF",
            FrameClass::Tool => "TF",
        }
    }
}

impl fmt::Display for FrameClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A reference frame with an operator-assigned display name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedFrame {
    /// Display name shown in slot pickers
    pub name: String,
    /// Frame pose (offset origin + orientation)
    pub pose: Pose,
}

impl NamedFrame {
    /// Create a frame from a name and pose.
    pub fn new(name: impl Into<String>, pose: Pose) -> Self {
        Self {
            name: name.into(),
            pose,
        }
    }

    /// Placeholder frame for an uninitialized slot ("UF3", "TF0", ...).
    pub fn placeholder(class: FrameClass, slot: usize) -> Self {
        Self {
            name: format!("{}{}", class.label(), slot),
            pose: Pose::ZERO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_labels() {
        assert_eq!(FrameClass::User.label(), "UF");
        assert_eq!(FrameClass::Tool.to_string(), "TF");
    }

    #[test]
    fn test_placeholder_names() {
        let f = NamedFrame::placeholder(FrameClass::User, 7);
        assert_eq!(f.name, "UF7");
        assert_eq!(f.pose, Pose::ZERO);

        let f = NamedFrame::placeholder(FrameClass::Tool, 0);
        assert_eq!(f.name, "TF0");
    }
}
