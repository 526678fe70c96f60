//! Error types for YantraGeom

use crate::core::types::FrameClass;
use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, YantraError>;

/// YantraGeom error type
#[derive(Error, Debug)]
pub enum YantraError {
    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization or deserialization failure
    #[error("Format error: {0}")]
    Format(String),

    /// Frame slot index outside the fixed table
    #[error("Slot {slot} out of range for {class} frames")]
    SlotOutOfRange {
        /// Frame class being indexed
        class: FrameClass,
        /// Offending slot index
        slot: usize,
    },
}

impl From<toml::de::Error> for YantraError {
    fn from(e: toml::de::Error) -> Self {
        YantraError::Format(e.to_string())
    }
}

impl From<toml::ser::Error> for YantraError {
    fn from(e: toml::ser::Error) -> Self {
        YantraError::Format(e.to_string())
    }
}
