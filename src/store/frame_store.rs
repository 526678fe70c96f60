//! Fixed-slot frame table with TOML persistence.

use crate::core::types::{FrameClass, NamedFrame, FRAME_SLOTS};
use crate::error::{Result, YantraError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The pendant's frame table: [`FRAME_SLOTS`] user frames and the same
/// number of tool frames.
///
/// One instance is created at startup and passed by reference to whatever
/// screen needs it; there is no global table. All access goes through
/// slot-checked getters. Exactly one caller mutates it at a time (the
/// forms are single-threaded), so there is no interior locking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameStore {
    user: Vec<NamedFrame>,
    tool: Vec<NamedFrame>,
}

impl FrameStore {
    /// Fresh table with placeholder frames ("UF0".."UF9", "TF0".."TF9").
    pub fn new() -> Self {
        Self {
            user: placeholder_slots(FrameClass::User),
            tool: placeholder_slots(FrameClass::Tool),
        }
    }

    /// Frame at `slot` for the given class.
    pub fn get(&self, class: FrameClass, slot: usize) -> Result<&NamedFrame> {
        self.slots(class)
            .get(slot)
            .ok_or(YantraError::SlotOutOfRange { class, slot })
    }

    /// Overwrite `slot` for the given class.
    pub fn set(&mut self, class: FrameClass, slot: usize, frame: NamedFrame) -> Result<()> {
        if slot >= FRAME_SLOTS {
            return Err(YantraError::SlotOutOfRange { class, slot });
        }
        log::debug!("Saving {}{} = {:?}", class, slot, frame.pose);
        match class {
            FrameClass::User => self.user[slot] = frame,
            FrameClass::Tool => self.tool[slot] = frame,
        }
        Ok(())
    }

    /// All slots of one class, in slot order.
    pub fn slots(&self, class: FrameClass) -> &[NamedFrame] {
        match class {
            FrameClass::User => &self.user,
            FrameClass::Tool => &self.tool,
        }
    }

    /// Load the table from a TOML file.
    ///
    /// A missing file is not an error: first launch starts from
    /// placeholders. A present-but-unreadable file is surfaced, never
    /// silently discarded.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::warn!("Frame table {} not found, using defaults", path.display());
            return Ok(Self::new());
        }
        let contents = std::fs::read_to_string(path)?;
        let store = Self::from_toml(&contents)?;
        log::info!("Loaded frame table from {}", path.display());
        Ok(store)
    }

    /// Write the table to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let toml = toml::to_string_pretty(self)?;
        std::fs::write(path, toml)?;
        log::info!("Saved frame table to {}", path.display());
        Ok(())
    }

    /// Parse a table from TOML text.
    ///
    /// Slot counts are normalized: short tables are padded with
    /// placeholders, long ones truncated, so a hand-edited file can never
    /// break the fixed-slot invariant.
    pub fn from_toml(toml: &str) -> Result<Self> {
        let mut store: FrameStore = toml::from_str(toml)?;
        normalize_slots(&mut store.user, FrameClass::User);
        normalize_slots(&mut store.tool, FrameClass::Tool);
        Ok(store)
    }
}

impl Default for FrameStore {
    fn default() -> Self {
        Self::new()
    }
}

fn placeholder_slots(class: FrameClass) -> Vec<NamedFrame> {
    (0..FRAME_SLOTS)
        .map(|slot| NamedFrame::placeholder(class, slot))
        .collect()
}

fn normalize_slots(slots: &mut Vec<NamedFrame>, class: FrameClass) {
    if slots.len() != FRAME_SLOTS {
        log::warn!(
            "{} table has {} slots, normalizing to {}",
            class,
            slots.len(),
            FRAME_SLOTS
        );
    }
    while slots.len() < FRAME_SLOTS {
        slots.push(NamedFrame::placeholder(class, slots.len()));
    }
    slots.truncate(FRAME_SLOTS);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Pose;

    #[test]
    fn test_new_has_placeholders() {
        let store = FrameStore::new();
        assert_eq!(store.slots(FrameClass::User).len(), FRAME_SLOTS);
        assert_eq!(store.get(FrameClass::User, 0).unwrap().name, "UF0");
        assert_eq!(store.get(FrameClass::Tool, 9).unwrap().name, "TF9");
        assert_eq!(store.get(FrameClass::Tool, 4).unwrap().pose, Pose::ZERO);
    }

    #[test]
    fn test_set_then_get() {
        let mut store = FrameStore::new();
        let frame = NamedFrame::new("fixture A", Pose::new(1.0, 2.0, 3.0, 0.0, 0.0, 0.0));
        store.set(FrameClass::Tool, 3, frame.clone()).unwrap();
        assert_eq!(store.get(FrameClass::Tool, 3).unwrap(), &frame);
        // The user table is untouched
        assert_eq!(store.get(FrameClass::User, 3).unwrap().name, "UF3");
    }

    #[test]
    fn test_slot_out_of_range() {
        let mut store = FrameStore::new();
        assert!(matches!(
            store.get(FrameClass::User, FRAME_SLOTS),
            Err(YantraError::SlotOutOfRange { slot: 10, .. })
        ));
        assert!(store
            .set(FrameClass::Tool, 99, NamedFrame::placeholder(FrameClass::Tool, 0))
            .is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let mut store = FrameStore::new();
        store
            .set(
                FrameClass::User,
                1,
                NamedFrame::new("pallet", Pose::new(500.0, 0.0, 500.0, 0.0, -90.0, 0.0)),
            )
            .unwrap();
        let toml = toml::to_string_pretty(&store).unwrap();
        let parsed = FrameStore::from_toml(&toml).unwrap();
        assert_eq!(parsed, store);
    }

    #[test]
    fn test_short_table_is_padded() {
        let toml = r#"
            tool = []

            [[user]]
            name = "origin"
            [user.pose]
            x = 1.0
            y = 2.0
            z = 3.0
            w = 0.0
            p = 0.0
            r = 0.0
        "#;
        let store = FrameStore::from_toml(toml).unwrap();
        assert_eq!(store.slots(FrameClass::User).len(), FRAME_SLOTS);
        assert_eq!(store.get(FrameClass::User, 0).unwrap().name, "origin");
        assert_eq!(store.get(FrameClass::User, 1).unwrap().name, "UF1");
        assert_eq!(store.slots(FrameClass::Tool).len(), FRAME_SLOTS);
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        assert!(FrameStore::from_toml("user = 3").is_err());
    }
}
