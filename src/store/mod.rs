//! Named-frame storage.
//!
//! A fixed table of 10 user frames and 10 tool frames, owned explicitly by
//! the caller and persisted to a single TOML file on explicit save.

mod frame_store;

pub use frame_store::FrameStore;
