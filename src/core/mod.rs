//! Core foundation layer.
//!
//! Bottom layer of the crate with no internal dependencies. All other
//! modules depend on core.
//!
//! # Contents
//!
//! - [`types`]: Core data types (poses, named frames)
//! - [`math`]: Mathematical primitives (degree conversion, interpolation,
//!   tool-axis direction)

pub mod math;
pub mod types;
