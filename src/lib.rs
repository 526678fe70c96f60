//! # YantraGeom
//!
//! Coordinate geometry and productivity calculators for shop-floor robot
//! teaching. The crate covers the numeric core of a teach-pendant helper:
//! frame-relative approach/retreat offsets, evenly spaced waypoint splitting
//! between two 6-DOF poses, a small named-frame table with TOML persistence,
//! and the closed-form efficiency metrics (takt, OEE, volume planning) used
//! on the line.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │                    metrics/                         │  ← Takt, OEE, plans
//! └─────────────────────────────────────────────────────┘
//! ┌─────────────────────────────────────────────────────┐
//! │                     store/                          │  ← Frame persistence
//! └─────────────────────────────────────────────────────┘
//!                          │
//! ┌─────────────────────────────────────────────────────┐
//! │                   geometry/                         │  ← Offsets, splitting
//! └─────────────────────────────────────────────────────┘
//!                          │
//! ┌─────────────────────────────────────────────────────┐
//! │                 core/ + input                       │  ← Foundation
//! │            (types, math, field parsing)             │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Conventions
//!
//! - Positions are millimeters, orientations are W/P/R Euler angles in
//!   degrees (yaw/pitch/roll order, as shown on the pendant).
//! - [`Pose`] is an immutable value type; operations return fresh poses.
//! - Free-text numeric fields coerce to `0.0` on parse failure instead of
//!   erroring. Operator-facing forms must always stay computable, so this
//!   rule is deliberate and load-bearing; see [`input`].
//!
//! # Quick Start
//!
//! ```
//! use yantra_geom::{split, Pose, SplitMode};
//!
//! let start = Pose::new(0.0, 0.0, 0.0, 0.0, 0.0, 0.0);
//! let end = Pose::new(100.0, 0.0, 0.0, 0.0, 0.0, 0.0);
//!
//! // Split the move into 25mm steps
//! let points = split(&start, &end, SplitMode::ByInterval(25.0));
//! assert_eq!(points.len(), 5);
//! assert_eq!(points[2].pose.x, 50.0);
//! ```

#![warn(missing_docs)]

pub mod core;
pub mod error;
pub mod geometry;
pub mod input;
pub mod metrics;
pub mod store;

pub use crate::core::types::{FrameClass, NamedFrame, Pose, FRAME_SLOTS};
pub use error::{Result, YantraError};
pub use geometry::{apply_frame_offset, split, InterpolatedPoint, SplitMode};
pub use input::{parse_or, parse_or_zero, PoseFields};
pub use store::FrameStore;
