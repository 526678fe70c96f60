//! Shop-floor efficiency metrics.
//!
//! Closed-form calculators behind the pendant's number screens. Everything
//! here is pure arithmetic over already-parsed values; lenient field
//! parsing lives in [`crate::input`]. Ratios that would divide by zero
//! come back as 0.0 so the forms always render.
//!
//! # Contents
//!
//! - [`productivity`]: takt targets, OEE, line simulation
//! - [`plan`]: monthly volume planning
//! - [`timechart`]: action timing charts and cycle totals

pub mod plan;
pub mod productivity;
pub mod timechart;
