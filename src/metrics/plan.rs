//! Monthly volume planning.

/// Derived figures for a monthly production plan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VolumePlan {
    /// Maximum daily capacity needed to hit the month, units/day
    pub daily_capacity: f64,
    /// Effective working hours per day after utilization
    pub effective_hours: f64,
    /// Allowed production seconds per day
    pub allowed_seconds: f64,
    /// Allowed production minutes per day
    pub allowed_minutes: f64,
    /// Expected actual output per day, units
    pub actual_daily: f64,
    /// Expected actual output per month, units
    pub actual_monthly: f64,
    /// Takt required to meet the plan, seconds per unit
    pub required_takt_s: f64,
}

/// Break a monthly target down into daily figures and the takt that meets
/// it.
///
/// `rate` is utilization as a fraction. Zero days or a zero target
/// produce zeroed capacity and takt rather than an error.
pub fn volume_plan(
    monthly_target: f64,
    working_days: f64,
    hours_per_day: f64,
    rate: f64,
) -> VolumePlan {
    let daily_capacity = if working_days > 0.0 {
        monthly_target / working_days
    } else {
        0.0
    };
    let effective_hours = hours_per_day * rate;
    let required_takt_s = if daily_capacity > 0.0 {
        hours_per_day * 3600.0 * rate / daily_capacity
    } else {
        0.0
    };
    VolumePlan {
        daily_capacity,
        effective_hours,
        allowed_seconds: effective_hours * 3600.0,
        allowed_minutes: effective_hours * 60.0,
        actual_daily: daily_capacity * rate,
        actual_monthly: daily_capacity * rate * working_days,
        required_takt_s,
    }
}
