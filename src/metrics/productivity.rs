//! Takt targets, OEE, and line simulation.

/// Takt-time targets derived from an observed cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaktTargets {
    /// Target takt time in seconds per unit
    pub takt_s: f64,
    /// Target output for one day, units
    pub daily_target: f64,
    /// Target output per hour, units
    pub hourly_output: f64,
}

/// Derive takt targets from a measured cycle time.
///
/// `rate` is the planned utilization as a fraction (an 85% entry on the
/// form arrives here as 0.85). Zero or negative inputs zero out the
/// affected results instead of erroring.
pub fn takt_targets(cycle_s: f64, rate: f64, hours_per_day: f64) -> TaktTargets {
    let takt_s = if rate > 0.0 { cycle_s / rate } else { 0.0 };
    let daily_target = if cycle_s > 0.0 {
        (hours_per_day * 3600.0 / cycle_s) * rate
    } else {
        0.0
    };
    let hourly_output = if hours_per_day > 0.0 {
        daily_target / hours_per_day
    } else {
        0.0
    };
    TaktTargets {
        takt_s,
        daily_target,
        hourly_output,
    }
}

/// Overall equipment effectiveness breakdown, all rates in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oee {
    /// Availability: actual run time over loading time
    pub availability_pct: f64,
    /// Performance: ideal production time over run time
    pub performance_pct: f64,
    /// Quality: good units over total units
    pub quality_pct: f64,
    /// Overall effectiveness, product of the three rates
    pub oee_pct: f64,
    /// Effective output per hour at this OEE, units
    pub effective_hourly: f64,
}

/// Compute OEE from one shift's counters.
///
/// `load_min`/`run_min` are minutes, `base_cycle_s` the rated cycle in
/// seconds, `produced`/`good` unit counts.
pub fn oee(load_min: f64, run_min: f64, base_cycle_s: f64, produced: f64, good: f64) -> Oee {
    let availability_pct = if load_min > 0.0 {
        run_min / load_min * 100.0
    } else {
        0.0
    };
    let performance_pct = if run_min > 0.0 && base_cycle_s > 0.0 {
        base_cycle_s * produced / (run_min * 60.0) * 100.0
    } else {
        0.0
    };
    let quality_pct = if produced > 0.0 {
        good / produced * 100.0
    } else {
        0.0
    };
    let oee_pct = availability_pct * performance_pct * quality_pct / 10_000.0;
    let effective_hourly = if base_cycle_s > 0.0 {
        3600.0 / base_cycle_s * (oee_pct / 100.0)
    } else {
        0.0
    };
    Oee {
        availability_pct,
        performance_pct,
        quality_pct,
        oee_pct,
        effective_hourly,
    }
}

/// Staffing/equipment simulation for a production target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Simulation {
    /// Machines needed to hit the daily target at the effective rate
    pub required_machines: f64,
    /// Total labor, worker-hours
    pub total_man_hours: f64,
}

/// Size the line for a daily target given the effective hourly output.
pub fn simulation(
    workers: f64,
    hours_per_day: f64,
    daily_target: f64,
    effective_hourly: f64,
) -> Simulation {
    let required_machines = if hours_per_day > 0.0 && effective_hourly > 0.0 {
        (daily_target / hours_per_day) / effective_hourly
    } else {
        0.0
    };
    Simulation {
        required_machines,
        total_man_hours: workers * hours_per_day,
    }
}
