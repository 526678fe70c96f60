//! Action timing charts.
//!
//! Each machine action has a start delay and a duration within the cycle.
//! The chart total is the latest finish, and each action maps to a
//! normalized bar span for rendering.

/// One action on the timing chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionTiming {
    /// Operator label for the action
    pub name: String,
    /// Seconds after cycle start before the action begins
    pub delay_s: f64,
    /// Seconds the action runs
    pub duration_s: f64,
}

impl ActionTiming {
    /// Create an action timing entry.
    pub fn new(name: impl Into<String>, delay_s: f64, duration_s: f64) -> Self {
        Self {
            name: name.into(),
            delay_s,
            duration_s,
        }
    }

    /// Seconds from cycle start until this action finishes.
    #[inline]
    pub fn finish_s(&self) -> f64 {
        self.delay_s + self.duration_s
    }

    /// Normalized bar span within a cycle of `cycle_s` seconds.
    pub fn span(&self, cycle_s: f64) -> TimingSpan {
        if cycle_s <= 0.0 {
            return TimingSpan {
                lead: 0.0,
                active: 0.0,
                trail: 1.0,
            };
        }
        let lead = self.delay_s / cycle_s;
        let active = self.duration_s / cycle_s;
        TimingSpan {
            lead,
            active,
            trail: (1.0 - lead - active).max(0.0),
        }
    }
}

/// Fractions of the cycle before, during, and after an action.
///
/// `lead + active + trail` is 1.0 for any action that fits the cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimingSpan {
    /// Idle fraction before the action starts
    pub lead: f64,
    /// Fraction the action is running
    pub active: f64,
    /// Idle fraction after the action ends, clamped at 0
    pub trail: f64,
}

/// Total cycle time: the latest finish over all actions, 0 for an empty
/// chart.
pub fn total_cycle(actions: &[ActionTiming]) -> f64 {
    actions
        .iter()
        .map(ActionTiming::finish_s)
        .fold(0.0, f64::max)
}
