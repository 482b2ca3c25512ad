//! Goal aggregation and projection.
//!
//! Everything here is derived on every read; there is no stored goal state.
//! The projection is a deliberately naive linear extrapolation from the
//! user's declared daily rate -- a motivational estimate, not a forecast.

use shared::MonthLedger;

/// The fixed accumulation target: PKR 1 Lakh.
pub const GOAL_TARGET_PKR: f64 = 100_000.0;

/// Sum of all entries in a month; 0.0 for an empty ledger.
pub fn month_total(month: &MonthLedger) -> f64 {
    month.values().sum()
}

/// Amount still to save, clamped so it never goes negative.
pub fn remaining(total: f64, target: f64) -> f64 {
    (target - total).max(0.0)
}

/// Projected days until the goal is met at `daily_rate` PKR per day.
///
/// 0 when the goal is already met or the rate is not positive; there is no
/// division by zero and never a negative or infinite projection.
pub fn days_to_goal(remaining: f64, daily_rate: f64) -> u32 {
    if remaining <= 0.0 || daily_rate <= 0.0 {
        return 0;
    }
    (remaining / daily_rate).ceil() as u32
}

/// Derived snapshot of goal progress for one month, recomputed on every read.
#[derive(Debug, Clone, PartialEq)]
pub struct GoalProgress {
    pub target: f64,
    pub saved: f64,
    pub remaining: f64,
    pub days_to_goal: u32,
    /// Percent of the target reached, capped at 100.
    pub percent: f64,
}

/// Compute the full progress snapshot for a month's ledger.
pub fn progress(month: &MonthLedger, target: f64, daily_rate: f64) -> GoalProgress {
    let saved = month_total(month);
    let remaining = remaining(saved, target);
    GoalProgress {
        target,
        saved,
        remaining,
        days_to_goal: days_to_goal(remaining, daily_rate),
        percent: if target > 0.0 {
            (saved / target * 100.0).min(100.0)
        } else {
            0.0
        },
    }
}
