//! Derived daily metrics for the home view.

use serde::{Deserialize, Serialize};

/// Calories burned per step (kcal).
const CALORIES_PER_STEP: f64 = 0.04;
/// Distance covered per step (km), an average adult stride.
const KM_PER_STEP: f64 = 0.000_762;

/// Display metrics derived from today's step count. Never stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyMetrics {
    pub calories_burned: f64,
    pub distance_km: f64,
    /// Fraction of the daily goal reached, clamped to `[0, 1]`.
    pub goal_progress: f64,
}

/// Derive display metrics from today's step count and the daily goal.
///
/// Today scope only -- lifetime totals go through
/// [`level_for`](super::level_for) instead. A non-positive goal reports zero
/// progress rather than dividing by zero.
pub fn daily_metrics(today_steps: u32, goal: i64) -> DailyMetrics {
    let goal_progress = if goal > 0 {
        (f64::from(today_steps) / goal as f64).clamp(0.0, 1.0)
    } else {
        0.0
    };

    DailyMetrics {
        calories_burned: f64::from(today_steps) * CALORIES_PER_STEP,
        distance_km: f64::from(today_steps) * KM_PER_STEP,
        goal_progress,
    }
}
