//! Consecutive-active-day streak calculation.

use chrono::NaiveDate;

use crate::store::DailyHistory;

/// Minimum recorded steps for a day to count toward a streak.
pub const ACTIVE_DAY_THRESHOLD: u32 = 1000;

/// Number of consecutive active days ending at `today` (or yesterday).
///
/// Today gets a grace day: a streak that ran through yesterday still counts
/// while today is in progress and has no record yet. When today itself is
/// active, yesterday is not separately required -- the walk backward starts
/// from the day before whichever anchor qualified and stops at the first
/// inactive or missing day.
pub fn calculate_streak(history: &DailyHistory, today: NaiveDate) -> u32 {
    let anchor = if is_active(history, today) {
        today
    } else {
        let Some(yesterday) = today.pred_opt() else {
            return 0;
        };
        if is_active(history, yesterday) {
            yesterday
        } else {
            return 0;
        }
    };

    let mut streak = 1;
    let mut day = anchor;
    while let Some(prev) = day.pred_opt() {
        if !is_active(history, prev) {
            break;
        }
        streak += 1;
        day = prev;
    }
    streak
}

fn is_active(history: &DailyHistory, day: NaiveDate) -> bool {
    history
        .get(&day)
        .is_some_and(|&steps| steps >= ACTIVE_DAY_THRESHOLD)
}
