//! Badge catalog and unlock computation.
//!
//! Six badges, recomputed fresh from a history snapshot on every query --
//! nothing here is persisted. Two of them, `early_bird` and `night_owl`, are
//! permanently locked: the history records daily totals only, so their
//! time-of-day conditions can never be evaluated. That is a known limitation
//! carried over intact; they stay in the catalog as visible goals.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use super::streak::calculate_streak;
use crate::store::{total_steps, DailyHistory};

const STREAK_TARGET: u32 = 7;
const SINGLE_DAY_TARGET: u32 = 10_000;
const LIFETIME_TARGET: u64 = 50_000;
/// Steps on a Saturday or Sunday needed for the weekend badge.
const WEEKEND_THRESHOLD: u32 = 5_000;

/// Stable badge ids, in catalog order.
pub const BADGE_IDS: [&str; 6] = [
    "streak_7",
    "club_10k",
    "lifetime_50k",
    "early_bird",
    "night_owl",
    "weekend_warrior",
];

/// One badge with its current unlock state and progress.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Badge {
    /// Stable identifier from [`BADGE_IDS`].
    pub id: String,
    pub name: String,
    pub description: String,
    /// Ionicon name rendered by the UI layer.
    pub icon: String,
    /// Hex accent color.
    pub color: String,
    pub unlocked: bool,
    /// Clamped to `[0, 1]`.
    pub progress: f64,
    /// Short human-readable progress line ("3/7 Days", "8.2k/10k", ...).
    pub progress_text: String,
}

/// Compute all six badges from a history snapshot.
pub fn badges(history: &DailyHistory, today: NaiveDate) -> Vec<Badge> {
    let streak = calculate_streak(history, today);
    let total = total_steps(history);
    let max_daily = history.values().copied().max().unwrap_or(0);
    let weekend_active = history.iter().any(|(date, &steps)| {
        matches!(date.weekday(), Weekday::Sat | Weekday::Sun) && steps >= WEEKEND_THRESHOLD
    });

    vec![
        Badge {
            id: "streak_7".into(),
            name: "Hot Streak".into(),
            description: "7-day active streak".into(),
            icon: "flame".into(),
            color: "#f97316".into(),
            unlocked: streak >= STREAK_TARGET,
            progress: (f64::from(streak) / f64::from(STREAK_TARGET)).clamp(0.0, 1.0),
            progress_text: format!("{streak}/{STREAK_TARGET} Days"),
        },
        Badge {
            id: "club_10k".into(),
            name: "10K Club".into(),
            description: "10,000 steps in one day".into(),
            icon: "footsteps".into(),
            color: "#3b82f6".into(),
            unlocked: max_daily >= SINGLE_DAY_TARGET,
            progress: (f64::from(max_daily) / f64::from(SINGLE_DAY_TARGET)).clamp(0.0, 1.0),
            progress_text: if max_daily >= SINGLE_DAY_TARGET {
                "Unlocked!".into()
            } else {
                format!("{:.1}k/10k", f64::from(max_daily) / 1000.0)
            },
        },
        Badge {
            id: "lifetime_50k".into(),
            name: "Marathoner".into(),
            description: "50,000 total lifetime steps".into(),
            icon: "trophy".into(),
            color: "#eab308".into(),
            unlocked: total >= LIFETIME_TARGET,
            progress: (total as f64 / LIFETIME_TARGET as f64).clamp(0.0, 1.0),
            progress_text: format!("{:.0}k/50k", total as f64 / 1000.0),
        },
        // Permanently locked: no time-of-day data exists to evaluate these.
        Badge {
            id: "early_bird".into(),
            name: "Early Bird".into(),
            description: "Walk 1000+ steps by 8 AM".into(),
            icon: "sunny".into(),
            color: "#f59e0b".into(),
            unlocked: false,
            progress: 0.0,
            progress_text: "Walk early!".into(),
        },
        Badge {
            id: "night_owl".into(),
            name: "Night Owl".into(),
            description: "Hit 5000 steps after 8 PM".into(),
            icon: "moon".into(),
            color: "#8b5cf6".into(),
            unlocked: false,
            progress: 0.0,
            progress_text: "Walk late!".into(),
        },
        Badge {
            id: "weekend_warrior".into(),
            name: "Weekend Warrior".into(),
            description: "5000+ steps on weekend".into(),
            icon: "calendar".into(),
            color: "#22c55e".into(),
            unlocked: weekend_active,
            progress: if weekend_active { 1.0 } else { 0.0 },
            progress_text: if weekend_active {
                "Unlocked!".into()
            } else {
                "Walk Sat/Sun".into()
            },
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn find<'a>(badges: &'a [Badge], id: &str) -> &'a Badge {
        badges.iter().find(|b| b.id == id).unwrap()
    }

    #[test]
    fn empty_history_yields_six_locked_badges() {
        let all = badges(&DailyHistory::new(), date(2024, 1, 15));
        assert_eq!(all.len(), 6);
        for badge in &all {
            assert!(!badge.unlocked);
            assert!((0.0..=1.0).contains(&badge.progress));
        }
    }

    #[test]
    fn ids_match_the_catalog_order() {
        let all = badges(&DailyHistory::new(), date(2024, 1, 15));
        let ids: Vec<&str> = all.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, BADGE_IDS);
    }

    #[test]
    fn streak_badge_unlocks_at_seven_days() {
        let today = date(2024, 1, 15);
        let history: DailyHistory = (0..7)
            .map(|i| (today - Duration::days(i), 2000))
            .collect();
        let all = badges(&history, today);
        let badge = find(&all, "streak_7");
        assert!(badge.unlocked);
        assert_eq!(badge.progress, 1.0);
        assert_eq!(badge.progress_text, "7/7 Days");
    }

    #[test]
    fn streak_badge_shows_partial_progress() {
        let today = date(2024, 1, 15);
        let history: DailyHistory = (0..3)
            .map(|i| (today - Duration::days(i), 2000))
            .collect();
        let all = badges(&history, today);
        let badge = find(&all, "streak_7");
        assert!(!badge.unlocked);
        assert!((badge.progress - 3.0 / 7.0).abs() < 1e-12);
        assert_eq!(badge.progress_text, "3/7 Days");
    }

    #[test]
    fn ten_k_club_tracks_best_single_day() {
        let history = DailyHistory::from([
            (date(2024, 1, 10), 8_200),
            (date(2024, 1, 11), 4_000),
        ]);
        let all = badges(&history, date(2024, 1, 15));
        let badge = find(&all, "club_10k");
        assert!(!badge.unlocked);
        assert!((badge.progress - 0.82).abs() < 1e-12);
        assert_eq!(badge.progress_text, "8.2k/10k");

        let history = DailyHistory::from([(date(2024, 1, 10), 12_000)]);
        let all = badges(&history, date(2024, 1, 15));
        let badge = find(&all, "club_10k");
        assert!(badge.unlocked);
        assert_eq!(badge.progress_text, "Unlocked!");
    }

    #[test]
    fn lifetime_badge_sums_all_days() {
        // 15000 + 20000 + 20000 = 55000 >= 50000.
        let history = DailyHistory::from([
            (date(2024, 1, 10), 15_000),
            (date(2024, 1, 11), 20_000),
            (date(2024, 1, 12), 20_000),
        ]);
        let all = badges(&history, date(2024, 1, 15));
        let badge = find(&all, "lifetime_50k");
        assert!(badge.unlocked);
        assert_eq!(badge.progress, 1.0);
    }

    #[test]
    fn weekend_warrior_needs_a_big_weekend_day() {
        // 2024-01-13 is a Saturday.
        let saturday = date(2024, 1, 13);
        assert_eq!(saturday.weekday(), Weekday::Sat);

        let history = DailyHistory::from([(saturday, 6_000)]);
        let all = badges(&history, date(2024, 1, 15));
        assert!(find(&all, "weekend_warrior").unlocked);

        // Below the 5000 bar, or on a weekday, stays locked.
        let history = DailyHistory::from([(saturday, 4_000)]);
        let all = badges(&history, date(2024, 1, 15));
        assert!(!find(&all, "weekend_warrior").unlocked);

        let history = DailyHistory::from([(date(2024, 1, 15), 6_000)]);
        let all = badges(&history, date(2024, 1, 16));
        assert!(!find(&all, "weekend_warrior").unlocked);
    }

    #[test]
    fn time_of_day_badges_stay_locked_regardless_of_history() {
        let today = date(2024, 1, 15);
        let history: DailyHistory = (0..30)
            .map(|i| (today - Duration::days(i), 30_000))
            .collect();
        let all = badges(&history, today);
        for id in ["early_bird", "night_owl"] {
            let badge = find(&all, id);
            assert!(!badge.unlocked);
            assert_eq!(badge.progress, 0.0);
        }
    }
}
