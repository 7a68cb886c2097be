//! Deterministic daily challenges.
//!
//! No scheduler: the challenge for a day is a pure function of the calendar
//! date, the user's goal, and today's step count. The id embeds the date, so
//! a new challenge appears each day and repeated queries within a day agree.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

struct ChallengeTemplate {
    title: &'static str,
    /// Description with a `{target}` placeholder.
    description: &'static str,
    /// Scale applied to the daily goal before rounding.
    multiplier: f64,
}

const CHALLENGE_TEMPLATES: [ChallengeTemplate; 4] = [
    ChallengeTemplate {
        title: "Step Up!",
        description: "Walk {target} steps today",
        multiplier: 1.2,
    },
    ChallengeTemplate {
        title: "Power Walk",
        description: "Hit {target} steps before dinner",
        multiplier: 1.5,
    },
    ChallengeTemplate {
        title: "Easy Day",
        description: "Maintain {target} steps",
        multiplier: 0.8,
    },
    ChallengeTemplate {
        title: "Push Limits",
        description: "Challenge yourself with {target} steps",
        multiplier: 1.3,
    },
];

/// One day's challenge, recomputed fresh on every query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyChallenge {
    /// `challenge_YYYY-MM-DD` -- stable within a day, new each day.
    pub id: String,
    pub title: String,
    pub description: String,
    pub target_steps: u32,
    pub completed: bool,
    /// Fraction of the target reached, clamped to `[0, 1]`.
    pub progress: f64,
}

/// Build the challenge for `today`.
///
/// The template rotates with the day of the month, so the same calendar day
/// always yields the same challenge. The target scales the daily goal and
/// rounds to the nearest thousand. A goal of zero or below (or a target that
/// rounds away entirely) has no valid target: progress 0, not completed,
/// never a division by zero.
pub fn daily_challenge(goal: i64, today_steps: u32, today: NaiveDate) -> DailyChallenge {
    let template = &CHALLENGE_TEMPLATES[today.day() as usize % CHALLENGE_TEMPLATES.len()];

    let target_steps = if goal > 0 {
        let target = ((goal as f64 * template.multiplier) / 1000.0).round() * 1000.0;
        target.clamp(0.0, f64::from(u32::MAX)) as u32
    } else {
        0
    };

    let (completed, progress) = if target_steps == 0 {
        (false, 0.0)
    } else {
        (
            today_steps >= target_steps,
            (f64::from(today_steps) / f64::from(target_steps)).clamp(0.0, 1.0),
        )
    };

    DailyChallenge {
        id: format!("challenge_{}", today.format("%Y-%m-%d")),
        title: template.title.to_string(),
        description: template
            .description
            .replace("{target}", &format_thousands(target_steps)),
        target_steps,
        completed,
        progress,
    }
}

/// `12000` -> `"12,000"`, matching how targets read on screen.
pub(crate) fn format_thousands(n: u32) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn template_rotates_with_day_of_month() {
        // day 4 -> index 0, day 5 -> index 1, and so on.
        let a = daily_challenge(10_000, 0, date(2024, 1, 4));
        let b = daily_challenge(10_000, 0, date(2024, 1, 5));
        assert_eq!(a.title, "Step Up!");
        assert_eq!(b.title, "Power Walk");
    }

    #[test]
    fn target_rounds_to_nearest_thousand() {
        // 10000 * 1.2 = 12000, already round.
        let c = daily_challenge(10_000, 0, date(2024, 1, 4));
        assert_eq!(c.target_steps, 12_000);

        // 7300 * 1.2 = 8760 -> 9000.
        let c = daily_challenge(7_300, 0, date(2024, 1, 4));
        assert_eq!(c.target_steps, 9_000);
    }

    #[test]
    fn id_embeds_the_date() {
        let c = daily_challenge(10_000, 0, date(2024, 3, 7));
        assert_eq!(c.id, "challenge_2024-03-07");
    }

    #[test]
    fn description_embeds_formatted_target() {
        let c = daily_challenge(10_000, 0, date(2024, 1, 4));
        assert_eq!(c.description, "Walk 12,000 steps today");
    }

    #[test]
    fn progress_clamps_and_completes() {
        let day = date(2024, 1, 4); // target 12000
        let halfway = daily_challenge(10_000, 6_000, day);
        assert!((halfway.progress - 0.5).abs() < 1e-12);
        assert!(!halfway.completed);

        let done = daily_challenge(10_000, 20_000, day);
        assert_eq!(done.progress, 1.0);
        assert!(done.completed);
    }

    #[test]
    fn exact_target_completes() {
        let c = daily_challenge(10_000, 12_000, date(2024, 1, 4));
        assert!(c.completed);
        assert_eq!(c.progress, 1.0);
    }

    #[test]
    fn degenerate_goal_has_no_valid_target() {
        for goal in [0, -5_000] {
            let c = daily_challenge(goal, 8_000, date(2024, 1, 4));
            assert_eq!(c.target_steps, 0);
            assert_eq!(c.progress, 0.0);
            assert!(!c.completed);
            assert!(c.progress.is_finite());
        }
    }

    #[test]
    fn tiny_goal_rounds_away() {
        // 300 * 1.2 = 360 -> rounds to 0: treated as no valid target.
        let c = daily_challenge(300, 8_000, date(2024, 1, 4));
        assert_eq!(c.target_steps, 0);
        assert_eq!(c.progress, 0.0);
        assert!(!c.completed);
    }

    #[test]
    fn repeated_calls_are_identical() {
        let a = daily_challenge(10_000, 4_200, date(2024, 6, 9));
        let b = daily_challenge(10_000, 4_200, date(2024, 6, 9));
        assert_eq!(a, b);
    }

    #[test]
    fn thousands_formatting() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1_000), "1,000");
        assert_eq!(format_thousands(12_000), "12,000");
        assert_eq!(format_thousands(1_234_567), "1,234,567");
    }
}
