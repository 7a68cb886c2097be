//! Level progression over lifetime step totals.
//!
//! Lifetime scope, deliberately: [`level_for`] takes the sum over the whole
//! history, while challenge and goal progress take today's count. The two
//! never share a parameter so they cannot be conflated.

use serde::Serialize;

/// One tier of the level catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Level {
    pub level: u8,
    pub title: &'static str,
    /// Inclusive lower bound on lifetime steps.
    pub min_steps: u64,
    /// Exclusive upper bound; `None` for the unbounded top tier.
    pub max_steps: Option<u64>,
}

/// The full catalog: contiguous, ordered by `min_steps`, covering `[0, inf)`
/// with no gaps, so every non-negative total resolves to exactly one tier.
pub const LEVELS: [Level; 7] = [
    Level { level: 1, title: "Beginner", min_steps: 0, max_steps: Some(10_000) },
    Level { level: 2, title: "Walker", min_steps: 10_000, max_steps: Some(50_000) },
    Level { level: 3, title: "Jogger", min_steps: 50_000, max_steps: Some(100_000) },
    Level { level: 4, title: "Runner", min_steps: 100_000, max_steps: Some(250_000) },
    Level { level: 5, title: "Athlete", min_steps: 250_000, max_steps: Some(500_000) },
    Level { level: 6, title: "Champion", min_steps: 500_000, max_steps: Some(1_000_000) },
    Level { level: 7, title: "Legend", min_steps: 1_000_000, max_steps: None },
];

/// A resolved tier plus progress toward the next one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LevelStanding {
    pub level: Level,
    /// Fraction of the tier completed, clamped to `[0, 1]`. The unbounded
    /// top tier always reports 1 (max level).
    pub progress: f64,
}

/// Resolve the tier for a lifetime step total.
pub fn level_for(total_steps: u64) -> LevelStanding {
    // Highest tier first; the first one whose floor has been reached wins.
    // Tier 1 starts at 0, so the scan always hits.
    let level = *LEVELS
        .iter()
        .rev()
        .find(|tier| total_steps >= tier.min_steps)
        .unwrap_or(&LEVELS[0]);

    let progress = match level.max_steps {
        None => 1.0,
        Some(max) => {
            let span = (max - level.min_steps) as f64;
            ((total_steps - level.min_steps) as f64 / span).clamp(0.0, 1.0)
        }
    };

    LevelStanding { level, progress }
}

/// Steps remaining until the next tier; `None` at max level.
pub fn steps_to_next_level(total_steps: u64) -> Option<u64> {
    level_for(total_steps)
        .level
        .max_steps
        .map(|max| max.saturating_sub(total_steps))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_steps_is_beginner_at_zero_progress() {
        let standing = level_for(0);
        assert_eq!(standing.level.level, 1);
        assert_eq!(standing.level.title, "Beginner");
        assert_eq!(standing.progress, 0.0);
    }

    #[test]
    fn mid_tier_progress_is_proportional() {
        // Walker spans 10k-50k, so 30k sits at the midpoint.
        let standing = level_for(30_000);
        assert_eq!(standing.level.title, "Walker");
        assert!((standing.progress - 0.5).abs() < 1e-12);
    }

    #[test]
    fn top_tier_is_always_max_level() {
        let standing = level_for(1_500_000);
        assert_eq!(standing.level.level, 7);
        assert_eq!(standing.level.title, "Legend");
        assert_eq!(standing.progress, 1.0);
    }

    #[test]
    fn boundaries_resolve_to_the_higher_tier() {
        assert_eq!(level_for(9_999).level.title, "Beginner");
        assert_eq!(level_for(10_000).level.title, "Walker");
        assert_eq!(level_for(1_000_000).level.title, "Legend");
    }

    #[test]
    fn catalog_is_contiguous_and_ordered() {
        for pair in LEVELS.windows(2) {
            assert_eq!(pair[0].max_steps, Some(pair[1].min_steps));
            assert!(pair[0].level < pair[1].level);
        }
        assert_eq!(LEVELS[0].min_steps, 0);
        assert_eq!(LEVELS[6].max_steps, None);
    }

    #[test]
    fn progress_resets_at_tier_boundary() {
        assert!(level_for(49_999).progress > 0.99);
        assert_eq!(level_for(50_000).progress, 0.0);
    }

    #[test]
    fn steps_to_next_counts_down() {
        assert_eq!(steps_to_next_level(0), Some(10_000));
        assert_eq!(steps_to_next_level(9_000), Some(1_000));
        assert_eq!(steps_to_next_level(1_500_000), None);
    }
}
