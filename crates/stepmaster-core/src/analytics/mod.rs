//! Progress analytics for StepMaster.
//!
//! Four pure queries over a day-keyed history snapshot plus today's live
//! count: streak length, level progression, a deterministic daily challenge,
//! and the badge catalog. Each takes "today" (and any other scalar it needs)
//! as an explicit argument -- nothing in here reads the clock or the store,
//! so every query is a deterministic function of its inputs and safe to call
//! concurrently.

mod badges;
mod challenge;
mod level;
mod metrics;
mod streak;

pub use badges::{badges, Badge, BADGE_IDS};
pub use challenge::{daily_challenge, DailyChallenge};
pub use level::{level_for, steps_to_next_level, Level, LevelStanding, LEVELS};
pub use metrics::{daily_metrics, DailyMetrics};
pub use streak::{calculate_streak, ACTIVE_DAY_THRESHOLD};
