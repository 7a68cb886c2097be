//! # StepMaster Core Library
//!
//! This library provides the core logic for the StepMaster activity tracker:
//! a streaming motion classifier / step detector and a set of pure analytics
//! queries (streaks, levels, badges, daily challenges) over a day-keyed step
//! history. The surrounding application -- UI, navigation, persistence
//! plumbing, platform sensor negotiation -- is a thin layer over this crate
//! and talks to it through two narrow boundaries.
//!
//! ## Architecture
//!
//! - **Motion Engine**: A caller-driven state machine that consumes one
//!   accelerometer sample at a time via `ingest()` and reports an activity
//!   label plus a step-detected flag. No internal threads; the sensor
//!   callback drives it.
//! - **Analytics**: Stateless, total functions over an explicit history
//!   snapshot and an explicit "today". They never read the clock or the
//!   store themselves, so every query is deterministic in its arguments.
//! - **Boundaries**: [`SensorSource`] delivers samples; [`HistoryStore`]
//!   owns the day->steps mapping, the daily goal, and water counts. The core
//!   only ever reads through [`HistoryStore`]; writing the incremented step
//!   count after a detected step is the caller's job.
//!
//! ## Key Components
//!
//! - [`MotionEngine`]: step detection and Rest/Walking/Running classification
//! - [`calculate_streak`], [`level_for`], [`daily_challenge`], [`badges`]:
//!   the four analytics queries
//! - [`MemoryStore`]: in-memory [`HistoryStore`] for tests and embedding

pub mod analytics;
pub mod error;
pub mod motion;
pub mod sensor;
pub mod store;

pub use analytics::{
    badges, calculate_streak, daily_challenge, daily_metrics, level_for, steps_to_next_level,
    Badge, DailyChallenge, DailyMetrics, Level, LevelStanding, LEVELS,
};
pub use error::{CoreError, SampleError, StoreError};
pub use motion::{Activity, IngestResult, MotionConfig, MotionEngine};
pub use sensor::{Sample, SensorSource, SensorSubscription, UnavailableSensor};
pub use store::{total_steps, DailyHistory, HistoryStore, MemoryStore, DEFAULT_GOAL};
