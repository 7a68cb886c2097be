//! History store boundary: day-keyed step history, daily goal, water counts.
//!
//! The store is owned by the application layer; the core only reads from it.
//! After the motion engine reports a detected step, persisting the
//! incremented total is the caller's responsibility -- nothing in this crate
//! writes through [`HistoryStore`].
//!
//! [`MemoryStore`] is the reference implementation, used by tests and by
//! embedders that bring their own persistence. Its JSON snapshot format is
//! the app's historical schema: a flat `{"YYYY-MM-DD": steps}` object.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::error::{Result, StoreError};

/// Daily step goal assumed when the user never set one.
pub const DEFAULT_GOAL: i64 = 10_000;

/// Glasses of water per day the tracker nudges toward.
pub const WATER_GOAL_GLASSES: u32 = 8;

/// Day-keyed step totals. One entry per calendar day; saving a day's running
/// total overwrites the previous entry, never accumulates onto it.
pub type DailyHistory = BTreeMap<NaiveDate, u32>;

/// Lifetime step total across a history snapshot.
pub fn total_steps(history: &DailyHistory) -> u64 {
    history.values().map(|&steps| u64::from(steps)).sum()
}

/// Read side of the persisted tracker state.
pub trait HistoryStore {
    /// Full day->steps snapshot.
    fn history(&self) -> Result<DailyHistory, StoreError>;

    /// Daily step goal. Implementations fall back to [`DEFAULT_GOAL`] when
    /// the user never set one.
    fn goal(&self) -> Result<i64, StoreError>;

    /// Steps recorded for `today`, 0 when no entry exists yet.
    fn today_steps(&self, today: NaiveDate) -> Result<u32, StoreError>;

    /// Glasses of water recorded for `date`, 0 when no entry exists.
    fn water(&self, date: NaiveDate) -> Result<u32, StoreError>;
}

/// In-memory [`HistoryStore`].
///
/// The setters exist for the orchestration layer (and tests); they are not
/// part of the read-only contract the analytics consume.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    history: DailyHistory,
    goal: Option<i64>,
    water: BTreeMap<NaiveDate, u32>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite the step total for a day.
    pub fn set_daily_steps(&mut self, date: NaiveDate, steps: u32) {
        self.history.insert(date, steps);
    }

    /// Add one step to a day's total. Called once per detected step.
    pub fn record_step(&mut self, date: NaiveDate) {
        let entry = self.history.entry(date).or_insert(0);
        *entry = entry.saturating_add(1);
    }

    pub fn set_goal(&mut self, goal: i64) {
        self.goal = Some(goal);
    }

    /// Set a day's water count. Decrements clamp at zero on the caller side;
    /// the store just records whatever non-negative count it is handed.
    pub fn set_water(&mut self, date: NaiveDate, glasses: u32) {
        self.water.insert(date, glasses);
    }

    /// Serialize the step history to the `{"YYYY-MM-DD": steps}` schema.
    pub fn export_history_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.history)?)
    }

    /// Replace the step history from a `{"YYYY-MM-DD": steps}` snapshot.
    pub fn import_history_json(&mut self, json: &str) -> Result<()> {
        self.history = serde_json::from_str(json)?;
        Ok(())
    }
}

impl HistoryStore for MemoryStore {
    fn history(&self) -> Result<DailyHistory, StoreError> {
        Ok(self.history.clone())
    }

    fn goal(&self) -> Result<i64, StoreError> {
        Ok(self.goal.unwrap_or(DEFAULT_GOAL))
    }

    fn today_steps(&self, today: NaiveDate) -> Result<u32, StoreError> {
        Ok(self.history.get(&today).copied().unwrap_or(0))
    }

    fn water(&self, date: NaiveDate) -> Result<u32, StoreError> {
        Ok(self.water.get(&date).copied().unwrap_or(0))
    }
}
