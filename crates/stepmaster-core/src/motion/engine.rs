//! Streaming step detector and activity classifier.
//!
//! The engine is caller-driven: the sensor layer calls [`MotionEngine::ingest`]
//! once per sample, serially, and the engine keeps only a small rolling
//! window of magnitudes plus the time of the last detected step. Two signal
//! paths run off each sample:
//!
//! - **Step detection** on the raw magnitude, with a short refractory window
//!   so one footfall registers once. Tuned sensitive: a missed step is worse
//!   than an occasional extra.
//! - **Classification** on the 20-sample moving average, with hysteresis: for
//!   two seconds after a detected step the engine reports Walking (or
//!   Running) regardless of the average, which lags and can dip into rest
//!   territory in the trough between footfalls.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::error::SampleError;
use crate::sensor::Sample;

/// Tuning knobs for [`MotionEngine`]. `Default` matches the shipped tracker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MotionConfig {
    /// Raw magnitude above which a footfall may register (g).
    pub step_threshold: f64,
    /// Refractory window after a detected step (ms); peaks inside it are the
    /// same footfall.
    pub debounce_ms: u64,
    /// How long after a step the classifier stays in the recent-step regime (ms).
    pub recent_step_window_ms: u64,
    /// Smoothed magnitude at or above which activity reads as Running (g).
    pub running_threshold: f64,
    /// Smoothed magnitude above which activity reads as Walking (g).
    pub walking_threshold: f64,
    /// Number of magnitudes kept for the moving average.
    pub window_size: usize,
    /// Samples whose magnitude exceeds this are dropped as glitches (g).
    pub max_magnitude: f64,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            step_threshold: 1.08,        // very sensitive
            debounce_ms: 200,            // max ~5 steps/sec
            recent_step_window_ms: 2000,
            running_threshold: 1.6,
            walking_threshold: 1.1,
            window_size: 20,
            max_magnitude: 16.0,         // far above any footfall
        }
    }
}

/// Activity label reported on every ingested sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Activity {
    Rest,
    Walking,
    Running,
}

/// Outcome of ingesting one sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestResult {
    pub activity: Activity,
    /// True exactly when the caller should add one step to the persisted
    /// total. The engine never touches the store itself.
    pub step_detected: bool,
}

/// Streaming motion engine. One instance per tracked sample stream.
///
/// `ingest` mutates the rolling window, so calls must be serialized per
/// instance; a platform that delivers samples from multiple threads needs a
/// single-writer queue (or a mutex around the engine) in front of it.
/// Constructing an engine is the reset: a fresh instance has an empty window
/// and no last-step time.
#[derive(Debug, Clone)]
pub struct MotionEngine {
    config: MotionConfig,
    /// FIFO of recent magnitudes, oldest evicted first.
    window: VecDeque<f64>,
    /// Time of the last detected step; `None` until the first one fires.
    last_step_ms: Option<u64>,
    /// Label reported for the previous sample, retained across dropped ones.
    last_activity: Activity,
}

impl MotionEngine {
    pub fn new() -> Self {
        Self::with_config(MotionConfig::default())
    }

    pub fn with_config(config: MotionConfig) -> Self {
        let window = VecDeque::with_capacity(config.window_size);
        Self {
            config,
            window,
            last_step_ms: None,
            last_activity: Activity::Rest,
        }
    }

    /// Process one sample and report the activity label plus whether a step
    /// was detected on it.
    ///
    /// Malformed samples (non-finite components, implausible magnitude) are
    /// dropped: the window and timing state stay untouched and the previous
    /// activity label is returned with `step_detected = false`.
    pub fn ingest(&mut self, sample: &Sample) -> IngestResult {
        let magnitude = match self.validate(sample) {
            Ok(magnitude) => magnitude,
            Err(_) => {
                return IngestResult {
                    activity: self.last_activity,
                    step_detected: false,
                }
            }
        };

        self.window.push_back(magnitude);
        if self.window.len() > self.config.window_size {
            self.window.pop_front();
        }
        let smoothed = self.window.iter().sum::<f64>() / self.window.len() as f64;

        // Step detection runs on the raw magnitude: the moving average lags
        // and would blunt the very peak being looked for.
        let now = sample.timestamp_ms;
        let mut step_detected = false;
        if magnitude > self.config.step_threshold && self.debounce_elapsed(now) {
            self.last_step_ms = Some(now);
            step_detected = true;
        }

        let recent_step = self
            .last_step_ms
            .map(|last| now.saturating_sub(last) < self.config.recent_step_window_ms)
            .unwrap_or(false);

        let activity = if recent_step {
            // A just-fired step outweighs the smoothed average.
            if smoothed >= self.config.running_threshold {
                Activity::Running
            } else {
                Activity::Walking
            }
        } else if smoothed >= self.config.running_threshold {
            Activity::Running
        } else if smoothed > self.config.walking_threshold {
            Activity::Walking
        } else {
            Activity::Rest
        };

        self.last_activity = activity;
        IngestResult {
            activity,
            step_detected,
        }
    }

    fn debounce_elapsed(&self, now: u64) -> bool {
        match self.last_step_ms {
            Some(last) => now.saturating_sub(last) > self.config.debounce_ms,
            // No step yet, nothing to debounce against.
            None => true,
        }
    }

    fn validate(&self, sample: &Sample) -> Result<f64, SampleError> {
        if !(sample.x.is_finite() && sample.y.is_finite() && sample.z.is_finite()) {
            return Err(SampleError::NonFinite);
        }
        let magnitude = sample.magnitude();
        if magnitude > self.config.max_magnitude {
            return Err(SampleError::OutOfRange {
                magnitude,
                limit: self.config.max_magnitude,
            });
        }
        Ok(magnitude)
    }
}

impl Default for MotionEngine {
    fn default() -> Self {
        Self::new()
    }
}
