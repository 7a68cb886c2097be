//! Motion classification and step detection.
//!
//! A single streaming engine turns raw accelerometer samples into two
//! outputs per sample: an [`Activity`] label and a step-detected flag. See
//! [`MotionEngine`] for the algorithm.

mod engine;

pub use engine::{Activity, IngestResult, MotionConfig, MotionEngine};
