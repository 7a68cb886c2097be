//! Sensor boundary: acceleration samples and the sources that deliver them.
//!
//! The core consumes samples; it never owns a sensor. A platform layer
//! implements [`SensorSource`] over whatever accelerometer API it has and
//! feeds the callback at a fixed nominal rate (~10 Hz). Platforms without an
//! accelerometer use [`UnavailableSensor`]: absence is "no samples ever
//! delivered", not an error.

use serde::{Deserialize, Serialize};

/// A single gravity-inclusive tri-axial accelerometer reading.
///
/// Components are in g, so a device at rest reads a magnitude near 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Capture time in milliseconds since the Unix epoch.
    pub timestamp_ms: u64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Sample {
    pub fn new(timestamp_ms: u64, x: f64, y: f64, z: f64) -> Self {
        Self { timestamp_ms, x, y, z }
    }

    /// Euclidean norm of the three components.
    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }
}

/// Callback invoked once per delivered sample.
pub type SampleCallback = Box<dyn FnMut(Sample) + Send>;

/// Handle to an active sample subscription.
pub trait SensorSubscription {
    /// Stop delivery. Must be idempotent: cancelling an already-cancelled
    /// subscription is a no-op.
    fn cancel(&mut self);
}

/// A source of accelerometer samples.
///
/// Implementations deliver samples serially -- the motion engine mutates
/// rolling-window state per call, so a source that receives samples on
/// multiple threads must funnel them through a single-writer queue before
/// invoking the callback.
pub trait SensorSource {
    type Subscription: SensorSubscription;

    /// Begin delivering samples to `on_sample`. Delivery continues until the
    /// returned handle is cancelled or dropped.
    fn subscribe(&mut self, on_sample: SampleCallback) -> Self::Subscription;
}

/// Sensor source for platforms without an accelerometer.
///
/// Subscribing succeeds but no sample is ever delivered, which leaves the
/// motion engine idle and every analytics query at its baseline.
#[derive(Debug, Default)]
pub struct UnavailableSensor;

/// Subscription that was never backed by a device.
#[derive(Debug, Default)]
pub struct IdleSubscription {
    cancelled: bool,
}

impl SensorSubscription for IdleSubscription {
    fn cancel(&mut self) {
        self.cancelled = true;
    }
}

impl SensorSource for UnavailableSensor {
    type Subscription = IdleSubscription;

    fn subscribe(&mut self, _on_sample: SampleCallback) -> Self::Subscription {
        IdleSubscription::default()
    }
}
