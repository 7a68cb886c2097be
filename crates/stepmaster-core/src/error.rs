//! Core error types for stepmaster-core.
//!
//! The error surface is deliberately narrow: the core performs no I/O, so
//! the only fallible seams are the history store boundary and sample
//! validation. Analytics queries are total functions and never fail.

use thiserror::Error;

/// Core error type for stepmaster-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// History store errors
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Sample validation errors
    #[error("Sample rejected: {0}")]
    Sample(#[from] SampleError),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// History-store-specific errors.
#[derive(Error, Debug)]
pub enum StoreError {
    /// A backing key could not be read
    #[error("Failed to read '{key}': {message}")]
    ReadFailed { key: String, message: String },

    /// A backing value exists but does not parse
    #[error("Corrupt value for '{key}': {message}")]
    CorruptValue { key: String, message: String },
}

/// Why a sensor sample was dropped.
///
/// These never escape [`MotionEngine::ingest`](crate::MotionEngine::ingest)
/// -- an invalid sample is a no-op, not a failure -- but the validation step
/// reports its reason through this type.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum SampleError {
    /// At least one acceleration component is NaN or infinite
    #[error("non-finite acceleration component")]
    NonFinite,

    /// Magnitude beyond anything a footfall can produce
    #[error("magnitude {magnitude:.1} g exceeds the physical limit of {limit:.1} g")]
    OutOfRange { magnitude: f64, limit: f64 },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
