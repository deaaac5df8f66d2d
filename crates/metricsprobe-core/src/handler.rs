//! The metrics-handler contract that instrumented code calls against.
//!
//! Handles are trait objects so production code stays unaware of which
//! handler backs them. All operations are synchronous and infallible from the
//! caller's perspective.

use std::sync::Arc;

/// Monotonic counter handle.
pub trait CounterHandler: Send + Sync {
    fn increment(&self, by: i64);
}

/// Value recorder handle.
pub trait RecorderHandler: Send + Sync {
    fn record_int(&self, value: i64);
    fn record_float(&self, value: f64);
}

/// Duration handle (nanosecond resolution).
pub trait TimerHandler: Send + Sync {
    fn record_nanoseconds(&self, duration: i64);
}

/// Factory for named, dimensioned instruments.
///
/// Implementations may return a previously created handle for the same
/// identity; callers must not assume a fresh instance.
pub trait MetricsHandler: Send + Sync {
    fn make_counter(&self, label: &str, dimensions: &[(&str, &str)]) -> Arc<dyn CounterHandler>;

    fn make_recorder(
        &self,
        label: &str,
        dimensions: &[(&str, &str)],
        aggregate: bool,
    ) -> Arc<dyn RecorderHandler>;

    fn make_timer(&self, label: &str, dimensions: &[(&str, &str)]) -> Arc<dyn TimerHandler>;
}
