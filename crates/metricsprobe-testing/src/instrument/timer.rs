use std::time::Duration;

use metricsprobe_core::{Dimensions, TimerHandler};

use super::{impl_instrument, History, InstrumentKind, InstrumentMeta};

/// Timer that keeps raw nanosecond durations. Negative values are accepted.
#[derive(Debug)]
pub struct TestTimer {
    meta: InstrumentMeta,
    history: History<i64>,
}

impl TestTimer {
    pub fn new(label: &str, dimensions: Dimensions) -> Self {
        Self {
            meta: InstrumentMeta::new(label, dimensions),
            history: History::new(),
        }
    }

    pub fn record_nanoseconds(&self, duration: i64) {
        self.history.append(duration);
        tracing::trace!(label = %self.meta.label, duration, "timer sample");
    }

    pub fn record_microseconds(&self, duration: i64) {
        self.record_nanoseconds(duration.saturating_mul(1_000));
    }

    pub fn record_milliseconds(&self, duration: i64) {
        self.record_nanoseconds(duration.saturating_mul(1_000_000));
    }

    pub fn record_seconds(&self, duration: i64) {
        self.record_nanoseconds(duration.saturating_mul(1_000_000_000));
    }

    /// Saturates at `i64::MAX` nanoseconds (about 292 years).
    pub fn record_duration(&self, duration: Duration) {
        let nanos = i64::try_from(duration.as_nanos()).unwrap_or(i64::MAX);
        self.record_nanoseconds(nanos);
    }
}

impl TimerHandler for TestTimer {
    fn record_nanoseconds(&self, duration: i64) {
        TestTimer::record_nanoseconds(self, duration);
    }
}

impl_instrument!(TestTimer, i64, InstrumentKind::Timer);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instrument::Instrument;

    #[test]
    fn unit_conversions() {
        let t = TestTimer::new("t", vec![]);
        t.record_microseconds(3);
        t.record_milliseconds(2);
        t.record_seconds(1);
        t.record_duration(Duration::from_millis(5));
        let values: Vec<i64> = t.values().iter().map(|o| o.value).collect();
        assert_eq!(values, vec![3_000, 2_000_000, 1_000_000_000, 5_000_000]);
    }

    #[test]
    fn conversions_saturate() {
        let t = TestTimer::new("t", vec![]);
        t.record_seconds(i64::MAX);
        t.record_seconds(i64::MIN);
        t.record_duration(Duration::MAX);
        let values: Vec<i64> = t.values().iter().map(|o| o.value).collect();
        assert_eq!(values, vec![i64::MAX, i64::MIN, i64::MAX]);
    }
}
