use metricsprobe_core::{CounterHandler, CounterValue, Dimensions, Result};

use super::{impl_instrument, History, InstrumentKind, InstrumentMeta};

/// Counter that keeps every increment as a separate `i64` observation.
#[derive(Debug)]
pub struct TestCounter {
    meta: InstrumentMeta,
    history: History<i64>,
}

impl TestCounter {
    pub fn new(label: &str, dimensions: Dimensions) -> Self {
        Self {
            meta: InstrumentMeta::new(label, dimensions),
            history: History::new(),
        }
    }

    /// Widen `value` to `i64` and append it, or fail without recording.
    pub fn try_increment<V: CounterValue>(&self, value: V) -> Result<()> {
        let delta = value.to_i64()?;
        self.append(delta);
        Ok(())
    }

    /// Like `try_increment`, but a value outside `i64` is logged and dropped.
    pub fn increment<V: CounterValue>(&self, value: V) {
        if let Err(e) = self.try_increment(value) {
            tracing::warn!(label = %self.meta.label, error = %e, "counter increment rejected");
        }
    }

    fn append(&self, delta: i64) {
        self.history.append(delta);
        tracing::trace!(label = %self.meta.label, delta, "counter incremented");
    }
}

impl CounterHandler for TestCounter {
    fn increment(&self, by: i64) {
        self.append(by);
    }
}

impl_instrument!(TestCounter, i64, InstrumentKind::Counter);
