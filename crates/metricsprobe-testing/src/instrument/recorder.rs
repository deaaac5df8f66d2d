use metricsprobe_core::{Dimensions, RecordValue, RecorderHandler};

use super::{impl_instrument, History, InstrumentKind, InstrumentMeta};

/// Recorder that keeps raw `f64` samples.
///
/// `aggregate` is kept for interface parity only; samples are always retained
/// verbatim whatever its value.
#[derive(Debug)]
pub struct TestRecorder {
    meta: InstrumentMeta,
    aggregate: bool,
    history: History<f64>,
}

impl TestRecorder {
    pub fn new(label: &str, dimensions: Dimensions, aggregate: bool) -> Self {
        Self {
            meta: InstrumentMeta::new(label, dimensions),
            aggregate,
            history: History::new(),
        }
    }

    pub fn aggregate(&self) -> bool {
        self.aggregate
    }

    /// Record an integer or float sample; integers are widened to `f64`.
    pub fn record<V: RecordValue>(&self, value: V) {
        self.append(value.to_f64());
    }

    fn append(&self, value: f64) {
        self.history.append(value);
        tracing::trace!(label = %self.meta.label, value, "recorder sample");
    }
}

impl RecorderHandler for TestRecorder {
    fn record_int(&self, value: i64) {
        self.append(value as f64);
    }

    fn record_float(&self, value: f64) {
        self.append(value);
    }
}

impl_instrument!(TestRecorder, f64, InstrumentKind::Recorder);
