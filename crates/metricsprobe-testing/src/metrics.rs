//! `TestMetrics`: the in-memory `MetricsHandler` for test assertions.
//!
//! Construct one per test, hand it to the code under test as
//! `Arc<dyn MetricsHandler>`, then inspect what was recorded through the
//! concrete accessors. Counters, recorders and timers live in separate caches,
//! so the same label may exist once per kind.

use std::sync::Arc;

use metricsprobe_core::{
    CounterHandler, Fingerprinter, MetricsHandler, RecorderHandler, Result, TimerHandler,
};

use crate::cache::InstrumentCache;
use crate::config::ProbeConfig;
use crate::instrument::{TestCounter, TestRecorder, TestTimer};

/// Recording `MetricsHandler`: one get-or-create cache per instrument kind.
pub struct TestMetrics {
    counters: InstrumentCache<TestCounter>,
    recorders: InstrumentCache<TestRecorder>,
    timers: InstrumentCache<TestTimer>,
}

impl Default for TestMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl TestMetrics {
    /// Values-only identity with `'.'` separator.
    pub fn new() -> Self {
        Self::with_fingerprinter(Fingerprinter::default())
    }

    pub fn with_config(cfg: &ProbeConfig) -> Result<Self> {
        Ok(Self::with_fingerprinter(cfg.identity.fingerprinter()?))
    }

    pub fn with_fingerprinter(fingerprinter: Fingerprinter) -> Self {
        Self {
            counters: InstrumentCache::new(fingerprinter.clone()),
            recorders: InstrumentCache::new(fingerprinter.clone()),
            timers: InstrumentCache::new(fingerprinter),
        }
    }

    pub fn make_counter(&self, label: &str, dimensions: &[(&str, &str)]) -> Arc<TestCounter> {
        self.counters.get_or_create(label, dimensions, TestCounter::new)
    }

    /// `aggregate` only applies when this call creates the recorder.
    pub fn make_recorder(
        &self,
        label: &str,
        dimensions: &[(&str, &str)],
        aggregate: bool,
    ) -> Arc<TestRecorder> {
        self.recorders
            .get_or_create(label, dimensions, |label, dimensions| {
                TestRecorder::new(label, dimensions, aggregate)
            })
    }

    pub fn make_timer(&self, label: &str, dimensions: &[(&str, &str)]) -> Arc<TestTimer> {
        self.timers.get_or_create(label, dimensions, TestTimer::new)
    }

    pub fn counter(&self, label: &str, dimensions: &[(&str, &str)]) -> Option<Arc<TestCounter>> {
        self.counters.get(label, dimensions)
    }

    pub fn recorder(&self, label: &str, dimensions: &[(&str, &str)]) -> Option<Arc<TestRecorder>> {
        self.recorders.get(label, dimensions)
    }

    pub fn timer(&self, label: &str, dimensions: &[(&str, &str)]) -> Option<Arc<TestTimer>> {
        self.timers.get(label, dimensions)
    }

    pub fn counters(&self) -> Vec<Arc<TestCounter>> {
        self.counters.instances()
    }

    pub fn recorders(&self) -> Vec<Arc<TestRecorder>> {
        self.recorders.instances()
    }

    pub fn timers(&self) -> Vec<Arc<TestTimer>> {
        self.timers.instances()
    }
}

impl MetricsHandler for TestMetrics {
    fn make_counter(&self, label: &str, dimensions: &[(&str, &str)]) -> Arc<dyn CounterHandler> {
        TestMetrics::make_counter(self, label, dimensions)
    }

    fn make_recorder(
        &self,
        label: &str,
        dimensions: &[(&str, &str)],
        aggregate: bool,
    ) -> Arc<dyn RecorderHandler> {
        TestMetrics::make_recorder(self, label, dimensions, aggregate)
    }

    fn make_timer(&self, label: &str, dimensions: &[(&str, &str)]) -> Arc<dyn TimerHandler> {
        TestMetrics::make_timer(self, label, dimensions)
    }
}
