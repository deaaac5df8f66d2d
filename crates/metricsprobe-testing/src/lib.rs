//! metricsprobe testing handler.
//!
//! An in-memory `MetricsHandler` that keeps every observation so tests can
//! assert on exactly what instrumented code recorded. Pieces, leaves first:
//! the instruments and their histories, the per-kind get-or-create cache, the
//! `TestMetrics` handler composing three caches, and the YAML config loader.

pub mod cache;
pub mod config;
pub mod instrument;
pub mod metrics;

pub use cache::InstrumentCache;
pub use config::ProbeConfig;
pub use instrument::{
    History, Instrument, InstrumentKind, Observation, TestCounter, TestRecorder, TestTimer,
};
pub use metrics::TestMetrics;
