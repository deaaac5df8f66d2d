//! In-memory instruments.
//!
//! Three concrete kinds share one append-only `History` and one read-side
//! trait (`Instrument`). Kind-specific input conversion lives on each type.
//! Identity for equality is a UUID assigned at construction; it is unrelated
//! to the fingerprint the cache uses for lookup.

mod counter;
mod history;
mod recorder;
mod timer;

use uuid::Uuid;

use metricsprobe_core::Dimensions;

pub use counter::TestCounter;
pub use history::{History, Observation};
pub use recorder::TestRecorder;
pub use timer::TestTimer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstrumentKind {
    Counter,
    Recorder,
    Timer,
}

impl InstrumentKind {
    pub fn as_str(self) -> &'static str {
        match self {
            InstrumentKind::Counter => "counter",
            InstrumentKind::Recorder => "recorder",
            InstrumentKind::Timer => "timer",
        }
    }
}

/// Read access shared by every instrument kind.
pub trait Instrument: Send + Sync {
    type Value: Copy + Send;

    const KIND: InstrumentKind;

    fn id(&self) -> Uuid;
    fn label(&self) -> &str;
    fn dimensions(&self) -> &[(String, String)];
    fn history(&self) -> &History<Self::Value>;

    /// All observations in append order.
    fn values(&self) -> Vec<Observation<Self::Value>> {
        self.history().snapshot()
    }

    fn last_value(&self) -> Option<Self::Value> {
        self.history().last().map(|o| o.value)
    }

    fn len(&self) -> usize {
        self.history().len()
    }

    fn is_empty(&self) -> bool {
        self.history().is_empty()
    }
}

/// Immutable identity fields common to all kinds.
#[derive(Debug)]
pub(crate) struct InstrumentMeta {
    pub(crate) id: Uuid,
    pub(crate) label: String,
    pub(crate) dimensions: Dimensions,
}

impl InstrumentMeta {
    pub(crate) fn new(label: &str, dimensions: Dimensions) -> Self {
        Self {
            id: Uuid::new_v4(),
            label: label.to_string(),
            dimensions,
        }
    }
}

macro_rules! impl_instrument {
    ($ty:ty, $value:ty, $kind:expr) => {
        impl $crate::instrument::Instrument for $ty {
            type Value = $value;

            const KIND: $crate::instrument::InstrumentKind = $kind;

            fn id(&self) -> ::uuid::Uuid {
                self.meta.id
            }

            fn label(&self) -> &str {
                &self.meta.label
            }

            fn dimensions(&self) -> &[(String, String)] {
                &self.meta.dimensions
            }

            fn history(&self) -> &$crate::instrument::History<$value> {
                &self.history
            }
        }

        impl PartialEq for $ty {
            fn eq(&self, other: &Self) -> bool {
                self.meta.id == other.meta.id
            }
        }

        impl Eq for $ty {}
    };
}

pub(crate) use impl_instrument;
