//! Top-level facade crate for metricsprobe.
//!
//! Re-exports the handler contract and the in-memory test handler so users can
//! depend on a single crate.

pub mod core {
    pub use metricsprobe_core::*;
}

pub mod testing {
    pub use metricsprobe_testing::*;
}
