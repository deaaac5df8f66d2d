//! metricsprobe core: identity, numeric conversions, error types, and the
//! handler contract.
//!
//! This crate carries no storage or runtime state so the contract can be
//! depended on by instrumented code without pulling in the test handler.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here. Fallible paths
//! surface as `MetricsError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod dimension;
pub mod error;
pub mod fingerprint;
pub mod handler;
pub mod value;

pub use dimension::{to_owned_dimensions, Dimensions};
/// Error surface and the crate-wide result alias.
pub use error::{ErrorCode, MetricsError, Result};
pub use fingerprint::{fingerprint, Fingerprint, Fingerprinter, IdentityMode, DEFAULT_SEPARATOR};
pub use handler::{CounterHandler, MetricsHandler, RecorderHandler, TimerHandler};
pub use value::{CounterValue, RecordValue};
