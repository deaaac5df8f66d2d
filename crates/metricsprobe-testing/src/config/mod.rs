//! Probe config loader (strict parsing).
//!
//! Only identity rules are configurable; instruments and histories have no
//! tunables. Errors name the offending file so a test suite sharing one config
//! across crates can tell which copy failed.

pub mod schema;

use std::fs;
use std::path::Path;

use metricsprobe_core::error::{MetricsError, Result};

pub use schema::{IdentitySection, ProbeConfig};

pub fn load_from_file(path: impl AsRef<Path>) -> Result<ProbeConfig> {
    let path = path.as_ref();
    let s = fs::read_to_string(path).map_err(|e| {
        MetricsError::Internal(format!("read probe config {} failed: {e}", path.display()))
    })?;
    load_from_str(&s).map_err(|e| match e {
        MetricsError::BadRequest(msg) => {
            MetricsError::BadRequest(format!("{}: {msg}", path.display()))
        }
        other => other,
    })
}

pub fn load_from_str(s: &str) -> Result<ProbeConfig> {
    let cfg: ProbeConfig = serde_yaml::from_str(s)
        .map_err(|e| MetricsError::BadRequest(format!("invalid probe config yaml: {e}")))?;
    cfg.validate()?;
    tracing::debug!(
        mode = ?cfg.identity.mode,
        separator = %cfg.identity.separator,
        "probe config loaded"
    );
    Ok(cfg)
}
