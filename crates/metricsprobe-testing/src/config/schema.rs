use serde::Deserialize;

use metricsprobe_core::error::{MetricsError, Result};
use metricsprobe_core::{Fingerprinter, IdentityMode, DEFAULT_SEPARATOR};

/// Root of the probe config file. `ProbeConfig::default()` carries the same
/// identity rules `TestMetrics::new()` uses.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProbeConfig {
    pub version: u32,

    #[serde(default)]
    pub identity: IdentitySection,
}

impl ProbeConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(MetricsError::UnsupportedVersion);
        }
        self.identity.fingerprinter()?;
        Ok(())
    }
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            version: 1,
            identity: IdentitySection::default(),
        }
    }
}

/// How `(label, dimensions)` collapses into an instrument identity.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IdentitySection {
    #[serde(default)]
    pub mode: IdentityMode,

    /// Single character; `\` and `=` are reserved for escaping.
    #[serde(default = "default_separator")]
    pub separator: char,
}

impl Default for IdentitySection {
    fn default() -> Self {
        Self {
            mode: IdentityMode::default(),
            separator: default_separator(),
        }
    }
}

impl IdentitySection {
    pub fn fingerprinter(&self) -> Result<Fingerprinter> {
        Fingerprinter::new(self.mode, self.separator).map_err(|e| match e {
            MetricsError::BadRequest(msg) => {
                MetricsError::BadRequest(format!("identity.separator: {msg}"))
            }
            other => other,
        })
    }
}

fn default_separator() -> char {
    DEFAULT_SEPARATOR
}
