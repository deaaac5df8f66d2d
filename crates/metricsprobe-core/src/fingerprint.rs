//! Identity canonicalization.
//!
//! A fingerprint is the cache key deciding whether two creation requests name
//! the same logical instrument. The default rule joins the label with each
//! dimension *value* in caller order; dimension keys are ignored, so
//! `[("a", "v1")]` and `[("b", "v1")]` collapse to one instrument.
//! `IdentityMode::KeysAndValues` is the explicit opt-in that keeps keys.
//!
//! Components are escaped before joining: `\` becomes `\\`, the separator
//! becomes `\` + separator, and in `KeysAndValues` mode `=` becomes `\=`.
//! Inputs differing in the label or in any positional component therefore
//! never share a fingerprint. Components free of those characters join
//! unchanged, e.g. `requests./x`.

use std::fmt;

use serde::Deserialize;

use crate::error::{MetricsError, Result};

/// Default separator between the label and each dimension component.
pub const DEFAULT_SEPARATOR: char = '.';

const ESCAPE: char = '\\';
const KEY_VALUE: char = '=';

/// Which parts of a dimension contribute to identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentityMode {
    /// Positional values only (keys ignored).
    #[default]
    ValuesOnly,
    /// `key=value` per dimension.
    KeysAndValues,
}

/// Canonical identity string of a `(label, dimensions)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Fingerprint(String);

impl Fingerprint {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Deterministic `(label, dimensions) -> Fingerprint` function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fingerprinter {
    mode: IdentityMode,
    separator: char,
}

impl Default for Fingerprinter {
    fn default() -> Self {
        Self {
            mode: IdentityMode::ValuesOnly,
            separator: DEFAULT_SEPARATOR,
        }
    }
}

impl Fingerprinter {
    /// The separator must not be `\` or `=`, which the escaping reserves.
    pub fn new(mode: IdentityMode, separator: char) -> Result<Self> {
        if separator == ESCAPE || separator == KEY_VALUE {
            return Err(MetricsError::BadRequest(format!(
                "identity separator {separator:?} is reserved"
            )));
        }
        Ok(Self { mode, separator })
    }

    pub fn mode(&self) -> IdentityMode {
        self.mode
    }

    pub fn separator(&self) -> char {
        self.separator
    }

    /// Compute the fingerprint. Pure: equal inputs always give equal output.
    pub fn fingerprint<K, V>(&self, label: &str, dimensions: &[(K, V)]) -> Fingerprint
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut out = String::with_capacity(label.len() + dimensions.len() * 16);
        self.push_escaped(&mut out, label);
        for (k, v) in dimensions {
            out.push(self.separator);
            if self.mode == IdentityMode::KeysAndValues {
                self.push_escaped(&mut out, k.as_ref());
                out.push(KEY_VALUE);
            }
            self.push_escaped(&mut out, v.as_ref());
        }
        Fingerprint(out)
    }

    fn push_escaped(&self, out: &mut String, component: &str) {
        for c in component.chars() {
            let reserved = c == ESCAPE
                || c == self.separator
                || (c == KEY_VALUE && self.mode == IdentityMode::KeysAndValues);
            if reserved {
                out.push(ESCAPE);
            }
            out.push(c);
        }
    }
}

/// Fingerprint with the default (values-only, `'.'`) rule.
pub fn fingerprint<K, V>(label: &str, dimensions: &[(K, V)]) -> Fingerprint
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    Fingerprinter::default().fingerprint(label, dimensions)
}
