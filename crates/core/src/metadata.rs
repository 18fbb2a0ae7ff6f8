//! Package identity constants and the names they are exported under.
//!
//! `EXPORTS` is the single table of exported metadata; `PUBLIC_NAMES` and
//! [`resolve_public_name`] are both derived from it, so every listed name
//! resolves and every exported constant is listed.

use std::fmt;

use crate::error::{MetadataError, MetadataResult};

/// Human-readable application identifier.
pub const APP_NAME: &str = "poo_python_learning";

/// Package version as encoded at compile time (e.g. `0.1.0`).
///
/// Informally `MAJOR.MINOR.PATCH`; no schema is enforced.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Exported `(name, value)` pairs, in export order.
pub const EXPORTS: [(&str, &str); 2] = [("APP_NAME", APP_NAME), ("VERSION", VERSION)];

/// Names of the exported metadata constants, in export order.
pub const PUBLIC_NAMES: [&str; 2] = [EXPORTS[0].0, EXPORTS[1].0];

/// Returns the application name.
pub fn application_name() -> &'static str {
    APP_NAME
}

/// Returns the library version.
///
/// Useful for tests and for frontends to report consistent version info.
pub fn version() -> &'static str {
    VERSION
}

/// Returns the exported metadata names in order.
pub fn public_names() -> &'static [&'static str] {
    &PUBLIC_NAMES
}

/// Look up an exported constant by the name it is exported under.
pub fn resolve_public_name(name: &str) -> MetadataResult<&'static str> {
    EXPORTS
        .iter()
        .find(|(exported, _)| *exported == name)
        .map(|(_, value)| *value)
        .ok_or_else(|| MetadataError::unavailable(name, &PUBLIC_NAMES))
}

/// Snapshot of the package identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct Metadata {
    /// Application name (see [`APP_NAME`]).
    pub name: &'static str,
    /// Version string (see [`VERSION`]).
    pub version: &'static str,
}

impl Metadata {
    /// The identity of this build.
    pub const fn current() -> Self {
        Self { name: APP_NAME, version: VERSION }
    }

    /// Display form used in banners and log lines, e.g. `poo_python_learning v0.1.0`.
    pub fn banner(&self) -> String {
        self.to_string()
    }
}

impl Default for Metadata {
    fn default() -> Self {
        Self::current()
    }
}

impl fmt::Display for Metadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} v{}", self.name, self.version)
    }
}
