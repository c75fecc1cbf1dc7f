//! Module identity.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::time::SystemTime;

/// Identifies one binary module for caching and freshness checks.
///
/// `location` and `last_write` are absent for the built-in module and for
/// source-derived spaces; such modules are always considered fresh.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModuleIdentity {
    pub name: String,
    pub version: Option<String>,
    pub location: Option<PathBuf>,
    /// Last write time observed when the module was imported.
    pub last_write: Option<SystemTime>,
}

impl ModuleIdentity {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), version: None, location: None, last_write: None }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn with_location(mut self, location: impl Into<PathBuf>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Parses the comma-separated display form produced by [`fmt::Display`]
    /// (`Name, Version=1.2.3`). Everything after the first comma is
    /// attribute text; only `Version` is interpreted, unknown attributes are
    /// ignored.
    pub fn parse(display: &str) -> Self {
        let mut parts = display.split(',');
        let name = parts.next().unwrap_or("").trim().to_string();
        let mut identity = Self::new(name);
        for part in parts {
            if let Some(version) = part.trim().strip_prefix("Version=") {
                identity.version = Some(version.to_string());
            }
        }
        identity
    }
}

impl fmt::Display for ModuleIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        if let Some(version) = &self.version {
            write!(f, ", Version={version}")?;
        }
        Ok(())
    }
}
