//! Page configuration.
//!
//! [`PageConfig`] holds the limits and endpoints the contact page components
//! use. Every field has a default, so a configuration file only needs the
//! values it overrides:
//!
//! ```toml
//! [upload]
//! max_drop_bytes = 536870912
//!
//! [faq]
//! max_entries = 3
//! ```

use std::path::Path;
use std::time::Duration;

use horizon_contact_core::logging::targets;
use horizon_contact_net::DEFAULT_FAQ_ENDPOINT;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

const MIB: u64 = 1024 * 1024;
const GIB: u64 = 1024 * MIB;

/// Largest file accepted by drag-and-drop or manual selection.
pub const DEFAULT_MAX_DROP_BYTES: u64 = GIB;
/// Largest file accepted by the brief description field validator.
pub const DEFAULT_MAX_DESCRIPTION_BYTES: u64 = 10 * GIB;
/// Oldest accepted date of birth, in years before today.
pub const DEFAULT_DOB_MAX_AGE_YEARS: u32 = 120;
/// Number of FAQ entries rendered.
pub const DEFAULT_FAQ_MAX_ENTRIES: usize = 5;
/// FAQ request timeout in seconds.
pub const DEFAULT_FAQ_TIMEOUT_SECS: u64 = 30;

/// Configuration for the whole contact page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// File upload limits.
    pub upload: UploadConfig,
    /// Form field settings.
    pub form: FormConfig,
    /// FAQ section settings.
    pub faq: FaqConfig,
}

/// File upload limits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadConfig {
    /// Size limit for dropped or manually selected files.
    pub max_drop_bytes: u64,
    /// Size limit enforced by the brief description validator.
    pub max_description_bytes: u64,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_drop_bytes: DEFAULT_MAX_DROP_BYTES,
            max_description_bytes: DEFAULT_MAX_DESCRIPTION_BYTES,
        }
    }
}

/// Form field settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    pub dob_max_age_years: u32,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            dob_max_age_years: DEFAULT_DOB_MAX_AGE_YEARS,
        }
    }
}

/// FAQ section settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FaqConfig {
    /// Posts endpoint.
    pub endpoint: String,
    /// Maximum number of rendered entries.
    pub max_entries: usize,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for FaqConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_FAQ_ENDPOINT.to_string(),
            max_entries: DEFAULT_FAQ_MAX_ENTRIES,
            timeout_secs: DEFAULT_FAQ_TIMEOUT_SECS,
        }
    }
}

impl FaqConfig {
    /// Request timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl PageConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load a configuration from a TOML file.
    pub fn load_toml(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(target: targets::CONFIG, path = %path.display(), "loaded page configuration");
        Ok(config)
    }
}

/// Human-readable size used in user-facing messages, e.g. `1GB` or `10 GB`.
pub(crate) fn size_label(bytes: u64, separator: &str) -> String {
    if bytes >= GIB && bytes % GIB == 0 {
        format!("{}{separator}GB", bytes / GIB)
    } else if bytes >= MIB && bytes % MIB == 0 {
        format!("{}{separator}MB", bytes / MIB)
    } else {
        format!("{bytes}{separator}bytes")
    }
}
