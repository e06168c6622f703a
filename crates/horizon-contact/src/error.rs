//! Error types for contact page setup.
//!
//! These cover programmer and configuration mistakes only. User input
//! problems are reported as [`Verdict`](crate::form::Verdict)s and
//! [`FileRejection`](crate::widget::FileRejection)s, never as errors.

use std::path::PathBuf;

/// Result type alias for contact page operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building the contact page components.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A validation pattern failed to compile.
    #[error("Invalid validation pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// The styled select does not have one option per native option.
    #[error("Select '{select}' has {proxy_options} styled options but {native_options} native options")]
    SelectMarkupMismatch {
        select: String,
        proxy_options: usize,
        native_options: usize,
    },

    /// A form needs at least one step.
    #[error("Form has no steps")]
    NoSteps,

    /// A field the page depends on is not part of any step.
    #[error("Unknown field '{0}'")]
    UnknownField(String),

    /// Configuration file I/O error.
    #[error("Failed to read configuration '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file parse error.
    #[error("Invalid configuration: {0}")]
    Config(#[from] toml::de::Error),
}

impl Error {
    /// Create a select markup mismatch error.
    pub fn select_mismatch(
        select: impl Into<String>,
        proxy_options: usize,
        native_options: usize,
    ) -> Self {
        Self::SelectMarkupMismatch {
            select: select.into(),
            proxy_options,
            native_options,
        }
    }

    /// Create an unknown field error.
    pub fn unknown_field(name: impl Into<String>) -> Self {
        Self::UnknownField(name.into())
    }

    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
