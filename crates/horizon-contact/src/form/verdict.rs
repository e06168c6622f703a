//! Validation outcomes.
//!
//! A [`Verdict`] is the outcome for a single field. A [`ValidationReport`]
//! collects the failures of a whole step or form so listeners can show a
//! summary or move focus to the first bad field.

use std::fmt;

/// The outcome of validating one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    ok: bool,
    message: String,
}

impl Verdict {
    /// A passing verdict with an empty message.
    pub fn valid() -> Self {
        Self {
            ok: true,
            message: String::new(),
        }
    }

    /// A failing verdict with a user-facing message.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.ok
    }

    /// The user-facing message; empty when valid.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Default for Verdict {
    fn default() -> Self {
        Self::valid()
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ok {
            write!(f, "valid")
        } else {
            write!(f, "invalid: {}", self.message)
        }
    }
}

/// A failing field within a report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Name of the failing field.
    pub field: String,
    /// The message shown for it.
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// The failures found while validating several fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    errors: Vec<FieldError>,
}

impl ValidationReport {
    /// An empty, passing report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a field's verdict; passing verdicts add nothing.
    pub fn record(&mut self, field: &str, verdict: &Verdict) {
        if !verdict.is_valid() {
            self.errors.push(FieldError::new(field, verdict.message()));
        }
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// The first failing field, in form order.
    pub fn first_error(&self) -> Option<&FieldError> {
        self.errors.first()
    }

    /// Merge another report into this one.
    pub fn merge(&mut self, other: ValidationReport) {
        self.errors.extend(other.errors);
    }
}
