//! Field validation rules.
//!
//! [`FieldValidator`] maps a field's current value to a [`Verdict`]. It never
//! touches elements; rendering the verdict is the job of a
//! [`FeedbackRenderer`](super::FeedbackRenderer).
//!
//! # Example
//!
//! ```ignore
//! use horizon_contact::form::{FieldKind, FieldValidator, FieldValue};
//!
//! let validator = FieldValidator::new()?;
//! let verdict = validator.check(FieldKind::FirstName, &FieldValue::text("Ada"));
//! assert!(verdict.is_valid());
//! ```

use std::collections::HashMap;

use horizon_contact_core::logging::targets;
use regex::Regex;

use super::field::{Field, FieldKind, FieldValue, SocialPlatform};
use super::verdict::Verdict;
use crate::config::{DEFAULT_MAX_DESCRIPTION_BYTES, UploadConfig, size_label};
use crate::error::Result;

const NAME_PATTERN: &str = "^[A-Za-z]+$";

// Local part as in the HTML email input; the domain needs at least one dot.
const EMAIL_PATTERN: &str = concat!(
    r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@",
    r"[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?",
    r"(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)+$",
);

/// Checks field values against the contact form rules.
#[derive(Debug, Clone)]
pub struct FieldValidator {
    name: Regex,
    email: Regex,
    social: HashMap<SocialPlatform, Regex>,
    max_description_bytes: u64,
}

impl FieldValidator {
    /// Create a validator with the default upload limit.
    pub fn new() -> Result<Self> {
        Self::with_max_description_bytes(DEFAULT_MAX_DESCRIPTION_BYTES)
    }

    /// Create a validator using the limits from an upload configuration.
    pub fn from_config(config: &UploadConfig) -> Result<Self> {
        Self::with_max_description_bytes(config.max_description_bytes)
    }

    fn with_max_description_bytes(max_description_bytes: u64) -> Result<Self> {
        let mut social = HashMap::new();
        for platform in SocialPlatform::ALL {
            let pattern = format!(
                r"^(https?://)?(www\.)?{}/.*$",
                regex::escape(platform.domain())
            );
            social.insert(platform, Regex::new(&pattern)?);
        }

        Ok(Self {
            name: Regex::new(NAME_PATTERN)?,
            email: Regex::new(EMAIL_PATTERN)?,
            social,
            max_description_bytes,
        })
    }

    /// Validate a field's current value.
    pub fn validate(&self, field: &Field) -> Verdict {
        let value = field.value();
        let verdict = match field.kind() {
            FieldKind::Generic => self.check_generic(field, &value),
            kind => self.check(kind, &value),
        };
        tracing::trace!(
            target: targets::FORM,
            field = field.name(),
            valid = verdict.is_valid(),
            "validated field"
        );
        verdict
    }

    /// Validate a value against the rules of a named field kind.
    ///
    /// [`FieldKind::Generic`] values are treated as required text.
    pub fn check(&self, kind: FieldKind, value: &FieldValue) -> Verdict {
        match kind {
            FieldKind::FirstName => self.check_name(value, "Please enter your first name."),
            FieldKind::LastName => self.check_name(value, "Please enter your last name."),
            FieldKind::Email => self.check_email(value),
            FieldKind::DateOfBirth => {
                if value.is_blank() {
                    Verdict::invalid("Please enter your date of birth.")
                } else {
                    Verdict::valid()
                }
            }
            FieldKind::BriefDescription => self.check_description(value),
            FieldKind::Social(platform) => self.check_social(platform, value),
            FieldKind::Generic => {
                if value.text.is_empty() {
                    Verdict::invalid(REQUIRED_MESSAGE)
                } else {
                    Verdict::valid()
                }
            }
        }
    }

    fn check_name(&self, value: &FieldValue, required: &str) -> Verdict {
        if value.is_blank() {
            Verdict::invalid(required)
        } else if !self.name.is_match(&value.text) {
            Verdict::invalid("Please use alphabet characters only.")
        } else {
            Verdict::valid()
        }
    }

    fn check_email(&self, value: &FieldValue) -> Verdict {
        if value.is_blank() {
            Verdict::invalid("Please enter your email address.")
        } else if !self.email.is_match(value.text.trim()) {
            Verdict::invalid("Please enter a valid email address.")
        } else {
            Verdict::valid()
        }
    }

    fn check_description(&self, value: &FieldValue) -> Verdict {
        match value.files.first() {
            None => Verdict::invalid("Please upload a brief description."),
            Some(file) if file.size > self.max_description_bytes => Verdict::invalid(format!(
                "Please select a file that is {} or smaller.",
                size_label(self.max_description_bytes, " ")
            )),
            Some(_) => Verdict::valid(),
        }
    }

    fn check_social(&self, platform: SocialPlatform, value: &FieldValue) -> Verdict {
        let name = platform.name();
        if value.is_blank() {
            return Verdict::invalid(format!("Please enter your {name} profile link."));
        }
        let matches = self
            .social
            .get(&platform)
            .is_some_and(|pattern| pattern.is_match(&value.text));
        if matches {
            Verdict::valid()
        } else {
            Verdict::invalid(format!("Please enter a valid {name} profile link."))
        }
    }

    fn check_generic(&self, field: &Field, value: &FieldValue) -> Verdict {
        if field.is_required() && field.is_missing(value) {
            Verdict::invalid(REQUIRED_MESSAGE)
        } else {
            Verdict::valid()
        }
    }
}

const REQUIRED_MESSAGE: &str = "Please fill out this field.";
