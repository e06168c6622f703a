//! Rendering validation feedback.

use super::field::Field;
use super::validator::FieldValidator;
use super::verdict::{ValidationReport, Verdict};

/// Class added to an invalid field and its group.
pub const ERROR_CLASS: &str = "error";

/// Applies a verdict to a field's elements.
pub trait FeedbackRenderer: Send + Sync {
    fn render(&self, field: &Field, verdict: &Verdict);
}

/// Marks invalid fields with the `error` class and writes the message into
/// the group's error slot.
#[derive(Debug, Clone, Copy, Default)]
pub struct ElementFeedback;

impl FeedbackRenderer for ElementFeedback {
    fn render(&self, field: &Field, verdict: &Verdict) {
        let invalid = !verdict.is_valid();
        field.input().set_class(ERROR_CLASS, invalid);
        field.group().set_class(ERROR_CLASS, invalid);
        field.error_slot().set_text(verdict.message());
    }
}

/// Validate one field and render the outcome.
pub fn validate_and_render(
    validator: &FieldValidator,
    renderer: &dyn FeedbackRenderer,
    field: &Field,
) -> Verdict {
    let verdict = validator.validate(field);
    renderer.render(field, &verdict);
    verdict
}

/// Validate and render every field, without stopping at the first failure.
pub fn validate_all<'a>(
    validator: &FieldValidator,
    renderer: &dyn FeedbackRenderer,
    fields: impl IntoIterator<Item = &'a Field>,
) -> ValidationReport {
    let mut report = ValidationReport::new();
    for field in fields {
        let verdict = validate_and_render(validator, renderer, field);
        report.record(field.name(), &verdict);
    }
    report
}
