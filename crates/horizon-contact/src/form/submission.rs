//! Final form submission.

use std::sync::Arc;

use horizon_contact_core::logging::targets;
use horizon_contact_core::{Display, Element, Signal};

use super::feedback::{FeedbackRenderer, validate_all};
use super::step_navigator::FormStep;
use super::validator::FieldValidator;
use super::verdict::ValidationReport;

/// What a call to [`SubmissionController::submit`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Every field passed; the success view is now shown.
    Submitted,
    /// At least one field failed; nothing was toggled.
    Invalid(ValidationReport),
    /// The form was already submitted.
    AlreadySubmitted,
}

/// Validates the whole form and swaps it for a success view.
pub struct SubmissionController {
    form_view: Element,
    success_view: Element,
    validator: Arc<FieldValidator>,
    renderer: Arc<dyn FeedbackRenderer>,
    done: bool,

    /// Signal emitted once, when the form is submitted.
    pub submitted: Signal<()>,
}

impl SubmissionController {
    pub fn new(
        form_view: Element,
        success_view: Element,
        validator: Arc<FieldValidator>,
        renderer: Arc<dyn FeedbackRenderer>,
    ) -> Self {
        Self {
            form_view,
            success_view,
            validator,
            renderer,
            done: false,
            submitted: Signal::new(),
        }
    }

    pub fn is_submitted(&self) -> bool {
        self.done
    }

    /// Validate every field of every step and, if all pass, hide the form
    /// and show the success view.
    pub fn submit(&mut self, steps: &[FormStep]) -> SubmitOutcome {
        if self.done {
            return SubmitOutcome::AlreadySubmitted;
        }

        let report = validate_all(
            &self.validator,
            self.renderer.as_ref(),
            steps.iter().flat_map(|step| step.fields()),
        );
        if !report.is_valid() {
            tracing::debug!(
                target: targets::FORM,
                invalid = report.errors().len(),
                "submission refused"
            );
            return SubmitOutcome::Invalid(report);
        }

        self.form_view.set_display(Display::None);
        self.success_view.set_display(Display::Block);
        self.done = true;
        tracing::info!(target: targets::FORM, "form submitted");
        self.submitted.emit(());
        SubmitOutcome::Submitted
    }
}

impl std::fmt::Debug for SubmissionController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubmissionController")
            .field("form_view", &self.form_view)
            .field("success_view", &self.success_view)
            .field("done", &self.done)
            .finish()
    }
}
