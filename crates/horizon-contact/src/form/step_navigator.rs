//! Multi-step form navigation.
//!
//! The form is split into [`FormStep`]s; exactly one is active (carries the
//! `active` class) at a time. Moving forward requires every field of the
//! active step to pass validation. Moving back never does.
//!
//! # Signals
//!
//! - `current_step_changed(usize)`: the active step changed
//! - `validation_failed(ValidationReport)`: `next` was refused
//!
//! # Example
//!
//! ```ignore
//! let navigator = StepNavigator::new(steps, validator, Arc::new(ElementFeedback))?;
//!
//! navigator.current_step_changed.connect(|&step| {
//!     println!("now on step {step}");
//! });
//!
//! navigator.next();
//! ```

use std::sync::Arc;

use horizon_contact_core::logging::targets;
use horizon_contact_core::{Element, Signal};

use super::feedback::{FeedbackRenderer, validate_all, validate_and_render};
use super::field::Field;
use super::validator::FieldValidator;
use super::verdict::{ValidationReport, Verdict};
use crate::error::{Error, Result};

/// Class marking the visible step.
pub const ACTIVE_CLASS: &str = "active";

/// One step of a multi-step form.
#[derive(Debug, Clone)]
pub struct FormStep {
    container: Element,
    fields: Vec<Field>,
}

impl FormStep {
    pub fn new(container: Element, fields: Vec<Field>) -> Self {
        Self { container, fields }
    }

    pub fn container(&self) -> &Element {
        &self.container
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn is_active(&self) -> bool {
        self.container.has_class(ACTIVE_CLASS)
    }

    fn set_active(&self, active: bool) {
        self.container.set_class(ACTIVE_CLASS, active);
    }
}

/// Moves between the steps of a form.
pub struct StepNavigator {
    steps: Vec<FormStep>,
    current: usize,
    validator: Arc<FieldValidator>,
    renderer: Arc<dyn FeedbackRenderer>,

    /// Signal emitted with the new step index after a transition.
    pub current_step_changed: Signal<usize>,

    /// Signal emitted when `next` is refused because a field is invalid.
    pub validation_failed: Signal<ValidationReport>,
}

impl StepNavigator {
    /// Create a navigator over the given steps.
    ///
    /// The first step already marked active becomes current (the first step
    /// if none is), and all others are deactivated.
    pub fn new(
        steps: Vec<FormStep>,
        validator: Arc<FieldValidator>,
        renderer: Arc<dyn FeedbackRenderer>,
    ) -> Result<Self> {
        if steps.is_empty() {
            return Err(Error::NoSteps);
        }

        let current = steps.iter().position(FormStep::is_active).unwrap_or(0);
        for (index, step) in steps.iter().enumerate() {
            step.set_active(index == current);
        }

        Ok(Self {
            steps,
            current,
            validator,
            renderer,
            current_step_changed: Signal::new(),
            validation_failed: Signal::new(),
        })
    }

    /// Index of the active step.
    pub fn current_step(&self) -> usize {
        self.current
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    pub fn steps(&self) -> &[FormStep] {
        &self.steps
    }

    pub fn is_first_step(&self) -> bool {
        self.current == 0
    }

    pub fn is_last_step(&self) -> bool {
        self.current + 1 == self.steps.len()
    }

    /// All fields of all steps, in form order.
    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.steps.iter().flat_map(|step| step.fields.iter())
    }

    /// Find a field by name.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields().find(|field| field.name() == name)
    }

    /// Find the field whose input element has the given id.
    pub fn field_by_input_id(&self, id: &str) -> Option<&Field> {
        self.fields().find(|field| field.input().id() == id)
    }

    /// Validate and render a single field.
    pub fn validate_field(&self, field: &Field) -> Verdict {
        validate_and_render(&self.validator, self.renderer.as_ref(), field)
    }

    /// Validate and render every field of the active step.
    pub fn validate_current_step(&self) -> ValidationReport {
        validate_all(
            &self.validator,
            self.renderer.as_ref(),
            self.steps[self.current].fields(),
        )
    }

    /// Advance to the next step if the active step is valid.
    ///
    /// Returns whether the active step changed.
    pub fn next(&mut self) -> bool {
        let report = self.validate_current_step();
        if !report.is_valid() {
            tracing::debug!(
                target: targets::FORM,
                step = self.current,
                invalid = report.errors().len(),
                "step has invalid fields"
            );
            self.validation_failed.emit(report);
            return false;
        }

        if self.is_last_step() {
            return false;
        }
        self.go_to(self.current + 1);
        true
    }

    /// Return to the previous step. No-op on the first step.
    pub fn back(&mut self) -> bool {
        if self.is_first_step() {
            return false;
        }
        self.go_to(self.current - 1);
        true
    }

    fn go_to(&mut self, index: usize) {
        self.steps[self.current].set_active(false);
        self.steps[index].set_active(true);
        self.current = index;
        tracing::debug!(target: targets::FORM, step = index, "moved to step");
        self.current_step_changed.emit(index);
    }
}

impl std::fmt::Debug for StepNavigator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StepNavigator")
            .field("steps", &self.steps.len())
            .field("current", &self.current)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::ElementFeedback;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    fn field(name: &str) -> Field {
        Field::new(
            name,
            Element::new(name),
            Element::with_classes("", ["form-group"]),
            Element::with_classes("", ["error-message"]),
        )
    }

    fn setup() -> StepNavigator {
        let steps = vec![
            FormStep::new(
                Element::with_classes("step-1", ["form-step", "active"]),
                vec![field("firstName"), field("lastName")],
            ),
            FormStep::new(
                Element::with_classes("step-2", ["form-step"]),
                vec![field("email")],
            ),
            FormStep::new(
                Element::with_classes("step-3", ["form-step"]),
                vec![field("phone")],
            ),
        ];
        StepNavigator::new(
            steps,
            Arc::new(FieldValidator::new().unwrap()),
            Arc::new(ElementFeedback),
        )
        .unwrap()
    }

    fn fill(navigator: &StepNavigator, name: &str, value: &str) {
        navigator.field(name).unwrap().input().set_value(value);
    }

    fn active_steps(navigator: &StepNavigator) -> Vec<usize> {
        navigator
            .steps()
            .iter()
            .enumerate()
            .filter(|(_, step)| step.is_active())
            .map(|(i, _)| i)
            .collect()
    }

    #[test]
    fn test_no_steps_is_error() {
        let result = StepNavigator::new(
            Vec::new(),
            Arc::new(FieldValidator::new().unwrap()),
            Arc::new(ElementFeedback),
        );
        assert!(matches!(result, Err(Error::NoSteps)));
    }

    #[test]
    fn test_initial_active_step_from_markup() {
        let steps = vec![
            FormStep::new(Element::new("a"), Vec::new()),
            FormStep::new(Element::with_classes("b", ["active"]), Vec::new()),
        ];
        let navigator = StepNavigator::new(
            steps,
            Arc::new(FieldValidator::new().unwrap()),
            Arc::new(ElementFeedback),
        )
        .unwrap();
        assert_eq!(navigator.current_step(), 1);
        assert_eq!(active_steps(&navigator), vec![1]);
    }

    #[test]
    fn test_next_blocked_renders_every_field() {
        let mut navigator = setup();
        let failed = Arc::new(AtomicUsize::new(0));
        let failed_clone = failed.clone();
        navigator.validation_failed.connect(move |report| {
            failed_clone.store(report.errors().len(), Ordering::SeqCst);
        });

        assert!(!navigator.next());
        assert_eq!(navigator.current_step(), 0);
        assert_eq!(failed.load(Ordering::SeqCst), 2);

        let first = navigator.field("firstName").unwrap();
        let last = navigator.field("lastName").unwrap();
        assert_eq!(first.error_slot().text(), "Please enter your first name.");
        assert_eq!(last.error_slot().text(), "Please enter your last name.");
        assert!(navigator.field("email").unwrap().error_slot().text().is_empty());
    }

    #[test]
    fn test_next_advances_when_valid() {
        let mut navigator = setup();
        let changed = Arc::new(AtomicBool::new(false));
        let changed_clone = changed.clone();
        navigator.current_step_changed.connect(move |&step| {
            assert_eq!(step, 1);
            changed_clone.store(true, Ordering::SeqCst);
        });

        fill(&navigator, "firstName", "Ada");
        fill(&navigator, "lastName", "Lovelace");

        assert!(navigator.next());
        assert_eq!(navigator.current_step(), 1);
        assert_eq!(active_steps(&navigator), vec![1]);
        assert!(changed.load(Ordering::SeqCst));
    }

    #[test]
    fn test_next_on_last_step_stays() {
        let mut navigator = setup();
        fill(&navigator, "firstName", "Ada");
        fill(&navigator, "lastName", "Lovelace");
        fill(&navigator, "email", "ada@example.com");
        fill(&navigator, "phone", "555");

        assert!(navigator.next());
        assert!(navigator.next());
        assert!(navigator.is_last_step());
        assert!(!navigator.next());
        assert_eq!(active_steps(&navigator), vec![2]);
    }

    #[test]
    fn test_back_is_unconditional() {
        let mut navigator = setup();
        fill(&navigator, "firstName", "Ada");
        fill(&navigator, "lastName", "Lovelace");
        assert!(navigator.next());

        // Invalid fields on step 2 do not block going back.
        assert!(navigator.back());
        assert_eq!(navigator.current_step(), 0);
        assert!(!navigator.back());
        assert_eq!(active_steps(&navigator), vec![0]);
    }

    #[test]
    fn test_field_lookup() {
        let navigator = setup();
        assert!(navigator.field("email").is_some());
        assert!(navigator.field_by_input_id("phone").is_some());
        assert!(navigator.field("missing").is_none());
        assert_eq!(navigator.fields().count(), 4);
    }
}
