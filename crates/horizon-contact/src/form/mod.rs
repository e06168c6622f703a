//! The multi-step contact form.
//!
//! - [`FieldValidator`]: per-field rules producing a [`Verdict`]
//! - [`FeedbackRenderer`]: writes verdicts into field elements
//! - [`StepNavigator`]: moves between [`FormStep`]s
//! - [`SubmissionController`]: validates everything and shows the success view
//! - [`DobBounds`]: date of birth `min`/`max` attributes

mod dob;
mod feedback;
mod field;
mod step_navigator;
mod submission;
mod validator;
mod verdict;

pub use dob::DobBounds;
pub use feedback::{ERROR_CLASS, ElementFeedback, FeedbackRenderer, validate_all, validate_and_render};
pub use field::{Control, Field, FieldKind, FieldValue, SocialPlatform};
pub use step_navigator::{ACTIVE_CLASS, FormStep, StepNavigator};
pub use submission::{SubmissionController, SubmitOutcome};
pub use validator::FieldValidator;
pub use verdict::{FieldError, ValidationReport, Verdict};
