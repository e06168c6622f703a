//! Contact page bootstrapping and event routing.
//!
//! [`ContactPage`] builds every component from a [`PageConfig`] and the
//! page's element handles, then routes `(element id, event)` pairs from the
//! host to the component owning that element.
//!
//! # Example
//!
//! ```ignore
//! let mut page = ContactPage::new(PageConfig::default(), elements)?;
//!
//! page.dispatch("firstName", PageEvent::Blur);
//! page.dispatch("nextBtn", PageEvent::Click);
//!
//! let client = page.faq_client()?;
//! page.load_faq(&client).await;
//! ```

use std::sync::Arc;

use horizon_contact_core::logging::targets;
use horizon_contact_core::{Element, FileRef};
use horizon_contact_net::{FaqClient, HttpClient};

use crate::config::PageConfig;
use crate::error::{Error, Result};
use crate::form::{
    DobBounds, ElementFeedback, FeedbackRenderer, Field, FieldKind, FieldValidator, FormStep,
    StepNavigator, SubmissionController, SubmitOutcome,
};
use crate::widget::{
    CustomSelect, DropParts, FaqParts, FaqSection, FileDropController, Key, NavToggle,
    SelectGroup, SelectParts,
};

/// A DOM event delivered to the page.
///
/// A click on a select option is handled completely by the option; hosts
/// should not also deliver the bubbled click to the select's proxy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEvent {
    Click,
    Focus,
    Blur,
    Change,
    KeyUp(Key),
    MouseOver,
    DragOver,
    DragLeave,
    Drop(Vec<FileRef>),
    Submit,
}

/// Drop zone elements; the file input is the `briefDescription` field.
#[derive(Debug, Clone)]
pub struct UploadElements {
    pub drop_zone: Element,
    pub file_name_display: Element,
}

/// Mobile navigation elements.
#[derive(Debug, Clone)]
pub struct NavElements {
    pub toggle: Element,
    pub nav: Element,
}

/// Every element handle the page components need.
#[derive(Debug, Clone)]
pub struct PageElements {
    /// The `multiStepForm` element.
    pub form: Element,
    /// The `successMessage` element.
    pub success_message: Element,
    pub back_button: Element,
    pub next_button: Element,
    pub steps: Vec<FormStep>,
    pub upload: Option<UploadElements>,
    pub selects: Vec<SelectParts>,
    pub nav: Option<NavElements>,
    pub faq: Option<FaqParts>,
}

/// The contact page and all of its components.
pub struct ContactPage {
    config: PageConfig,
    form: Element,
    back_button: Element,
    next_button: Element,
    navigator: StepNavigator,
    submission: SubmissionController,
    upload: Option<FileDropController>,
    selects: SelectGroup,
    nav: Option<NavToggle>,
    faq: Option<FaqSection>,
}

impl ContactPage {
    /// Build the page with the default feedback renderer.
    pub fn new(config: PageConfig, elements: PageElements) -> Result<Self> {
        Self::with_renderer(config, elements, Arc::new(ElementFeedback))
    }

    /// Build the page with a custom feedback renderer.
    pub fn with_renderer(
        config: PageConfig,
        elements: PageElements,
        renderer: Arc<dyn FeedbackRenderer>,
    ) -> Result<Self> {
        let validator = Arc::new(FieldValidator::from_config(&config.upload)?);
        let navigator = StepNavigator::new(elements.steps, validator.clone(), renderer.clone())?;

        if let Some(dob) = find_kind(&navigator, FieldKind::DateOfBirth) {
            match DobBounds::today(config.form.dob_max_age_years) {
                Some(bounds) => bounds.apply(dob.input()),
                None => tracing::warn!(
                    target: targets::PAGE,
                    max_age = config.form.dob_max_age_years,
                    "date of birth bounds out of range"
                ),
            }
        }

        let upload = match elements.upload {
            Some(upload) => {
                let field = find_kind(&navigator, FieldKind::BriefDescription)
                    .ok_or_else(|| Error::unknown_field("briefDescription"))?;
                let controller = FileDropController::new(DropParts {
                    drop_zone: upload.drop_zone,
                    field: field.clone(),
                    file_name_display: upload.file_name_display,
                })
                .with_max_bytes(config.upload.max_drop_bytes)
                .with_renderer(renderer.clone());
                Some(controller)
            }
            None => None,
        };

        let selects = elements
            .selects
            .into_iter()
            .map(CustomSelect::new)
            .collect::<Result<Vec<_>>>()?;

        let faq = elements
            .faq
            .map(|parts| FaqSection::new(parts).with_max_entries(config.faq.max_entries));

        let submission = SubmissionController::new(
            elements.form.clone(),
            elements.success_message,
            validator,
            renderer,
        );

        tracing::debug!(
            target: targets::PAGE,
            steps = navigator.step_count(),
            selects = selects.len(),
            upload = upload.is_some(),
            faq = faq.is_some(),
            "contact page ready"
        );

        Ok(Self {
            config,
            form: elements.form,
            back_button: elements.back_button,
            next_button: elements.next_button,
            navigator,
            submission,
            upload,
            selects: SelectGroup::new(selects),
            nav: elements.nav.map(|nav| NavToggle::new(nav.toggle, nav.nav)),
            faq,
        })
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    pub fn navigator(&self) -> &StepNavigator {
        &self.navigator
    }

    pub fn navigator_mut(&mut self) -> &mut StepNavigator {
        &mut self.navigator
    }

    pub fn submission(&self) -> &SubmissionController {
        &self.submission
    }

    pub fn upload(&self) -> Option<&FileDropController> {
        self.upload.as_ref()
    }

    pub fn selects(&self) -> &SelectGroup {
        &self.selects
    }

    pub fn nav(&self) -> Option<&NavToggle> {
        self.nav.as_ref()
    }

    pub fn faq(&self) -> Option<&FaqSection> {
        self.faq.as_ref()
    }

    pub fn faq_mut(&mut self) -> Option<&mut FaqSection> {
        self.faq.as_mut()
    }

    /// Create a FAQ client for the configured endpoint and timeout.
    pub fn faq_client(&self) -> horizon_contact_net::Result<FaqClient> {
        let client = HttpClient::builder().timeout(self.config.faq.timeout()).build()?;
        Ok(FaqClient::new(client, self.config.faq.endpoint.clone()))
    }

    /// Load the FAQ section, if the page has one.
    pub async fn load_faq(&mut self, client: &FaqClient) {
        if let Some(faq) = self.faq.as_mut() {
            faq.load(client).await;
        }
    }

    /// Route an event to the component owning the target element.
    ///
    /// Returns whether any component handled it.
    pub fn dispatch(&mut self, target: &str, event: PageEvent) -> bool {
        let handled = self.route(target, &event);
        if !handled {
            tracing::trace!(target: targets::PAGE, element = target, ?event, "event ignored");
        }
        handled
    }

    fn route(&mut self, target: &str, event: &PageEvent) -> bool {
        if target == self.next_button.id() && *event == PageEvent::Click {
            self.navigator.next();
            return true;
        }
        if target == self.back_button.id() && *event == PageEvent::Click {
            self.navigator.back();
            return true;
        }
        if target == self.form.id() && *event == PageEvent::Submit {
            if let SubmitOutcome::Invalid(report) = self.submission.submit(self.navigator.steps()) {
                tracing::debug!(target: targets::PAGE, invalid = report.errors().len(), "submit refused");
            }
            return true;
        }
        if self.route_upload(target, event) {
            return true;
        }
        if self.route_field(target, event) {
            return true;
        }
        if self.route_select(target, event) {
            return true;
        }
        if let Some(nav) = &self.nav
            && target == nav.toggle_button().id()
            && *event == PageEvent::Click
        {
            nav.click();
            return true;
        }
        if let Some(faq) = &self.faq
            && *event == PageEvent::Click
            && let Some(index) = faq.accordion().index_of_trigger(target)
        {
            return faq.toggle(index);
        }
        false
    }

    fn route_upload(&mut self, target: &str, event: &PageEvent) -> bool {
        let Some(upload) = self.upload.as_mut() else {
            return false;
        };
        if target != upload.drop_zone().id() {
            return false;
        }
        match event {
            PageEvent::DragOver => upload.drag_over(),
            PageEvent::DragLeave => upload.drag_leave(),
            PageEvent::Drop(files) => {
                upload.drop(files);
            }
            _ => return false,
        }
        true
    }

    fn route_field(&mut self, target: &str, event: &PageEvent) -> bool {
        if !matches!(event, PageEvent::Blur | PageEvent::Change) {
            return false;
        }
        let Some(field) = self.navigator.field_by_input_id(target).cloned() else {
            return false;
        };
        self.navigator.validate_field(&field);

        // Chooser checks run after validation so a rejection replaces its message.
        if *event == PageEvent::Change
            && let Some(upload) = self.upload.as_mut()
            && upload.input().ptr_eq(field.input())
        {
            upload.input_changed();
        }
        true
    }

    fn route_select(&mut self, target: &str, event: &PageEvent) -> bool {
        if let Some(index) = self.selects.find_by_proxy(target) {
            match event {
                PageEvent::Click => {
                    if let Some(select) = self.selects.get(index) {
                        select.toggle_list();
                    }
                }
                PageEvent::Focus => self.selects.focus(index),
                PageEvent::Blur => self.selects.blur(index),
                PageEvent::KeyUp(key) => {
                    return self
                        .selects
                        .get_mut(index)
                        .is_some_and(|select| select.key_up(*key));
                }
                _ => return false,
            }
            return true;
        }

        if let Some((index, option)) = self.selects.find_by_option(target) {
            let Some(select) = self.selects.get_mut(index) else {
                return false;
            };
            match event {
                PageEvent::MouseOver => select.highlight_option(option),
                PageEvent::Click => {
                    select.click_option(option);
                }
                _ => return false,
            }
            return true;
        }
        false
    }
}

fn find_kind(navigator: &StepNavigator, kind: FieldKind) -> Option<&Field> {
    navigator.fields().find(|field| field.kind() == kind)
}

impl std::fmt::Debug for ContactPage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContactPage")
            .field("navigator", &self.navigator)
            .field("submission", &self.submission)
            .field("upload", &self.upload)
            .field("selects", &self.selects)
            .field("faq", &self.faq)
            .finish()
    }
}
