//! Form fields.

use horizon_contact_core::{Element, FileRef};

/// Social networks with a profile link field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SocialPlatform {
    LinkedIn,
    Twitter,
    Facebook,
}

impl SocialPlatform {
    /// All platforms, in form order.
    pub const ALL: [SocialPlatform; 3] = [Self::LinkedIn, Self::Twitter, Self::Facebook];

    /// Field name, also used in user-facing messages.
    pub fn name(self) -> &'static str {
        match self {
            Self::LinkedIn => "linkedin",
            Self::Twitter => "twitter",
            Self::Facebook => "facebook",
        }
    }

    /// Domain a profile link must point at.
    pub fn domain(self) -> &'static str {
        match self {
            Self::LinkedIn => "linkedin.com",
            Self::Twitter => "twitter.com",
            Self::Facebook => "facebook.com",
        }
    }
}

/// The validation rule set a field follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    FirstName,
    LastName,
    Email,
    DateOfBirth,
    BriefDescription,
    Social(SocialPlatform),
    /// Any other field; only the required constraint applies.
    Generic,
}

impl FieldKind {
    /// Rule set for a field name.
    pub fn from_name(name: &str) -> Self {
        match name {
            "firstName" => Self::FirstName,
            "lastName" => Self::LastName,
            "email" => Self::Email,
            "dob" => Self::DateOfBirth,
            "briefDescription" => Self::BriefDescription,
            _ => SocialPlatform::ALL
                .into_iter()
                .find(|platform| platform.name() == name)
                .map_or(Self::Generic, Self::Social),
        }
    }
}

/// The kind of input control backing a field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Control {
    #[default]
    Text,
    File,
    Checkbox,
    Select,
}

/// Snapshot of a field's current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldValue {
    pub text: String,
    pub files: Vec<FileRef>,
    pub checked: bool,
    pub selected: Option<usize>,
}

impl FieldValue {
    /// A text value.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// A file list value.
    pub fn files(files: Vec<FileRef>) -> Self {
        Self {
            files,
            ..Self::default()
        }
    }

    /// Whether the text is empty after trimming.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// A named form field and the elements its feedback is rendered into.
///
/// Fields are cheap to clone; clones share the underlying elements.
#[derive(Debug, Clone)]
pub struct Field {
    name: String,
    kind: FieldKind,
    control: Control,
    required: bool,
    input: Element,
    group: Element,
    error_slot: Element,
}

impl Field {
    /// Create a required field whose rule set and control follow from its name.
    pub fn new(name: impl Into<String>, input: Element, group: Element, error_slot: Element) -> Self {
        let name = name.into();
        let kind = FieldKind::from_name(&name);
        let control = if kind == FieldKind::BriefDescription {
            Control::File
        } else {
            Control::Text
        };
        Self {
            name,
            kind,
            control,
            required: true,
            input,
            group,
            error_slot,
        }
    }

    /// Set the input control.
    pub fn with_control(mut self, control: Control) -> Self {
        self.control = control;
        self
    }

    /// Set whether the field must have a value.
    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    pub fn control(&self) -> Control {
        self.control
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn input(&self) -> &Element {
        &self.input
    }

    pub fn group(&self) -> &Element {
        &self.group
    }

    pub fn error_slot(&self) -> &Element {
        &self.error_slot
    }

    /// Read the current value from the input element.
    pub fn value(&self) -> FieldValue {
        FieldValue {
            text: self.input.value(),
            files: self.input.files(),
            checked: self.input.is_checked(),
            selected: self.input.selected_index(),
        }
    }

    /// Whether the field currently has no value for its control.
    pub fn is_missing(&self, value: &FieldValue) -> bool {
        match self.control {
            Control::Text => value.text.is_empty(),
            Control::File => value.files.is_empty(),
            Control::Checkbox => !value.checked,
            Control::Select => value.selected.is_none(),
        }
    }
}
