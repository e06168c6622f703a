//! Drag-and-drop and manual file selection for the brief description input.
//!
//! The drop zone highlights while a drag hovers over it. A drop installs the
//! first dropped file into the file input, replacing whatever was there, as
//! long as it is a PDF within the size limit. Files picked through the
//! native chooser are checked against the same constraints and the input is
//! cleared when they fail.
//!
//! Acceptance and rejection are rendered through the field's
//! [`FeedbackRenderer`], so the error classes always agree with the message
//! in the error slot.
//!
//! # Signals
//!
//! - `file_accepted(FileRef)`: a file was installed or accepted
//! - `file_rejected(FileRejection)`: a dropped or selected file was refused

use std::sync::Arc;

use horizon_contact_core::logging::targets;
use horizon_contact_core::{Element, FileRef, Signal};

use crate::config::{DEFAULT_MAX_DROP_BYTES, size_label};
use crate::form::{ElementFeedback, FeedbackRenderer, Field, Verdict};

/// The only accepted MIME type.
pub const PDF_MIME: &str = "application/pdf";
/// Class on the drop zone while a drag hovers over it.
pub const HOVER_CLASS: &str = "active";

/// Why a file was refused. The display text is the user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FileRejection {
    /// A dropped file was not a PDF or was too large.
    #[error("Please provide a PDF file up to {limit}.")]
    DropNotAccepted { limit: String },

    /// A selected file was not a PDF.
    #[error("Please provide a PDF file.")]
    NotPdf,

    /// A selected file was too large.
    #[error("The file must be less than {limit}.")]
    TooLarge { limit: String },
}

/// Drag state of the drop zone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DropZoneState {
    #[default]
    Idle,
    Hovering,
}

/// Result of a drop or a manual selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// No file was involved.
    Empty,
    Accepted(FileRef),
    Rejected(FileRejection),
}

/// The elements a [`FileDropController`] works on.
#[derive(Debug, Clone)]
pub struct DropParts {
    pub drop_zone: Element,
    /// The file field; its input receives dropped files.
    pub field: Field,
    pub file_name_display: Element,
}

/// Handles drops and selections for one file input.
pub struct FileDropController {
    drop_zone: Element,
    field: Field,
    file_name_display: Element,
    renderer: Arc<dyn FeedbackRenderer>,
    max_bytes: u64,
    state: DropZoneState,

    /// Signal emitted when a file is accepted.
    pub file_accepted: Signal<FileRef>,

    /// Signal emitted when a file is rejected.
    pub file_rejected: Signal<FileRejection>,
}

impl FileDropController {
    /// Create a controller with the default 1 GiB limit.
    pub fn new(parts: DropParts) -> Self {
        Self {
            drop_zone: parts.drop_zone,
            field: parts.field,
            file_name_display: parts.file_name_display,
            renderer: Arc::new(ElementFeedback),
            max_bytes: DEFAULT_MAX_DROP_BYTES,
            state: DropZoneState::Idle,
            file_accepted: Signal::new(),
            file_rejected: Signal::new(),
        }
    }

    /// Set the size limit.
    pub fn with_max_bytes(mut self, max_bytes: u64) -> Self {
        self.max_bytes = max_bytes;
        self
    }

    /// Set the renderer used for acceptance and rejection feedback.
    pub fn with_renderer(mut self, renderer: Arc<dyn FeedbackRenderer>) -> Self {
        self.renderer = renderer;
        self
    }

    pub fn max_bytes(&self) -> u64 {
        self.max_bytes
    }

    pub fn state(&self) -> DropZoneState {
        self.state
    }

    pub fn is_hovering(&self) -> bool {
        self.state == DropZoneState::Hovering
    }

    pub fn drop_zone(&self) -> &Element {
        &self.drop_zone
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn input(&self) -> &Element {
        self.field.input()
    }

    pub fn drag_over(&mut self) {
        self.state = DropZoneState::Hovering;
        self.drop_zone.add_class(HOVER_CLASS);
    }

    pub fn drag_leave(&mut self) {
        self.reset();
    }

    /// Handle files dropped on the zone. Only the first file is considered.
    pub fn drop(&mut self, files: &[FileRef]) -> FileOutcome {
        self.reset();

        let Some(file) = files.first() else {
            return FileOutcome::Empty;
        };

        if file.mime == PDF_MIME && file.size <= self.max_bytes {
            self.input().set_files(vec![file.clone()]);
            self.accept(file.clone())
        } else {
            let rejection = FileRejection::DropNotAccepted {
                limit: size_label(self.max_bytes, ""),
            };
            self.reject(file, rejection)
        }
    }

    /// Handle a change of the input's files through the native chooser.
    ///
    /// An empty selection only clears the filename display; the field's
    /// own validation decides what the error slot shows.
    pub fn input_changed(&mut self) -> FileOutcome {
        let Some(file) = self.input().first_file() else {
            self.file_name_display.set_text("");
            return FileOutcome::Empty;
        };

        let rejection = if file.mime != PDF_MIME {
            Some(FileRejection::NotPdf)
        } else if file.size > self.max_bytes {
            Some(FileRejection::TooLarge {
                limit: size_label(self.max_bytes, ""),
            })
        } else {
            None
        };

        match rejection {
            Some(rejection) => {
                self.input().clear_files();
                self.file_name_display.set_text("");
                self.reject(&file, rejection)
            }
            None => self.accept(file),
        }
    }

    fn accept(&self, file: FileRef) -> FileOutcome {
        self.renderer.render(&self.field, &Verdict::valid());
        self.file_name_display.set_text(format!("File: {}", file.name));
        tracing::debug!(target: targets::UPLOAD, name = %file.name, size = file.size, "file accepted");
        self.file_accepted.emit(file.clone());
        FileOutcome::Accepted(file)
    }

    fn reject(&self, file: &FileRef, rejection: FileRejection) -> FileOutcome {
        self.renderer
            .render(&self.field, &Verdict::invalid(rejection.to_string()));
        tracing::debug!(
            target: targets::UPLOAD,
            name = %file.name,
            mime = %file.mime,
            size = file.size,
            %rejection,
            "file rejected"
        );
        self.file_rejected.emit(rejection.clone());
        FileOutcome::Rejected(rejection)
    }

    fn reset(&mut self) {
        self.state = DropZoneState::Idle;
        self.drop_zone.remove_class(HOVER_CLASS);
    }
}

impl std::fmt::Debug for FileDropController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileDropController")
            .field("drop_zone", &self.drop_zone.id())
            .field("field", &self.field.name())
            .field("max_bytes", &self.max_bytes)
            .field("state", &self.state)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};

    const GIB: u64 = 1024 * 1024 * 1024;

    fn setup() -> FileDropController {
        let field = Field::new(
            "briefDescription",
            Element::new("briefDescription"),
            Element::with_classes("", ["form-group"]),
            Element::with_classes("", ["error-message"]),
        );
        FileDropController::new(DropParts {
            drop_zone: Element::new("dropZone"),
            field,
            file_name_display: Element::new("file-name-display"),
        })
    }

    fn slot_text(controller: &FileDropController) -> String {
        controller.field().error_slot().text()
    }

    fn has_error_classes(controller: &FileDropController) -> bool {
        let field = controller.field();
        field.input().has_class("error") && field.group().has_class("error")
    }

    fn pdf(name: &str, size: u64) -> FileRef {
        FileRef::new(name, PDF_MIME, size)
    }

    #[test]
    fn test_drag_hover_state() {
        let mut controller = setup();
        controller.drag_over();
        assert!(controller.is_hovering());
        assert!(controller.drop_zone().has_class("active"));

        controller.drag_leave();
        assert!(!controller.is_hovering());
        assert!(!controller.drop_zone().has_class("active"));
    }

    #[test]
    fn test_drop_empty_only_clears_hover() {
        let mut controller = setup();
        controller.field().error_slot().set_text("previous");
        controller.drag_over();

        assert_eq!(controller.drop(&[]), FileOutcome::Empty);
        assert!(!controller.drop_zone().has_class("active"));
        assert_eq!(slot_text(&controller), "previous");
    }

    #[test]
    fn test_drop_accepts_first_pdf() {
        let mut controller = setup();
        let accepted = Arc::new(AtomicBool::new(false));
        let accepted_clone = accepted.clone();
        controller.file_accepted.connect(move |file| {
            assert_eq!(file.name, "brief.pdf");
            accepted_clone.store(true, Ordering::SeqCst);
        });
        controller.input().set_files(vec![pdf("old.pdf", 10)]);
        ElementFeedback.render(
            controller.field(),
            &Verdict::invalid("Please upload a brief description."),
        );
        assert!(has_error_classes(&controller));

        let outcome = controller.drop(&[pdf("brief.pdf", GIB), pdf("second.pdf", 1)]);

        assert_eq!(outcome, FileOutcome::Accepted(pdf("brief.pdf", GIB)));
        assert_eq!(controller.input().files(), vec![pdf("brief.pdf", GIB)]);
        assert_eq!(slot_text(&controller), "");
        assert!(!has_error_classes(&controller));
        assert_eq!(controller.file_name_display.text(), "File: brief.pdf");
        assert!(accepted.load(Ordering::SeqCst));
    }

    #[test]
    fn test_drop_rejects_and_keeps_files() {
        let mut controller = setup();
        controller.input().set_files(vec![pdf("old.pdf", 10)]);

        let outcome = controller.drop(&[FileRef::new("notes.txt", "text/plain", 10)]);
        assert!(matches!(outcome, FileOutcome::Rejected(FileRejection::DropNotAccepted { .. })));
        assert_eq!(slot_text(&controller), "Please provide a PDF file up to 1GB.");
        assert!(has_error_classes(&controller));
        assert_eq!(controller.input().files(), vec![pdf("old.pdf", 10)]);

        controller.drop(&[pdf("huge.pdf", GIB + 1)]);
        assert_eq!(slot_text(&controller), "Please provide a PDF file up to 1GB.");
        assert_eq!(controller.input().files(), vec![pdf("old.pdf", 10)]);
    }

    #[test]
    fn test_input_changed_rejects_non_pdf() {
        let mut controller = setup();
        controller.input().set_files(vec![FileRef::new("a.png", "image/png", 10)]);

        let outcome = controller.input_changed();
        assert_eq!(outcome, FileOutcome::Rejected(FileRejection::NotPdf));
        assert_eq!(slot_text(&controller), "Please provide a PDF file.");
        assert!(controller.input().files().is_empty());
        assert_eq!(controller.file_name_display.text(), "");
    }

    #[test]
    fn test_input_changed_rejects_large_pdf() {
        let mut controller = setup();
        controller.input().set_files(vec![pdf("big.pdf", GIB + 1)]);

        controller.input_changed();
        assert_eq!(slot_text(&controller), "The file must be less than 1GB.");
        assert!(controller.input().files().is_empty());
    }

    #[test]
    fn test_input_changed_accepts_pdf() {
        let mut controller = setup();
        controller.field().error_slot().set_text("Please provide a PDF file.");
        controller.input().set_files(vec![pdf("brief.pdf", 2048)]);

        assert!(matches!(controller.input_changed(), FileOutcome::Accepted(_)));
        assert_eq!(slot_text(&controller), "");
        assert_eq!(controller.file_name_display.text(), "File: brief.pdf");
    }

    #[test]
    fn test_input_changed_empty_keeps_validation_message() {
        let mut controller = setup();
        controller.file_name_display.set_text("File: old.pdf");
        ElementFeedback.render(
            controller.field(),
            &Verdict::invalid("Please upload a brief description."),
        );

        assert_eq!(controller.input_changed(), FileOutcome::Empty);
        assert_eq!(slot_text(&controller), "Please upload a brief description.");
        assert!(has_error_classes(&controller));
        assert_eq!(controller.file_name_display.text(), "");
    }

    #[test]
    fn test_custom_limit_in_message() {
        let mut controller = setup().with_max_bytes(512 * 1024 * 1024);
        controller.drop(&[pdf("big.pdf", GIB)]);
        assert_eq!(slot_text(&controller), "Please provide a PDF file up to 512MB.");
    }
}
