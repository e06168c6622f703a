//! Retained element model.
//!
//! An [`Element`] is a cheaply clonable handle to one node of the page: its
//! class list, attributes, text content, and the form state a control carries
//! (text value, attached files, checked flag, native options and selected
//! index). Components receive the handles they operate on at construction and
//! mutate only those; a host binding mirrors element state onto whatever
//! presentation it drives.
//!
//! Clones share state:
//!
//! ```
//! use horizon_contact_core::Element;
//!
//! let field = Element::new("email");
//! let same = field.clone();
//!
//! field.add_class("error");
//! assert!(same.has_class("error"));
//! assert!(field.ptr_eq(&same));
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

/// A file attached to a file input, or carried by a drop.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileRef {
    /// File name as reported by the host (no directory component).
    pub name: String,
    /// MIME type as reported by the host, possibly empty.
    pub mime: String,
    /// Size in bytes.
    pub size: u64,
}

impl FileRef {
    /// Create a file reference.
    pub fn new(name: impl Into<String>, mime: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            mime: mime.into(),
            size,
        }
    }
}

/// Inline `display` style of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Display {
    /// No inline style; the stylesheet decides.
    #[default]
    Unset,
    /// `display: none`.
    None,
    /// `display: block`.
    Block,
}

#[derive(Debug, Default)]
struct ElementData {
    id: String,
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
    text: String,
    value: String,
    files: Vec<FileRef>,
    checked: bool,
    options: Vec<String>,
    selected_index: Option<usize>,
    tab_index: Option<i32>,
    hidden: bool,
    display: Display,
    children: Vec<Element>,
}

/// A shared handle to one page element.
#[derive(Clone, Default)]
pub struct Element {
    inner: Arc<RwLock<ElementData>>,
}

impl Element {
    /// Create an element with the given id. An empty id is allowed for
    /// anonymous elements.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(ElementData {
                id: id.into(),
                ..ElementData::default()
            })),
        }
    }

    /// Create an element carrying the given classes.
    pub fn with_classes<I, S>(id: impl Into<String>, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let element = Self::new(id);
        for class in classes {
            element.add_class(class);
        }
        element
    }

    /// Whether two handles refer to the same element.
    pub fn ptr_eq(&self, other: &Element) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// The element id.
    pub fn id(&self) -> String {
        self.inner.read().id.clone()
    }

    // =========================================================================
    // Classes
    // =========================================================================

    /// Add a class. Adding a class that is already present is a no-op.
    pub fn add_class(&self, class: impl Into<String>) {
        let class = class.into();
        let mut data = self.inner.write();
        if !data.classes.iter().any(|c| *c == class) {
            data.classes.push(class);
        }
    }

    /// Remove a class if present.
    pub fn remove_class(&self, class: &str) {
        self.inner.write().classes.retain(|c| c != class);
    }

    /// Toggle a class, returning whether it is present afterwards.
    pub fn toggle_class(&self, class: &str) -> bool {
        let mut data = self.inner.write();
        if let Some(pos) = data.classes.iter().position(|c| c == class) {
            data.classes.remove(pos);
            false
        } else {
            data.classes.push(class.to_string());
            true
        }
    }

    /// Add or remove a class depending on `on`.
    pub fn set_class(&self, class: &str, on: bool) {
        if on {
            self.add_class(class);
        } else {
            self.remove_class(class);
        }
    }

    /// Check for a class.
    pub fn has_class(&self, class: &str) -> bool {
        self.inner.read().classes.iter().any(|c| c == class)
    }

    /// The class list, in insertion order.
    pub fn classes(&self) -> Vec<String> {
        self.inner.read().classes.clone()
    }

    /// Replace the whole class list (the `className` setter).
    pub fn set_class_name(&self, class_name: &str) {
        self.inner.write().classes = class_name.split_whitespace().map(str::to_string).collect();
    }

    // =========================================================================
    // Attributes
    // =========================================================================

    /// Set an attribute.
    pub fn set_attribute(&self, name: impl Into<String>, value: impl Into<String>) {
        self.inner.write().attributes.insert(name.into(), value.into());
    }

    /// Get an attribute.
    pub fn attribute(&self, name: &str) -> Option<String> {
        self.inner.read().attributes.get(name).cloned()
    }

    /// Remove an attribute, returning its previous value.
    pub fn remove_attribute(&self, name: &str) -> Option<String> {
        self.inner.write().attributes.remove(name)
    }

    // =========================================================================
    // Content
    // =========================================================================

    /// Set the text content.
    pub fn set_text(&self, text: impl Into<String>) {
        self.inner.write().text = text.into();
    }

    /// The text content.
    pub fn text(&self) -> String {
        self.inner.read().text.clone()
    }

    /// Append a child element.
    pub fn append_child(&self, child: Element) {
        self.inner.write().children.push(child);
    }

    /// The child elements, in insertion order.
    pub fn children(&self) -> Vec<Element> {
        self.inner.read().children.clone()
    }

    // =========================================================================
    // Form state
    // =========================================================================

    /// Set the control's text value.
    pub fn set_value(&self, value: impl Into<String>) {
        self.inner.write().value = value.into();
    }

    /// The control's text value.
    pub fn value(&self) -> String {
        self.inner.read().value.clone()
    }

    /// Replace the attached files wholesale.
    pub fn set_files(&self, files: Vec<FileRef>) {
        self.inner.write().files = files;
    }

    /// Detach all files.
    pub fn clear_files(&self) {
        self.inner.write().files.clear();
    }

    /// The attached files.
    pub fn files(&self) -> Vec<FileRef> {
        self.inner.read().files.clone()
    }

    /// The first attached file, if any.
    pub fn first_file(&self) -> Option<FileRef> {
        self.inner.read().files.first().cloned()
    }

    /// Set the checked flag of a checkbox or radio control.
    pub fn set_checked(&self, checked: bool) {
        self.inner.write().checked = checked;
    }

    /// The checked flag.
    pub fn is_checked(&self) -> bool {
        self.inner.read().checked
    }

    /// Set the option labels of a native select. The selection moves to the
    /// first option, or to none when the list is empty.
    pub fn set_options<I, S>(&self, options: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut data = self.inner.write();
        data.options = options.into_iter().map(Into::into).collect();
        data.selected_index = if data.options.is_empty() { None } else { Some(0) };
    }

    /// The option labels of a native select.
    pub fn options(&self) -> Vec<String> {
        self.inner.read().options.clone()
    }

    /// Number of native options.
    pub fn option_count(&self) -> usize {
        self.inner.read().options.len()
    }

    /// The selected option index of a native select.
    pub fn selected_index(&self) -> Option<usize> {
        self.inner.read().selected_index
    }

    /// Set the selected option index. Out-of-range indices clear the selection.
    pub fn set_selected_index(&self, index: Option<usize>) {
        let mut data = self.inner.write();
        data.selected_index = index.filter(|&i| i < data.options.len());
    }

    // =========================================================================
    // Focus and visibility
    // =========================================================================

    /// Set the tab index.
    pub fn set_tab_index(&self, tab_index: i32) {
        self.inner.write().tab_index = Some(tab_index);
    }

    /// The tab index, if one was set.
    pub fn tab_index(&self) -> Option<i32> {
        self.inner.read().tab_index
    }

    /// Set the `hidden` flag.
    pub fn set_hidden(&self, hidden: bool) {
        self.inner.write().hidden = hidden;
    }

    /// The `hidden` flag.
    pub fn is_hidden(&self) -> bool {
        self.inner.read().hidden
    }

    /// Set the inline `display` style.
    pub fn set_display(&self, display: Display) {
        self.inner.write().display = display;
    }

    /// The inline `display` style.
    pub fn display(&self) -> Display {
        self.inner.read().display
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.inner.read();
        f.debug_struct("Element")
            .field("id", &data.id)
            .field("classes", &data.classes)
            .field("attributes", &data.attributes)
            .field("text", &data.text)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_list() {
        let element = Element::new("step-1");
        element.add_class("form-step");
        element.add_class("active");
        element.add_class("active");
        assert_eq!(element.classes(), vec!["form-step", "active"]);

        element.remove_class("active");
        assert!(!element.has_class("active"));

        assert!(element.toggle_class("hidden"));
        assert!(!element.toggle_class("hidden"));

        element.set_class_name("accordion-trigger  active");
        assert_eq!(element.classes(), vec!["accordion-trigger", "active"]);
    }

    #[test]
    fn test_attributes() {
        let element = Element::new("opt");
        assert_eq!(element.attribute("aria-selected"), None);
        element.set_attribute("aria-selected", "true");
        assert_eq!(element.attribute("aria-selected").as_deref(), Some("true"));
        assert_eq!(element.remove_attribute("aria-selected").as_deref(), Some("true"));
    }

    #[test]
    fn test_native_options() {
        let native = Element::new("topic");
        assert_eq!(native.selected_index(), None);

        native.set_options(["Sales", "Support", "Press"]);
        assert_eq!(native.option_count(), 3);
        assert_eq!(native.selected_index(), Some(0));

        native.set_selected_index(Some(2));
        assert_eq!(native.selected_index(), Some(2));

        native.set_selected_index(Some(7));
        assert_eq!(native.selected_index(), None);
    }

    #[test]
    fn test_files_replaced_wholesale() {
        let input = Element::new("briefDescription");
        input.set_files(vec![
            FileRef::new("a.pdf", "application/pdf", 1),
            FileRef::new("b.pdf", "application/pdf", 2),
        ]);
        assert_eq!(input.files().len(), 2);

        input.set_files(vec![FileRef::new("c.pdf", "application/pdf", 3)]);
        assert_eq!(input.first_file().map(|f| f.name), Some("c.pdf".to_string()));

        input.clear_files();
        assert!(input.first_file().is_none());
    }

    #[test]
    fn test_clones_share_state() {
        let a = Element::new("x");
        let b = a.clone();
        b.set_display(Display::None);
        assert_eq!(a.display(), Display::None);

        let c = Element::new("x");
        assert!(!a.ptr_eq(&c));
    }
}
