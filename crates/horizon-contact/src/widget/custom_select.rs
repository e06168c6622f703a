//! Styled select widget backed by a hidden native select.
//!
//! The native element stays the source of truth for the selected index so
//! that form submission and validation see the choice. The styled proxy
//! mirrors it and handles focus, mouse and keyboard input:
//!
//! - clicking the proxy opens or closes the option list
//! - hovering an option highlights it
//! - clicking an option commits it
//! - `ArrowDown`/`ArrowUp` move the selection, `Escape` closes the list
//!
//! # Signals
//!
//! - `current_index_changed(usize)`: the committed index changed
//!
//! # Example
//!
//! ```ignore
//! let select = CustomSelect::new(SelectParts {
//!     native,
//!     proxy,
//!     value_label,
//!     option_list,
//!     options,
//! })?;
//!
//! select.current_index_changed.connect(|&index| {
//!     println!("Selected index: {index}");
//! });
//! ```

use horizon_contact_core::logging::targets;
use horizon_contact_core::{Element, Signal};

use super::events::Key;
use crate::error::{Error, Result};

/// Class on the proxy while it has focus.
pub const ACTIVE_CLASS: &str = "active";
/// Class on the option list while it is closed.
pub const HIDDEN_CLASS: &str = "hidden";
/// Class on the one highlighted option.
pub const HIGHLIGHT_CLASS: &str = "highlight";
/// Class on the value label once the user picked an option.
pub const SELECTED_VALUE_CLASS: &str = "value--selected";

/// The elements making up one styled select.
#[derive(Debug, Clone)]
pub struct SelectParts {
    /// Hidden native select holding the selected index.
    pub native: Element,
    /// Focusable styled element.
    pub proxy: Element,
    /// `.value` label inside the proxy.
    pub value_label: Element,
    /// `.optList` container.
    pub option_list: Element,
    /// `.option` entries, one per native option and in the same order.
    pub options: Vec<Element>,
}

/// A styled select kept in sync with its native element.
pub struct CustomSelect {
    native: Element,
    proxy: Element,
    value_label: Element,
    option_list: Element,
    options: Vec<Element>,
    focused: bool,

    /// Signal emitted when the committed index changes.
    pub current_index_changed: Signal<usize>,
}

impl CustomSelect {
    /// Wire up a styled select.
    ///
    /// Makes the proxy focusable, takes the native element out of the tab
    /// order and renders the native selection.
    pub fn new(parts: SelectParts) -> Result<Self> {
        let SelectParts {
            native,
            proxy,
            value_label,
            option_list,
            options,
        } = parts;

        let native_options = native.option_count();
        if options.len() != native_options {
            return Err(Error::select_mismatch(proxy.id(), options.len(), native_options));
        }

        proxy.set_tab_index(0);
        native.set_tab_index(-1);

        let select = Self {
            native,
            proxy,
            value_label,
            option_list,
            options,
            focused: false,
            current_index_changed: Signal::new(),
        };
        if let Some(index) = select.current_index() {
            select.render_selection(index);
        }
        Ok(select)
    }

    pub fn proxy(&self) -> &Element {
        &self.proxy
    }

    pub fn native(&self) -> &Element {
        &self.native
    }

    pub fn options(&self) -> &[Element] {
        &self.options
    }

    pub fn count(&self) -> usize {
        self.options.len()
    }

    /// The selected index, read from the native element.
    pub fn current_index(&self) -> Option<usize> {
        self.native.selected_index()
    }

    /// Position of the option element with the given id.
    pub fn option_index(&self, id: &str) -> Option<usize> {
        self.options.iter().position(|option| option.id() == id)
    }

    pub fn is_active(&self) -> bool {
        self.proxy.has_class(ACTIVE_CLASS)
    }

    pub fn is_list_visible(&self) -> bool {
        !self.option_list.has_class(HIDDEN_CLASS)
    }

    /// Open the option list if closed, close it if open.
    pub fn toggle_list(&self) {
        self.option_list.toggle_class(HIDDEN_CLASS);
    }

    /// Whether the proxy has keyboard focus.
    pub fn has_focus(&self) -> bool {
        self.focused
    }

    /// Give the proxy keyboard focus and mark it active.
    pub fn focus(&mut self) {
        self.focused = true;
        self.activate();
    }

    /// Take keyboard focus away and deactivate.
    pub fn blur(&mut self) {
        self.focused = false;
        self.deactivate();
    }

    /// Add the `active` class.
    pub fn activate(&self) {
        self.proxy.add_class(ACTIVE_CLASS);
    }

    /// Close the list and drop the focused state. No-op if not active.
    pub fn deactivate(&self) {
        if !self.is_active() {
            return;
        }
        self.option_list.add_class(HIDDEN_CLASS);
        self.proxy.remove_class(ACTIVE_CLASS);
    }

    /// Highlight exactly one option.
    pub fn highlight_option(&self, index: usize) {
        for (i, option) in self.options.iter().enumerate() {
            option.set_class(HIGHLIGHT_CLASS, i == index);
        }
    }

    /// Index of the highlighted option.
    pub fn highlighted_index(&self) -> Option<usize> {
        self.options
            .iter()
            .position(|option| option.has_class(HIGHLIGHT_CLASS))
    }

    /// Commit an option picked with the mouse, then close the list.
    pub fn click_option(&mut self, index: usize) -> bool {
        let changed = self.set_current_index(index);
        self.option_list.add_class(HIDDEN_CLASS);
        changed
    }

    /// Commit an option.
    ///
    /// Returns whether the native index changed. Out of range indices are
    /// ignored.
    pub fn set_current_index(&mut self, index: usize) -> bool {
        if index >= self.options.len() {
            return false;
        }

        let previous = self.current_index();
        self.native.set_selected_index(Some(index));
        self.render_selection(index);
        self.value_label.add_class(SELECTED_VALUE_CLASS);

        let changed = previous != Some(index);
        if changed {
            tracing::debug!(target: targets::SELECT, select = %self.proxy.id(), index, "selection changed");
            self.current_index_changed.emit(index);
        }
        changed
    }

    /// Handle a key released while the select has focus.
    ///
    /// Focus outlives the `active` state: after `Escape` closes the list,
    /// arrow keys still move the selection. Returns whether the key was
    /// handled.
    pub fn key_up(&mut self, key: Key) -> bool {
        if !self.focused {
            return false;
        }

        let last = self.options.len().saturating_sub(1);
        match key {
            Key::Escape => {
                self.deactivate();
                true
            }
            Key::ArrowDown if !self.options.is_empty() => {
                let index = self.current_index().map_or(0, |i| (i + 1).min(last));
                self.set_current_index(index);
                true
            }
            Key::ArrowUp if !self.options.is_empty() => {
                let index = self.current_index().map_or(0, |i| i.saturating_sub(1));
                self.set_current_index(index);
                true
            }
            _ => false,
        }
    }

    fn render_selection(&self, index: usize) {
        for (i, option) in self.options.iter().enumerate() {
            option.set_attribute("aria-selected", if i == index { "true" } else { "false" });
        }
        if let Some(option) = self.options.get(index) {
            self.value_label.set_text(option.text());
        }
        self.highlight_option(index);
    }
}

impl std::fmt::Debug for CustomSelect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CustomSelect")
            .field("proxy", &self.proxy.id())
            .field("count", &self.options.len())
            .field("current_index", &self.current_index())
            .field("focused", &self.focused)
            .finish()
    }
}

/// All styled selects of a form. At most one is active at a time.
#[derive(Debug, Default)]
pub struct SelectGroup {
    selects: Vec<CustomSelect>,
}

impl SelectGroup {
    pub fn new(selects: Vec<CustomSelect>) -> Self {
        Self { selects }
    }

    pub fn len(&self) -> usize {
        self.selects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selects.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&CustomSelect> {
        self.selects.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut CustomSelect> {
        self.selects.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CustomSelect> {
        self.selects.iter()
    }

    /// Position of the select whose proxy has the given id.
    pub fn find_by_proxy(&self, id: &str) -> Option<usize> {
        self.selects.iter().position(|select| select.proxy.id() == id)
    }

    /// Position of the select owning the option with the given id, and the
    /// option's index within it.
    pub fn find_by_option(&self, id: &str) -> Option<(usize, usize)> {
        self.selects
            .iter()
            .enumerate()
            .find_map(|(i, select)| select.option_index(id).map(|option| (i, option)))
    }

    /// Focus one select, blurring all others first.
    pub fn focus(&mut self, index: usize) {
        if index >= self.selects.len() {
            return;
        }
        for (i, other) in self.selects.iter_mut().enumerate() {
            if i != index {
                other.blur();
            }
        }
        self.selects[index].focus();
    }

    /// Blur one select.
    pub fn blur(&mut self, index: usize) {
        if let Some(select) = self.selects.get_mut(index) {
            select.blur();
        }
    }
}
