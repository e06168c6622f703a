//! FAQ section: loading state, accordion rendering and toggling.
//!
//! Posts are fetched once. Up to `max_entries` of them become accordion
//! entries: a trigger button inside a heading, followed by a panel. Exactly
//! one entry is expanded at a time, starting with the first.
//!
//! # Example
//!
//! ```ignore
//! let mut section = FaqSection::new(parts).with_max_entries(5);
//! section.load(&client).await;
//!
//! section.toggle(2);
//! ```

use horizon_contact_core::logging::targets;
use horizon_contact_core::{Display, Element, Signal};
use horizon_contact_net::{FaqClient, FaqPost, NetworkError};

use crate::config::DEFAULT_FAQ_MAX_ENTRIES;

/// Message shown when the posts could not be loaded.
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load posts.";

const ACTIVE_CLASS: &str = "active";
const TRIGGER_CLASS: &str = "accordion-trigger";

/// Id of the trigger button of entry `index`.
pub fn trigger_id(index: usize) -> String {
    format!("accordion-trigger-{index}")
}

/// Id of the panel of entry `index`.
pub fn panel_id(index: usize) -> String {
    format!("accordion-panel-{index}")
}

/// Rendered accordion entries.
#[derive(Debug, Clone, Default)]
pub struct FaqAccordion {
    triggers: Vec<Element>,
    panels: Vec<Element>,
}

impl FaqAccordion {
    /// Build entries for the given posts and append them to `container`.
    pub fn render(container: &Element, posts: &[FaqPost]) -> Self {
        let mut accordion = Self::default();
        for (index, post) in posts.iter().enumerate() {
            let first = index == 0;

            let trigger = Element::new(trigger_id(index));
            trigger.set_class_name(if first {
                "accordion-trigger active"
            } else {
                TRIGGER_CLASS
            });
            trigger.set_attribute("aria-expanded", if first { "true" } else { "false" });
            trigger.set_attribute("aria-controls", panel_id(index));

            let title = Element::with_classes("", ["accordion-title"]);
            title.set_text(post.title.as_str());
            trigger.append_child(Element::with_classes("", ["accordion-icon"]));
            trigger.append_child(title);

            let header = Element::new("");
            header.append_child(trigger.clone());

            let panel = Element::with_classes(panel_id(index), ["accordion-panel"]);
            panel.set_text(post.body.as_str());
            panel.set_attribute("role", "region");
            panel.set_attribute("aria-labelledby", trigger_id(index));
            panel.set_hidden(!first);

            container.append_child(header);
            container.append_child(panel.clone());
            accordion.triggers.push(trigger);
            accordion.panels.push(panel);
        }
        accordion
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    pub fn triggers(&self) -> &[Element] {
        &self.triggers
    }

    pub fn panels(&self) -> &[Element] {
        &self.panels
    }

    /// Entry index of a trigger id.
    pub fn index_of_trigger(&self, id: &str) -> Option<usize> {
        self.triggers.iter().position(|trigger| trigger.id() == id)
    }

    /// The expanded entry.
    pub fn expanded(&self) -> Option<usize> {
        self.panels.iter().position(|panel| !panel.is_hidden())
    }

    /// Expand entry `index` and collapse all others.
    pub fn toggle(&self, index: usize) -> bool {
        if index >= self.panels.len() {
            return false;
        }
        for (i, (trigger, panel)) in self.triggers.iter().zip(&self.panels).enumerate() {
            let selected = i == index;
            panel.set_hidden(!selected);
            trigger.set_attribute("aria-expanded", if selected { "true" } else { "false" });
            trigger.set_class(ACTIVE_CLASS, selected);
        }
        true
    }
}

/// The elements of the FAQ section.
#[derive(Debug, Clone)]
pub struct FaqParts {
    /// Loading indicator, reused for the failure message.
    pub loading: Element,
    /// Container the entries are appended to.
    pub container: Element,
    /// Shown when the feed has no posts.
    pub empty_notice: Element,
}

/// What the FAQ section currently shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FaqState {
    #[default]
    Loading,
    Empty,
    Loaded,
    Failed,
}

/// The FAQ section of the page.
pub struct FaqSection {
    loading: Element,
    container: Element,
    empty_notice: Element,
    max_entries: usize,
    state: FaqState,
    accordion: FaqAccordion,

    /// Signal emitted with the number of rendered entries.
    pub loaded: Signal<usize>,
}

impl FaqSection {
    pub fn new(parts: FaqParts) -> Self {
        Self {
            loading: parts.loading,
            container: parts.container,
            empty_notice: parts.empty_notice,
            max_entries: DEFAULT_FAQ_MAX_ENTRIES,
            state: FaqState::Loading,
            accordion: FaqAccordion::default(),
            loaded: Signal::new(),
        }
    }

    /// Set how many posts are rendered.
    pub fn with_max_entries(mut self, max_entries: usize) -> Self {
        self.max_entries = max_entries;
        self
    }

    pub fn state(&self) -> FaqState {
        self.state
    }

    pub fn accordion(&self) -> &FaqAccordion {
        &self.accordion
    }

    pub fn show_loading(&mut self) {
        self.state = FaqState::Loading;
        self.loading.set_display(Display::Block);
    }

    /// Render fetched posts.
    pub fn render_posts(&mut self, posts: &[FaqPost]) {
        self.loading.set_display(Display::None);

        if posts.is_empty() {
            self.state = FaqState::Empty;
            self.empty_notice.set_display(Display::Block);
            self.loaded.emit(0);
            return;
        }

        let shown = &posts[..posts.len().min(self.max_entries)];
        self.accordion = FaqAccordion::render(&self.container, shown);
        self.state = FaqState::Loaded;
        tracing::debug!(target: targets::FAQ, total = posts.len(), shown = shown.len(), "rendered FAQ");
        self.loaded.emit(shown.len());
    }

    /// Replace the loading indicator with a failure message.
    pub fn render_failure(&mut self, error: &NetworkError) {
        tracing::error!(target: targets::FAQ, %error, "failed to fetch FAQ posts");
        self.state = FaqState::Failed;
        self.loading.set_display(Display::None);
        self.loading.set_text(LOAD_FAILED_MESSAGE);
    }

    /// Expand one entry, collapsing the others.
    pub fn toggle(&self, index: usize) -> bool {
        self.accordion.toggle(index)
    }

    /// Fetch posts and render them, or the failure message.
    pub async fn load(&mut self, client: &FaqClient) {
        self.show_loading();
        match client.fetch_posts().await {
            Ok(posts) => self.render_posts(&posts),
            Err(error) => self.render_failure(&error),
        }
    }
}

impl std::fmt::Debug for FaqSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FaqSection")
            .field("state", &self.state)
            .field("max_entries", &self.max_entries)
            .field("entries", &self.accordion.len())
            .finish()
    }
}
