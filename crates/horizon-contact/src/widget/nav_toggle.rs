//! Mobile navigation menu toggle.

use horizon_contact_core::logging::targets;
use horizon_contact_core::{Element, Signal};

/// Class on the nav element while the mobile menu is open.
pub const NAV_ACTIVE_CLASS: &str = "header__nav--active";

/// Opens and closes the mobile navigation menu.
pub struct NavToggle {
    toggle: Element,
    nav: Element,

    /// Signal emitted with the new expanded state.
    pub toggled: Signal<bool>,
}

impl NavToggle {
    pub fn new(toggle: Element, nav: Element) -> Self {
        Self {
            toggle,
            nav,
            toggled: Signal::new(),
        }
    }

    pub fn toggle_button(&self) -> &Element {
        &self.toggle
    }

    /// Whether the menu is open. A missing `aria-expanded` counts as closed.
    pub fn is_expanded(&self) -> bool {
        self.toggle.attribute("aria-expanded").as_deref() == Some("true")
    }

    /// Flip the menu state and return the new one.
    pub fn click(&self) -> bool {
        let expanded = !self.is_expanded();
        self.toggle
            .set_attribute("aria-expanded", if expanded { "true" } else { "false" });
        self.nav.toggle_class(NAV_ACTIVE_CLASS);
        tracing::trace!(target: targets::NAV, expanded, "navigation toggled");
        self.toggled.emit(expanded);
        expanded
    }
}

impl std::fmt::Debug for NavToggle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NavToggle")
            .field("toggle", &self.toggle)
            .field("nav", &self.nav)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_toggle_flips() {
        let nav = Element::with_classes("", ["header__nav"]);
        let toggle = NavToggle::new(Element::new("menu-toggle"), nav.clone());
        assert!(!toggle.is_expanded());

        assert!(toggle.click());
        assert_eq!(toggle.toggle_button().attribute("aria-expanded").as_deref(), Some("true"));
        assert!(nav.has_class(NAV_ACTIVE_CLASS));

        assert!(!toggle.click());
        assert_eq!(toggle.toggle_button().attribute("aria-expanded").as_deref(), Some("false"));
        assert!(!nav.has_class(NAV_ACTIVE_CLASS));
    }

    #[test]
    fn test_nav_toggle_unknown_value_counts_as_closed() {
        let button = Element::new("menu-toggle");
        button.set_attribute("aria-expanded", "maybe");
        let toggle = NavToggle::new(button, Element::new("nav"));
        assert!(toggle.click());
    }
}
