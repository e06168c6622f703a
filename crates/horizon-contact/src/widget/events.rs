//! Keyboard input.

/// A key released on a focused widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Escape,
    ArrowDown,
    ArrowUp,
    /// Any key the widgets do not react to.
    Other,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` name to a key.
    pub fn from_name(name: &str) -> Self {
        match name {
            "Escape" | "Esc" => Self::Escape,
            "ArrowDown" | "Down" => Self::ArrowDown,
            "ArrowUp" | "Up" => Self::ArrowUp,
            _ => Self::Other,
        }
    }
}
