//! Interactive page widgets.

mod accordion;
mod custom_select;
mod events;
mod file_drop;
mod nav_toggle;

pub use accordion::{
    FaqAccordion, FaqParts, FaqSection, FaqState, LOAD_FAILED_MESSAGE, panel_id, trigger_id,
};
pub use custom_select::{
    ACTIVE_CLASS, CustomSelect, HIDDEN_CLASS, HIGHLIGHT_CLASS, SELECTED_VALUE_CLASS, SelectGroup,
    SelectParts,
};
pub use events::Key;
pub use file_drop::{
    DropParts, DropZoneState, FileDropController, FileOutcome, FileRejection, HOVER_CLASS, PDF_MIME,
};
pub use nav_toggle::{NAV_ACTIVE_CLASS, NavToggle};
