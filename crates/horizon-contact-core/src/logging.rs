//! Logging facilities for Horizon Contact.
//!
//! Horizon Contact uses the `tracing` crate for instrumentation. Nothing is
//! printed unless the host installs a subscriber:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("horizon_contact::form=debug")
//!     .init();
//! ```

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Signal/slot system target.
    pub const SIGNAL: &str = "horizon_contact_core::signal";
    /// Field validation, step navigation and submission.
    pub const FORM: &str = "horizon_contact::form";
    /// Custom select widgets.
    pub const SELECT: &str = "horizon_contact::select";
    /// Drag-and-drop and manual file selection.
    pub const UPLOAD: &str = "horizon_contact::upload";
    /// Mobile navigation toggle.
    pub const NAV: &str = "horizon_contact::nav";
    /// FAQ accordion.
    pub const FAQ: &str = "horizon_contact::faq";
    /// Page bootstrapping and event routing.
    pub const PAGE: &str = "horizon_contact::page";
    /// Configuration loading.
    pub const CONFIG: &str = "horizon_contact::config";
}
