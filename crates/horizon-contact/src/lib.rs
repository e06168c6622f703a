//! Horizon Contact - behavior of the Horizon contact page.
//!
//! This is the main crate. It re-exports the element model and signals from
//! `horizon-contact-core` and the FAQ client from `horizon-contact-net`.
//!
//! # Example
//!
//! ```ignore
//! use horizon_contact::{ContactPage, PageConfig, PageEvent};
//!
//! let config = PageConfig::load_toml("contact.toml")?;
//! let mut page = ContactPage::new(config, elements)?;
//!
//! page.dispatch("email", PageEvent::Blur);
//! page.dispatch("multiStepForm", PageEvent::Submit);
//! ```

pub use horizon_contact_core::*;

/// FAQ feed networking.
pub mod net {
    pub use horizon_contact_net::*;
}

pub mod config;
pub mod error;
pub mod form;
pub mod page;
pub mod widget;

pub use config::PageConfig;
pub use error::{Error, Result};
pub use page::{ContactPage, NavElements, PageElements, PageEvent, UploadElements};
