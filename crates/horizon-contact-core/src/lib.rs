//! Core systems for Horizon Contact.
//!
//! This crate provides the foundation the page components are built on:
//!
//! - **Element model**: shared handles to page elements (classes, attributes,
//!   text, form state) that components mutate as their render output
//! - **Signal/Slot System**: type-safe notification of component state changes
//! - **Logging**: `tracing` targets for each subsystem
//!
//! # Example
//!
//! ```
//! use horizon_contact_core::{Element, Signal};
//!
//! let step = Element::with_classes("step-2", ["form-step"]);
//! let activated = Signal::<String>::new();
//!
//! activated.connect(|id| println!("activated {id}"));
//!
//! step.add_class("active");
//! activated.emit(step.id());
//! ```

pub mod element;
pub mod logging;
pub mod signal;

pub use element::{Display, Element, FileRef};
pub use signal::{ConnectionId, Signal};
