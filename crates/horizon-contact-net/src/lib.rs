//! Networking module for Horizon Contact.
//!
//! This crate provides the one outbound read the contact page performs:
//!
//! - **HTTP Client**: a small reqwest-backed client for GET requests
//! - **FAQ feed**: fetching and decoding the posts shown in the FAQ accordion
//!
//! # Example
//!
//! ```ignore
//! use horizon_contact_net::{FaqClient, HttpClient, DEFAULT_FAQ_ENDPOINT};
//!
//! let client = HttpClient::builder()
//!     .timeout(std::time::Duration::from_secs(10))
//!     .build()?;
//! let faq = FaqClient::new(client, DEFAULT_FAQ_ENDPOINT);
//!
//! for post in faq.fetch_posts().await?.iter().take(5) {
//!     println!("{}", post.title);
//! }
//! ```

mod error;
pub mod faq;
pub mod http;

pub use error::{NetworkError, Result};
pub use faq::{DEFAULT_FAQ_ENDPOINT, FaqClient, FaqPost};
pub use http::{HttpClient, HttpClientBuilder, HttpClientConfig, HttpResponse};
