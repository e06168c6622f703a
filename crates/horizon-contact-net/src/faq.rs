//! FAQ feed client.
//!
//! The FAQ section of the contact page is filled from a public posts feed: one
//! GET request returning a JSON array of posts. Failures are reported to the
//! caller once; nothing is retried.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::http::HttpClient;

/// Default posts endpoint.
pub const DEFAULT_FAQ_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/posts";

/// One post of the FAQ feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaqPost {
    /// Author id.
    #[serde(default)]
    pub user_id: u64,
    /// Post id.
    pub id: u64,
    /// Question shown in the accordion trigger.
    pub title: String,
    /// Answer shown in the accordion panel.
    pub body: String,
}

/// Fetches FAQ posts from a posts endpoint.
#[derive(Debug, Clone)]
pub struct FaqClient {
    client: HttpClient,
    endpoint: String,
}

impl FaqClient {
    /// Create a client for the given endpoint.
    pub fn new(client: HttpClient, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    /// The endpoint this client reads from.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch all posts from the endpoint.
    pub async fn fetch_posts(&self) -> Result<Vec<FaqPost>> {
        let posts: Vec<FaqPost> = self.client.get_json(&self.endpoint).await?;
        tracing::debug!(
            target: "horizon_contact_net::faq",
            endpoint = %self.endpoint,
            count = posts.len(),
            "fetched FAQ posts"
        );
        Ok(posts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_wire_format() {
        let json = r#"[{"userId": 1, "id": 7, "title": "Do you ship?", "body": "Yes."}]"#;
        let posts: Vec<FaqPost> = serde_json::from_str(json).unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].user_id, 1);
        assert_eq!(posts[0].id, 7);
        assert_eq!(posts[0].title, "Do you ship?");
    }

    #[test]
    fn test_post_without_user_id() {
        let json = r#"{"id": 2, "title": "t", "body": "b"}"#;
        let post: FaqPost = serde_json::from_str(json).unwrap();
        assert_eq!(post.user_id, 0);
    }
}
