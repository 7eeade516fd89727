//! Backend API client for fetching posts.
//!
//! Thin layer over one HTTP GET per page load. A non-success status is
//! surfaced as [`FetchError::Status`]; transport and body-decoding failures
//! map through [`FetchError::Transport`]. No retries.

use reqwest::Client;
use serde::Deserialize;

use crate::error::FetchError;

/// Discriminator selecting which media block a post renders.
///
/// Unknown upstream values land on [`ContentType::Other`] and render no
/// media, the same as an absent discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    Image,
    ImageText,
    Video,
    #[serde(other)]
    Other,
}

/// A blog post record as served by the backend.
///
/// Everything but the id is optional-with-default so a sparse record still
/// deserializes; the renderers decide what a missing field means.
#[derive(Debug, Clone, Deserialize)]
pub struct Post {
    /// Identifier used to build the detail-page link.
    pub id: i64,
    /// Post title. Escaped on output.
    #[serde(default)]
    pub title: String,
    /// Category label. Escaped on output.
    #[serde(default)]
    pub category: String,
    /// Media caption. Escaped on output.
    #[serde(default)]
    pub caption: Option<String>,
    /// Creation timestamp; serialization format is the backend's business,
    /// parsing is lenient (see `render::components::format_date`).
    #[serde(default)]
    pub created_at: String,
    /// Media discriminator.
    #[serde(default)]
    pub content_type: Option<ContentType>,
    /// Absolute URL or uploaded filename, resolved by the `media` module.
    #[serde(default)]
    pub content_url: Option<String>,
    /// Stored body markup, possibly entity-escaped one or more times.
    /// Decoded to a fixed point and injected raw on the detail page.
    #[serde(default)]
    pub text_content: Option<String>,
}

/// Fetch the full post collection.
///
/// An empty array is a valid response meaning "no posts".
pub async fn fetch_posts(http: &Client, api_base: &str) -> Result<Vec<Post>, FetchError> {
    let url = format!("{api_base}/api/blogs");
    tracing::debug!(url = %url, "fetching post listing");

    let response = http.get(&url).send().await?;
    if !response.status().is_success() {
        return Err(FetchError::Status(response.status()));
    }

    Ok(response.json().await?)
}

/// Fetch a single post by id.
///
/// The id is treated as opaque here; the backend answers non-2xx for
/// anything it does not recognize, which callers report as "failed to load".
pub async fn fetch_post(http: &Client, api_base: &str, id: &str) -> Result<Post, FetchError> {
    let url = format!("{api_base}/api/blogs/{id}");
    tracing::debug!(url = %url, "fetching post");

    let response = http.get(&url).send().await?;
    if !response.status().is_success() {
        return Err(FetchError::Status(response.status()));
    }

    Ok(response.json().await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_deserializes_full_record() {
        let post: Post = serde_json::from_str(
            r#"{
                "id": 7,
                "title": "Hello",
                "category": "News",
                "caption": "a caption",
                "created_at": "2024-01-15T10:30:00Z",
                "content_type": "image_text",
                "content_url": "pic.jpg",
                "text_content": "<p>body</p>"
            }"#,
        )
        .unwrap();

        assert_eq!(post.id, 7);
        assert_eq!(post.title, "Hello");
        assert_eq!(post.content_type, Some(ContentType::ImageText));
        assert_eq!(post.content_url.as_deref(), Some("pic.jpg"));
        assert_eq!(post.text_content.as_deref(), Some("<p>body</p>"));
    }

    #[test]
    fn post_deserializes_sparse_record() {
        let post: Post = serde_json::from_str(r#"{"id": 1}"#).unwrap();

        assert_eq!(post.id, 1);
        assert!(post.title.is_empty());
        assert!(post.category.is_empty());
        assert!(post.caption.is_none());
        assert!(post.created_at.is_empty());
        assert!(post.content_type.is_none());
        assert!(post.content_url.is_none());
        assert!(post.text_content.is_none());
    }

    #[test]
    fn content_type_known_values() {
        #[derive(Deserialize)]
        struct Wrapper {
            content_type: ContentType,
        }

        let w: Wrapper = serde_json::from_str(r#"{"content_type": "image"}"#).unwrap();
        assert_eq!(w.content_type, ContentType::Image);

        let w: Wrapper = serde_json::from_str(r#"{"content_type": "video"}"#).unwrap();
        assert_eq!(w.content_type, ContentType::Video);

        let w: Wrapper = serde_json::from_str(r#"{"content_type": "image_text"}"#).unwrap();
        assert_eq!(w.content_type, ContentType::ImageText);
    }

    #[test]
    fn content_type_unknown_value_is_other() {
        let post: Post =
            serde_json::from_str(r#"{"id": 2, "content_type": "audio"}"#).unwrap();
        assert_eq!(post.content_type, Some(ContentType::Other));
    }

    #[test]
    fn listing_deserializes_empty_array() {
        let posts: Vec<Post> = serde_json::from_str("[]").unwrap();
        assert!(posts.is_empty());
    }
}
