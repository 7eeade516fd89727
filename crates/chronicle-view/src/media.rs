//! Media URL resolution for posts.
//!
//! A post's `content_url` is either an absolute URL (used unchanged) or a
//! filename served from the backend's uploads path. Which kind of media it is
//! follows from `content_type` alone; no reachability checks happen here.

use crate::client::{ContentType, Post};

/// Image URL for a post, if it has one.
///
/// Only `image` and `image_text` posts carry images.
pub fn image_url(post: &Post, api_base: &str) -> Option<String> {
    let url = content_url(post)?;
    match post.content_type {
        Some(ContentType::Image | ContentType::ImageText) => Some(resolve_upload(url, api_base)),
        _ => None,
    }
}

/// Video URL for a post, if it has one.
///
/// Only `video` posts carry videos.
pub fn video_url(post: &Post, api_base: &str) -> Option<String> {
    let url = content_url(post)?;
    match post.content_type {
        Some(ContentType::Video) => Some(resolve_upload(url, api_base)),
        _ => None,
    }
}

/// Resolve a `content_url` value against the uploads path.
///
/// Absolute URLs pass through unchanged; anything else is an uploaded
/// filename under `{api_base}/uploads/`.
pub fn resolve_upload(url: &str, api_base: &str) -> String {
    if is_absolute_url(url) {
        url.to_string()
    } else {
        format!("{api_base}/uploads/{url}")
    }
}

/// Check whether a URL carries its own scheme and host.
fn is_absolute_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

/// The post's `content_url`, filtered to non-empty.
fn content_url(post: &Post) -> Option<&str> {
    post.content_url.as_deref().filter(|u| !u.is_empty())
}
