//! The blog page handler.
//!
//! One route serves both page modes, selected by the `id` query parameter:
//! present and non-empty means the single-post detail view, absent or empty
//! means the listing. This mirrors how the pages have always been addressed
//! (`/blog?id=N`), so stored links keep working.

use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use crate::client;
use crate::render;
use crate::state::AppState;

/// Query parameters for the blog page.
#[derive(Debug, Deserialize)]
pub struct BlogQuery {
    /// Post id selecting detail mode. Opaque at this boundary; the backend
    /// decides whether it names a post.
    #[serde(default)]
    pub id: Option<String>,
}

/// Handle `GET /blog`, dispatching on the `id` query parameter.
pub async fn blog_page(
    State(state): State<AppState>,
    Query(query): Query<BlogQuery>,
) -> Response {
    match query.id.as_deref().filter(|id| !id.is_empty()) {
        Some(id) => detail_page(&state, id).await,
        None => listing_page(&state).await,
    }
}

/// Fetch and render the post listing.
async fn listing_page(state: &AppState) -> Response {
    let config = &state.config;

    match client::fetch_posts(&state.http, &config.api_base_url).await {
        Ok(posts) => {
            tracing::debug!(count = posts.len(), "rendering post listing");
            render::listing::page(&posts, config).into_response()
        }
        Err(err) => {
            tracing::error!(error = %err, "failed to load post listing");
            let markup = render::error_page::listing_error(&err.to_string(), config);
            (err.http_status(), markup).into_response()
        }
    }
}

/// Fetch and render a single post.
async fn detail_page(state: &AppState, id: &str) -> Response {
    let config = &state.config;

    match client::fetch_post(&state.http, &config.api_base_url, id).await {
        Ok(post) => {
            tracing::debug!(id = %id, "rendering post detail");
            render::detail::page(&post, config).into_response()
        }
        Err(err) => {
            tracing::error!(id = %id, error = %err, "failed to load post");
            let markup = render::error_page::detail_error(&err.to_string(), config);
            (err.http_status(), markup).into_response()
        }
    }
}
