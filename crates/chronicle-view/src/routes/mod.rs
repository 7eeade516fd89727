//! Route definitions for the blog view service.
//!
//! ## Routes
//!
//! - `GET /` - Redirect to `/blog`
//! - `GET /blog` - Blog page (listing, or detail with `?id=N`)
//! - `GET /health` - Health check (JSON)
//! - `GET /robots.txt` - Crawler instructions

mod blog;
mod health;

use axum::Router;
use axum::response::{IntoResponse, Redirect};
use axum::routing::get;

use crate::state::AppState;

/// Build the complete service router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/blog", get(blog::blog_page))
        .route("/health", get(health::health_check))
        .route("/robots.txt", get(robots_txt))
        .with_state(state)
}

/// The blog listing is the front page.
async fn index() -> Redirect {
    Redirect::permanent("/blog")
}

/// Serve robots.txt allowing all crawlers.
async fn robots_txt() -> impl IntoResponse {
    (
        [("content-type", "text/plain; charset=utf-8")],
        "User-agent: *\nAllow: /\n",
    )
}
