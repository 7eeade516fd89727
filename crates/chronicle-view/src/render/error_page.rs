//! Terminal error views for failed backend fetches.
//!
//! There is no retry path: a failed fetch renders one of these static pages
//! and the user recovers by reloading or navigating back. Both views name the
//! configured backend base URL so a misconfigured or stopped backend is
//! diagnosable from the page itself.

use maud::{Markup, html};

use crate::config::Config;
use crate::render::components::page_shell;

/// Error view for a failed post-listing fetch.
pub fn listing_error(message: &str, config: &Config) -> Markup {
    let body = error_body(
        "Failed to load blog posts.",
        message,
        config,
        html! {
            a href=(format!("{}/docs", config.api_base_url)) target="_blank" {
                "Check Backend API Docs"
            }
            " | "
            a href="/blog" { "Reload Page" }
        },
    );

    page_shell("Failed to load", "Failed to load blog posts", "website", body, &config.site_name)
}

/// Error view for a failed single-post fetch.
pub fn detail_error(message: &str, config: &Config) -> Markup {
    let body = error_body(
        "Failed to load post.",
        message,
        config,
        html! {
            a href="/blog" { "← Back to blog" }
            " | "
            a href=(format!("{}/docs", config.api_base_url)) target="_blank" {
                "Check Backend API"
            }
        },
    );

    page_shell("Failed to load", "Failed to load post", "website", body, &config.site_name)
}

/// Shared error layout: headline, backend pointer, raw message, recovery links.
fn error_body(headline: &str, message: &str, config: &Config, links: Markup) -> Markup {
    html! {
        div class="error" {
            p { strong { (headline) } }
            p { "Make sure the backend server is running on " (config.api_base_url) }
            p { "Error: " (message) }
            p class="error-links" { (links) }
        }
    }
}
