//! Blog listing page: one card per post.

use maud::{Markup, html};

use crate::client::Post;
use crate::config::Config;
use crate::media;
use crate::render::components::{page_shell, post_meta};
use crate::text;

/// Number of words shown in a card preview.
pub const PREVIEW_WORD_LIMIT: usize = 50;

/// Render the listing page for a collection of posts.
///
/// An empty collection renders an explicit "no posts yet" block, never an
/// empty container.
pub fn page(posts: &[Post], config: &Config) -> Markup {
    let description = format!("Latest posts from {}", config.site_name);

    let body = html! {
        div class="blog-posts" {
            @if posts.is_empty() {
                div class="no-posts" {
                    p { "No blog posts yet. Check back soon!" }
                }
            } @else {
                @for post in posts {
                    (post_card(post, &config.api_base_url))
                }
            }
        }
    };

    page_shell("Blog", &description, "website", body, &config.site_name)
}

/// Render a single post card.
fn post_card(post: &Post, api_base: &str) -> Markup {
    let detail_href = format!("/blog?id={}", post.id);

    // Preview comes from the body text when there is one, else the caption.
    let preview = match post.text_content.as_deref().filter(|t| !t.is_empty()) {
        Some(text) => text::preview_text(text, PREVIEW_WORD_LIMIT),
        None => post.caption.clone().unwrap_or_default(),
    };

    let image = media::image_url(post, api_base);

    html! {
        article class="blog-post-card" {
            @if let Some(url) = &image {
                div class="post-image-container" {
                    img src=(url) alt=(post.title) class="post-image-preview" loading="lazy";
                }
            }
            div class="post-content" {
                (post_meta(&post.category, &post.created_at))
                h2 class="post-title" {
                    a href=(detail_href) { (post.title) }
                }
                @if !preview.is_empty() {
                    p class="post-preview" { (preview) }
                }
                a href=(detail_href) class="read-more" { "Read More →" }
            }
        }
    }
}
