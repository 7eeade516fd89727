//! Single-post detail page.
//!
//! The media block is one discriminated choice over `content_type`: image
//! and image-with-text posts get a full-width image plus optional caption,
//! video posts get a player, anything else gets no media. Decoded body
//! markup is then injected raw; that asymmetry with the always-escaped
//! title/category/caption is deliberate and matches what the backend stores.

use maud::{Markup, PreEscaped, html};

use crate::client::{ContentType, Post};
use crate::config::Config;
use crate::media;
use crate::render::components::{page_shell, post_meta};
use crate::text;

/// Words of body text used for the page's meta description.
const DESCRIPTION_WORD_LIMIT: usize = 30;

/// Render the detail page for a single post.
pub fn page(post: &Post, config: &Config) -> Markup {
    let api_base = &config.api_base_url;

    let description = post
        .text_content
        .as_deref()
        .map(|t| text::preview_text(t, DESCRIPTION_WORD_LIMIT))
        .filter(|p| !p.is_empty())
        .or_else(|| post.caption.clone())
        .unwrap_or_else(|| post.title.clone());

    let body = html! {
        article class="blog-post-detail" {
            div class="post-header" {
                (post_meta(&post.category, &post.created_at))
                h1 class="post-title-detail" { (post.title) }
            }

            @match post.content_type {
                Some(ContentType::Image) | Some(ContentType::ImageText) => {
                    @if let Some(url) = media::image_url(post, api_base) {
                        (image_block(&url, &post.title, post.caption.as_deref()))
                    }
                }
                Some(ContentType::Video) => {
                    @if let Some(url) = media::video_url(post, api_base) {
                        (video_block(&url, post.caption.as_deref()))
                    }
                }
                Some(ContentType::Other) | None => {}
            }

            @if let Some(text) = post.text_content.as_deref().filter(|t| !t.is_empty()) {
                div class="post-text-content" {
                    (PreEscaped(text::decode_to_fixed_point(text)))
                }
            }

            div class="post-footer" {
                a href="/blog" class="back-link" { "← Back to all posts" }
            }
        }
    };

    page_shell(&post.title, &description, "article", body, &config.site_name)
}

/// Full-width image with optional caption.
fn image_block(url: &str, alt: &str, caption: Option<&str>) -> Markup {
    html! {
        div class="post-media-container" {
            img src=(url) alt=(alt) class="post-image-full" loading="lazy";
            (caption_line(caption))
        }
    }
}

/// Video player with optional caption.
fn video_block(url: &str, caption: Option<&str>) -> Markup {
    html! {
        div class="post-media-container" {
            video src=(url) controls="" preload="metadata" class="post-video-full" {
                "Your browser does not support the video tag."
            }
            (caption_line(caption))
        }
    }
}

/// Caption paragraph, omitted when absent or empty.
fn caption_line(caption: Option<&str>) -> Markup {
    html! {
        @if let Some(text) = caption.filter(|c| !c.is_empty()) {
            p class="post-caption" { (text) }
        }
    }
}
