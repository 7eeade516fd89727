//! Chronicle View - server-rendered HTML pages for blog posts.
//!
//! This crate provides a lightweight HTTP server that fetches post data from
//! the blog backend API and renders it as static HTML: a listing page of
//! cards and a single-post detail page.
//!
//! # Architecture
//!
//! - **Client**: fetches post JSON from the backend (`/api/blogs`,
//!   `/api/blogs/{id}`) with reqwest
//! - **Text**: entity decoding and preview extraction for stored post bodies,
//!   which arrive escaped an unknown number of times
//! - **Render**: generates HTML using maud (compile-time templates)
//!
//! # URL Pattern
//!
//! ```text
//! GET /blog        -> listing page
//! GET /blog?id=N   -> single-post detail page
//! ```
//!
//! # Security
//!
//! - Titles, categories, and captions are HTML-escaped by maud
//! - Decoded post body markup is trusted backend content and injected raw;
//!   this asymmetry is deliberate and required for already-stored posts

pub mod client;
pub mod config;
pub mod error;
pub mod media;
pub mod render;
pub mod routes;
pub mod state;
pub mod text;

pub use config::Config;
pub use routes::router;
pub use state::AppState;
