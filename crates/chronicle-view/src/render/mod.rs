//! HTML rendering for blog pages.
//!
//! Each page mode has a renderer producing a complete HTML page as
//! `maud::Markup`: the listing of post cards, the single-post detail view,
//! and the static error views shown when a backend fetch fails.
//!
//! All rendering uses [maud](https://maud.lambda.xyz/) for compile-time HTML
//! generation with automatic XSS protection. Decoded post body markup is the
//! one value injected unescaped, by design; see [`detail`].

pub mod components;
pub mod detail;
pub mod error_page;
pub mod listing;
