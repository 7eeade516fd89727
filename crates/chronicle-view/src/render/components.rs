//! Shared HTML components used across all blog pages.
//!
//! These are maud functions that return `Markup` fragments for composition
//! into full pages. All dynamic values are escaped by maud; the single
//! deliberate exception (decoded post body markup) lives in the detail
//! renderer, not here.

use maud::{Markup, PreEscaped, html};

/// Inline CSS for all blog pages.
///
/// Flat, modern design. Spacing and subtle background shifts for hierarchy
/// rather than borders and shadows.
pub const PAGE_CSS: &str = r#"
*{margin:0;padding:0;box-sizing:border-box}
:root{--bg:#fafafa;--fg:#111;--fg2:#555;--fg3:#999;--accent:#0b66c3;--accent-hover:#094f97;--border:rgba(11,102,195,.15)}
body{font-family:Inter,-apple-system,BlinkMacSystemFont,"Segoe UI",Roboto,sans-serif;line-height:1.6;color:var(--fg);background:var(--bg);min-height:100vh;display:flex;flex-direction:column;align-items:center;padding:1.5rem 1rem}
main{max-width:720px;width:100%;flex:1}
a{color:var(--accent);text-decoration:none}
a:hover{text-decoration:underline}
img{max-width:100%;height:auto}

.blog-posts{display:flex;flex-direction:column;gap:1.5rem}
.blog-post-card{border:1px solid var(--border);border-radius:10px;overflow:hidden;background:#fff}
.post-image-container{width:100%;max-height:260px;overflow:hidden}
.post-image-preview{width:100%;height:100%;object-fit:cover;display:block}
.post-content{padding:1.25rem 1.5rem}
.post-meta{display:flex;gap:.75rem;align-items:center;font-size:.85rem;margin-bottom:.5rem}
.post-category{color:var(--accent);font-weight:600;text-transform:uppercase;letter-spacing:.04em}
.post-date{color:var(--fg3)}
.post-title{font-size:1.35rem;font-weight:700;line-height:1.3;letter-spacing:-.01em}
.post-title a{color:var(--fg)}
.post-title a:hover{color:var(--accent);text-decoration:none}
.post-preview{color:var(--fg2);margin:.6rem 0;line-height:1.65}
.read-more{font-size:.9rem;font-weight:500}

.no-posts{text-align:center;padding:3rem 1rem;color:var(--fg2)}

.blog-post-detail{background:#fff;border:1px solid var(--border);border-radius:10px;padding:1.75rem}
.post-header{margin-bottom:1.25rem}
.post-title-detail{font-size:1.75rem;font-weight:700;line-height:1.25;letter-spacing:-.02em;margin-top:.25rem}
.post-media-container{margin:1.25rem 0}
.post-image-full{width:100%;border-radius:8px;display:block}
.post-video-full{width:100%;border-radius:8px;display:block;background:#000}
.post-caption{font-size:.9rem;color:var(--fg3);margin-top:.5rem;text-align:center}
.post-text-content{font-size:1.05rem;line-height:1.75;margin:1rem 0}
.post-text-content h1,.post-text-content h2,.post-text-content h3{font-weight:700;margin:1.5rem 0 .75rem;letter-spacing:-.01em}
.post-text-content p{margin:.75rem 0}
.post-text-content ul,.post-text-content ol{margin:.75rem 0;padding-left:1.5rem}
.post-text-content li{margin:.3rem 0}
.post-text-content blockquote{border-left:3px solid var(--border);padding:.5rem 0 .5rem 1rem;margin:.75rem 0;color:var(--fg2)}
.post-footer{margin-top:1.5rem;padding-top:1rem;border-top:1px solid var(--border)}
.back-link{font-size:.9rem}

.error{text-align:center;padding:2.5rem 1rem;color:var(--fg2);line-height:1.8}
.error strong{color:var(--fg)}
.error-links{margin-top:1.25rem}

@media(prefers-color-scheme:dark){
:root{--bg:#0a0a0f;--fg:#e5e5e5;--fg2:#a0a0a0;--fg3:#666;--accent:#4da3ff;--accent-hover:#79bbff;--border:rgba(77,163,255,.2)}
.blog-post-card,.blog-post-detail{background:#111118}
.post-title a{color:var(--fg)}
}
"#;

/// Render the full HTML page shell with `<head>` and body content.
pub fn page_shell(title: &str, description: &str, og_type: &str, body_content: Markup, site_name: &str) -> Markup {
    html! {
        (maud::DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) " — " (site_name) }
                meta name="description" content=(description);

                meta property="og:title" content=(title);
                meta property="og:description" content=(description);
                meta property="og:site_name" content=(site_name);
                meta property="og:type" content=(og_type);

                style { (PreEscaped(PAGE_CSS)) }
            }
            body {
                main { (body_content) }
            }
        }
    }
}

/// Render the category + date line shown on cards and detail headers.
pub fn post_meta(category: &str, created_at: &str) -> Markup {
    html! {
        div class="post-meta" {
            span class="post-category" { (category) }
            span class="post-date" { (format_date(created_at)) }
        }
    }
}

/// Format an upstream `created_at` value as a long en-US date
/// ("January 15, 2024").
///
/// The backend does not commit to one serialization, so this tries RFC 3339,
/// naive datetimes with `T` or space separators, and a bare date before
/// giving the raw value back unchanged.
pub fn format_date(raw: &str) -> String {
    const DISPLAY: &str = "%B %-d, %Y";

    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(raw) {
        return dt.format(DISPLAY).to_string();
    }
    if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format(DISPLAY).to_string();
    }
    if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f") {
        return dt.format(DISPLAY).to_string();
    }
    if let Ok(d) = chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return d.format(DISPLAY).to_string();
    }
    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- format_date() tests --

    #[test]
    fn format_date_rfc3339() {
        assert_eq!(format_date("2024-01-15T10:30:00Z"), "January 15, 2024");
        assert_eq!(format_date("2024-01-15T10:30:00+02:00"), "January 15, 2024");
    }

    #[test]
    fn format_date_naive_datetime() {
        assert_eq!(format_date("2024-03-05T08:00:00"), "March 5, 2024");
        assert_eq!(format_date("2024-03-05T08:00:00.123456"), "March 5, 2024");
    }

    #[test]
    fn format_date_space_separator() {
        assert_eq!(format_date("2024-12-01 23:59:59"), "December 1, 2024");
    }

    #[test]
    fn format_date_bare_date() {
        assert_eq!(format_date("2024-07-04"), "July 4, 2024");
    }

    #[test]
    fn format_date_no_day_padding() {
        assert_eq!(format_date("2024-02-09"), "February 9, 2024");
    }

    #[test]
    fn format_date_unparseable_passes_through() {
        assert_eq!(format_date("yesterday"), "yesterday");
        assert_eq!(format_date(""), "");
    }

    // -- post_meta() tests --

    #[test]
    fn post_meta_escapes_category() {
        let html = post_meta("<script>alert(1)</script>", "2024-01-15").into_string();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn post_meta_shows_formatted_date() {
        let html = post_meta("News", "2024-01-15").into_string();
        assert!(html.contains("January 15, 2024"));
        assert!(html.contains("News"));
    }

    // -- page_shell() tests --

    #[test]
    fn page_shell_includes_title_and_site_name() {
        let html = page_shell("Post", "desc", "article", html! { p { "x" } }, "Chronicle")
            .into_string();
        assert!(html.contains("<title>Post — Chronicle</title>"));
        assert!(html.contains("og:type"));
        assert!(html.contains("<p>x</p>"));
    }

    #[test]
    fn page_shell_escapes_title() {
        let html = page_shell("<b>t</b>", "d", "website", html! {}, "S").into_string();
        assert!(html.contains("&lt;b&gt;t&lt;/b&gt;"));
    }
}
