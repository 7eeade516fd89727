//! Text utilities for stored post content.
//!
//! Post bodies arrive from the backend with their markup HTML-entity-escaped
//! anywhere from zero to several times (the editor re-escapes on every save).
//! Rendering therefore needs a decoder that can unwind an unknown number of
//! escaping layers, plus a plain-text preview extractor for listing cards.
//!
//! The two call sites intentionally decode differently: detail rendering uses
//! the bounded fixed-point loop in [`decode_to_fixed_point`], while listing
//! previews in [`preview_text`] apply exactly two flat passes. Both behaviors
//! are load-bearing for already-stored content and must not be unified.

use std::sync::LazyLock;

use regex::Regex;

/// Upper bound on decoding passes in [`decode_to_fixed_point`].
const MAX_DECODE_PASSES: usize = 5;

/// Longest character reference considered, in bytes between `&` and `;`.
/// Numeric references top out at 8 (`#x10FFFF`); named ones are shorter.
const MAX_REFERENCE_LEN: usize = 24;

/// Regex matching markup tags for preview stripping. No nesting awareness;
/// anything bracket-shaped goes.
static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("tag regex should compile"));

/// Regex collapsing whitespace runs (including non-breaking spaces from
/// decoded `&nbsp;`) to single spaces.
static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace regex should compile"));

/// Apply a single entity-decoding pass.
///
/// One left-to-right scan. A reference decoded in this pass is never
/// re-examined in the same pass, so `&amp;lt;` becomes `&lt;` here and only
/// reaches `<` on a second pass. A `&` that does not start a recognizable
/// reference (no `;` nearby, unknown name, invalid code point) passes through
/// verbatim.
pub fn decode_entities(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let tail = &rest[amp..];

        let reference = tail[1..]
            .find(';')
            .filter(|&semi| semi > 0 && semi <= MAX_REFERENCE_LEN)
            .map(|semi| &tail[1..=semi]);

        let decoded = reference.and_then(|body| match body.strip_prefix('#') {
            Some(numeric) => decode_numeric(numeric),
            None => decode_named(body),
        });

        match (reference, decoded) {
            (Some(body), Some(c)) => {
                out.push(c);
                rest = &tail[body.len() + 2..];
            }
            _ => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

/// Decode entities until the string stops changing, capped at 5 passes.
///
/// The cap bounds worst-case work on adversarial input; if the value is still
/// changing after the 5th pass the 5th-pass result is returned as-is. That is
/// documented lossy behavior, not an error.
pub fn decode_to_fixed_point(input: &str) -> String {
    let mut current = input.to_string();
    for _ in 0..MAX_DECODE_PASSES {
        let next = decode_entities(&current);
        if next == current {
            return current;
        }
        current = next;
    }
    current
}

/// Extract a plain-text preview of at most `word_limit` words.
///
/// Decodes exactly twice (flat, not fixed-point), strips tags to spaces,
/// collapses whitespace, and truncates on a word boundary with a bare `...`
/// appended. Short input comes back verbatim with no ellipsis; empty or
/// markup-only input comes back empty.
pub fn preview_text(text: &str, word_limit: usize) -> String {
    let decoded = decode_entities(&decode_entities(text));
    let stripped = TAG_RE.replace_all(&decoded, " ");
    let collapsed = WHITESPACE_RE.replace_all(&stripped, " ");
    let plain = collapsed.trim();

    if plain.is_empty() {
        return String::new();
    }

    let words: Vec<&str> = plain.split(' ').collect();
    if words.len() <= word_limit {
        return plain.to_string();
    }

    format!("{}...", words[..word_limit].join(" "))
}

/// Decode a named character reference (the body between `&` and `;`).
fn decode_named(name: &str) -> Option<char> {
    let c = match name {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        "nbsp" => '\u{a0}',
        "ndash" => '\u{2013}',
        "mdash" => '\u{2014}',
        "hellip" => '\u{2026}',
        "lsquo" => '\u{2018}',
        "rsquo" => '\u{2019}',
        "ldquo" => '\u{201c}',
        "rdquo" => '\u{201d}',
        "bull" => '\u{2022}',
        "middot" => '\u{b7}',
        "copy" => '\u{a9}',
        "reg" => '\u{ae}',
        "trade" => '\u{2122}',
        _ => return None,
    };
    Some(c)
}

/// Decode a numeric character reference body (after the `#`).
fn decode_numeric(body: &str) -> Option<char> {
    let code = if let Some(hex) = body.strip_prefix(['x', 'X']) {
        u32::from_str_radix(hex, 16).ok()?
    } else {
        body.parse::<u32>().ok()?
    };
    char::from_u32(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Encode a string `n` times the way the upstream editor does.
    fn encode_n(s: &str, n: usize) -> String {
        let mut out = s.to_string();
        for _ in 0..n {
            out = out
                .replace('&', "&amp;")
                .replace('<', "&lt;")
                .replace('>', "&gt;")
                .replace('"', "&quot;");
        }
        out
    }

    // -- decode_entities() single-pass tests --

    #[test]
    fn decode_empty() {
        assert_eq!(decode_entities(""), "");
    }

    #[test]
    fn decode_plain_text_unchanged() {
        assert_eq!(decode_entities("hello world"), "hello world");
    }

    #[test]
    fn decode_basic_named() {
        assert_eq!(decode_entities("&lt;b&gt;"), "<b>");
        assert_eq!(decode_entities("&quot;hi&quot;"), "\"hi\"");
        assert_eq!(decode_entities("&apos;"), "'");
        assert_eq!(decode_entities("fish &amp; chips"), "fish & chips");
    }

    #[test]
    fn decode_numeric_decimal() {
        assert_eq!(decode_entities("&#60;b&#62;"), "<b>");
        assert_eq!(decode_entities("&#39;"), "'");
    }

    #[test]
    fn decode_numeric_hex() {
        assert_eq!(decode_entities("&#x3C;"), "<");
        assert_eq!(decode_entities("&#X3E;"), ">");
        assert_eq!(decode_entities("&#x1F600;"), "\u{1F600}");
    }

    #[test]
    fn decode_single_pass_does_not_cascade() {
        // One DOM-equivalent pass peels exactly one layer.
        assert_eq!(decode_entities("&amp;lt;"), "&lt;");
        assert_eq!(decode_entities("&amp;amp;"), "&amp;");
        assert_eq!(decode_entities("&amp;#60;"), "&#60;");
    }

    #[test]
    fn decode_unknown_reference_passes_through() {
        assert_eq!(decode_entities("&bogus;"), "&bogus;");
        assert_eq!(decode_entities("a & b"), "a & b");
        assert_eq!(decode_entities("&"), "&");
        assert_eq!(decode_entities("&;"), "&;");
    }

    #[test]
    fn decode_missing_semicolon_passes_through() {
        assert_eq!(decode_entities("&amp"), "&amp");
        assert_eq!(decode_entities("&lt b"), "&lt b");
    }

    #[test]
    fn decode_invalid_code_point_passes_through() {
        // Surrogate range is not a valid char.
        assert_eq!(decode_entities("&#xD800;"), "&#xD800;");
        assert_eq!(decode_entities("&#99999999999;"), "&#99999999999;");
    }

    #[test]
    fn decode_overlong_reference_passes_through() {
        let long = format!("&{};", "a".repeat(40));
        assert_eq!(decode_entities(&long), long);
    }

    #[test]
    fn decode_ampersand_before_real_reference() {
        assert_eq!(decode_entities("&&lt;"), "&<");
        assert_eq!(decode_entities("&x&lt;"), "&x<");
    }

    #[test]
    fn decode_typographic_names() {
        assert_eq!(decode_entities("a&nbsp;b"), "a\u{a0}b");
        assert_eq!(decode_entities("&hellip;"), "\u{2026}");
        assert_eq!(decode_entities("&copy; 2024"), "\u{a9} 2024");
    }

    #[test]
    fn decode_preserves_surrounding_unicode() {
        assert_eq!(decode_entities("caf\u{e9} &amp; th\u{e9}"), "caf\u{e9} & th\u{e9}");
    }

    // -- decode_to_fixed_point() tests --

    #[test]
    fn fixed_point_empty() {
        assert_eq!(decode_to_fixed_point(""), "");
    }

    #[test]
    fn fixed_point_already_stable() {
        let s = "plain text with <b>markup</b> and no entities";
        assert_eq!(decode_to_fixed_point(s), s);
    }

    #[test]
    fn fixed_point_single_encoded() {
        assert_eq!(decode_to_fixed_point("&lt;b&gt;hi&lt;/b&gt;"), "<b>hi</b>");
    }

    #[test]
    fn fixed_point_double_encoded() {
        assert_eq!(
            decode_to_fixed_point("&amp;lt;b&amp;gt;hi&amp;lt;/b&amp;gt;"),
            "<b>hi</b>"
        );
    }

    #[test]
    fn fixed_point_recovers_up_to_five_layers() {
        let original = "<ul><li>\"one\" & two</li></ul>";
        for n in 0..=5 {
            assert_eq!(decode_to_fixed_point(&encode_n(original, n)), original);
        }
    }

    #[test]
    fn fixed_point_six_layers_stops_one_short() {
        // Five passes peel five layers; the sixth stays. Documented lossy cap.
        assert_eq!(decode_to_fixed_point(&encode_n("<", 6)), "&lt;");
    }

    #[test]
    fn fixed_point_is_idempotent() {
        let once = decode_to_fixed_point(&encode_n("<b>bold</b>", 3));
        assert_eq!(decode_to_fixed_point(&once), once);
    }

    // -- preview_text() tests --

    #[test]
    fn preview_empty_input() {
        assert_eq!(preview_text("", 50), "");
        assert_eq!(preview_text("", 0), "");
    }

    #[test]
    fn preview_markup_only_input() {
        assert_eq!(preview_text("<p></p><br><div></div>", 50), "");
    }

    #[test]
    fn preview_short_text_verbatim() {
        assert_eq!(preview_text("just a few words", 50), "just a few words");
    }

    #[test]
    fn preview_exact_limit_no_ellipsis() {
        assert_eq!(preview_text("one two three", 3), "one two three");
    }

    #[test]
    fn preview_truncates_with_ellipsis() {
        assert_eq!(preview_text("one two three four", 3), "one two three...");
    }

    #[test]
    fn preview_never_exceeds_word_limit() {
        let text = "word ".repeat(200);
        let preview = preview_text(&text, 50);
        let words: Vec<&str> = preview.split(' ').collect();
        assert_eq!(words.len(), 50);
        assert!(preview.ends_with("..."));
    }

    #[test]
    fn preview_zero_limit() {
        assert_eq!(preview_text("some words here", 0), "...");
    }

    #[test]
    fn preview_strips_tags_to_spaces() {
        assert_eq!(preview_text("one<br>two", 50), "one two");
        assert_eq!(
            preview_text("<p>Hello <strong>world</strong></p>", 50),
            "Hello world"
        );
    }

    #[test]
    fn preview_collapses_whitespace() {
        assert_eq!(preview_text("a   b\n\nc\td", 50), "a b c d");
    }

    #[test]
    fn preview_decodes_nbsp_as_space() {
        assert_eq!(preview_text("a&nbsp;b", 50), "a b");
    }

    #[test]
    fn preview_decodes_exactly_twice() {
        // Double-encoded markup is fully stripped...
        assert_eq!(preview_text(&encode_n("<b>bold words</b>", 2), 50), "bold words");
        // ...but a third layer survives as literal text (flat double-decode,
        // not the fixed-point loop).
        assert_eq!(preview_text(&encode_n("<", 3), 50), "&lt;");
    }

    #[test]
    fn preview_word_count_after_stripping() {
        let text = "<h1>Title</h1><p>one two three four five</p>";
        assert_eq!(preview_text(text, 4), "Title one two three...");
    }
}
