//! Catalog content formatting.
//!
//! Turns semi-structured `Key: value Key: value` text into bold-keyed blocks,
//! or into a bulleted sentence list when no keys are present. Keywords are
//! emphasized in both cases.

mod highlight;

pub use highlight::highlight_keywords;

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

use crate::constants::formatting::{BULLET, FALLBACK_CONTENT};

/// Regex matching candidate keys such as `Item Name:` or `Color:`.
#[allow(clippy::expect_used)]
static RE_KEY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\w[\w\s\d]*:").expect("valid regex: RE_KEY")
});

/// Regex matching a sentence terminator and the whitespace after it.
#[allow(clippy::expect_used)]
static RE_SENTENCE_BREAK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[.!?]\s+").expect("valid regex: RE_SENTENCE_BREAK")
});

/// Turn optional cell content into the text handed to the formatter.
///
/// Absent or blank content becomes [`FALLBACK_CONTENT`].
pub fn coerce_content(content: Option<&str>) -> Cow<'_, str> {
    match content {
        Some(text) if !text.trim().is_empty() => Cow::Borrowed(text),
        _ => Cow::Borrowed(FALLBACK_CONTENT),
    }
}

/// Format raw catalog content into markup.
///
/// Output uses `**key**` for keys, emphasis spans for keywords and `&bull;`
/// for sentence bullets.
pub fn format_content(raw: &str) -> String {
    let keys: Vec<&str> = RE_KEY.find_iter(raw).map(|m| m.as_str()).collect();

    if keys.is_empty() {
        return format_sentences(raw);
    }

    match key_splitter(&keys) {
        Ok(splitter) => format_pairs(raw, &splitter),
        Err(e) => {
            tracing::warn!("Could not build key pattern for {} keys: {e}", keys.len());
            highlight_keywords(raw)
        }
    }
}

/// Alternation of the discovered key literals, in discovery order.
fn key_splitter(keys: &[&str]) -> Result<Regex, regex::Error> {
    let mut seen = Vec::with_capacity(keys.len());
    for key in keys {
        if !seen.contains(key) {
            seen.push(*key);
        }
    }

    let pattern = seen
        .iter()
        .map(|key| regex::escape(key))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&pattern)
}

/// Pair every key occurrence with the text up to the next occurrence.
///
/// Text before the first key is dropped.
fn format_pairs(raw: &str, splitter: &Regex) -> String {
    let segments = split_around(raw, splitter);

    let mut lines = Vec::new();
    let mut i = 1;
    while i + 1 < segments.len() {
        let key = segments[i].trim();
        let value = segments[i + 1].trim();
        lines.push(format!("**{key}** {}", highlight_keywords(value)));
        i += 2;
    }

    lines.join("\n\n")
}

/// Split `text` around matches of `re`, keeping the matches.
///
/// Produces `[before, match, between, match, ..., after]`, the same shape as
/// a split with a capturing group.
fn split_around<'a>(text: &'a str, re: &Regex) -> Vec<&'a str> {
    let mut segments = Vec::new();
    let mut last = 0;
    for m in re.find_iter(text) {
        segments.push(&text[last..m.start()]);
        segments.push(m.as_str());
        last = m.end();
    }
    segments.push(&text[last..]);
    segments
}

/// Bullet each sentence, then emphasize keywords over the whole list.
fn format_sentences(raw: &str) -> String {
    let bullets = split_sentences(raw)
        .into_iter()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| format!("{BULLET} {s}"))
        .collect::<Vec<_>>()
        .join("\n");

    highlight_keywords(&bullets)
}

/// Split at whitespace that follows `.`, `!` or `?`, keeping the punctuation.
fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    for m in RE_SENTENCE_BREAK.find_iter(text) {
        // terminator is a single ASCII byte
        sentences.push(&text[start..=m.start()]);
        start = m.end();
    }
    sentences.push(&text[start..]);
    sentences
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use crate::constants::formatting::HIGHLIGHT_OPEN;

    fn wrapped(s: &str) -> String {
        format!("{HIGHLIGHT_OPEN}{s}</span>")
    }

    #[test]
    fn test_keys_rendered_bold_in_order() {
        let out = format_content("Color: Blue; Size: Large; Weight: 2 kg");
        assert_eq!(out, "**Color:** Blue;\n\n**Size:** Large;\n\n**Weight:** 2 kg");
    }

    #[test]
    fn test_key_absorbs_preceding_words() {
        let out = format_content("Color: Blue Size: Large");
        assert_eq!(out, "**Color:** \n\n**Blue Size:** Large");
    }

    #[test]
    fn test_item_name_and_value_blocks() {
        let out = format_content("Item Name: Red Mug. Value: 25");
        let blocks: Vec<&str> = out.split("\n\n").collect();
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0], "**Item Name:** Red Mug.");
        assert_eq!(blocks[1], "**Value:** 25");
    }

    #[test]
    fn test_keyword_inside_value_is_wrapped() {
        let out = format_content("Description: the item name is printed on the Unit");
        assert_eq!(
            out,
            format!(
                "**Description:** the {} is printed on the {}",
                wrapped("item name"),
                wrapped("Unit")
            )
        );
    }

    #[test]
    fn test_keys_are_not_highlighted() {
        let out = format_content("Unit: 1 piece");
        assert_eq!(out, "**Unit:** 1 piece");
    }

    #[test]
    fn test_text_before_first_key_dropped() {
        let out = format_content("!!! Brand: Acme");
        assert_eq!(out, "**Brand:** Acme");
    }

    #[test]
    fn test_repeated_key_splits_every_occurrence() {
        let out = format_content("Bullet Point 1: Soft. Bullet Point 2: Warm. Bullet Point 1: again");
        let blocks: Vec<&str> = out.split("\n\n").collect();
        assert_eq!(blocks.len(), 3);
        assert_eq!(blocks[0], "**Bullet Point 1:** Soft.");
        assert_eq!(blocks[2], "**Bullet Point 1:** again");
    }

    #[test]
    fn test_trailing_key_has_empty_value() {
        let out = format_content("Brand: Acme, Notes:");
        assert_eq!(out, "**Brand:** Acme,\n\n**Notes:** ");
    }

    #[test]
    fn test_sentences_become_bullets() {
        let out = format_content("This is great. Buy it now!");
        assert_eq!(out, "&bull; This is great.\n&bull; Buy it now!");
    }

    #[test]
    fn test_sentence_keywords_highlighted_across_list() {
        let out = format_content("Unit cost is 5. Unity is not a unit.");
        assert_eq!(
            out,
            format!(
                "&bull; {} cost is 5.\n&bull; Unity is not a {}.",
                wrapped("Unit"),
                wrapped("unit")
            )
        );
    }

    #[test]
    fn test_sentence_split_requires_whitespace() {
        let out = format_content("Version 2.5 ships today?  Yes");
        assert_eq!(out, "&bull; Version 2.5 ships today?\n&bull; Yes");
    }

    #[test]
    fn test_blank_input_yields_empty_output() {
        assert_eq!(format_content(""), "");
        assert_eq!(format_content("   "), "");
    }

    #[test]
    fn test_format_is_deterministic() {
        let input = "Item Name: Lamp Bullet Point 1: Bright Value: 12.5 Unit: Count";
        assert_eq!(format_content(input), format_content(input));
    }

    #[test]
    fn test_coerce_content_fallback() {
        assert_eq!(coerce_content(None), FALLBACK_CONTENT);
        assert_eq!(coerce_content(Some("")), FALLBACK_CONTENT);
        assert_eq!(coerce_content(Some("  \n")), FALLBACK_CONTENT);
        assert_eq!(coerce_content(Some("Color: Red")), "Color: Red");
    }

    #[test]
    fn test_fallback_formats_to_single_bullet() {
        let text = coerce_content(None);
        assert_eq!(format_content(&text), format!("&bull; {FALLBACK_CONTENT}"));
    }
}
