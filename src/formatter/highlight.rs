//! Keyword emphasis shared by the structured and raw content views.

use lazy_static::lazy_static;
use regex::Regex;

use crate::constants::formatting::{HIGHLIGHT_TEMPLATE, KEYWORDS};

lazy_static! {
    /// One whole-word, case-insensitive pattern per keyword, in keyword order.
    #[allow(clippy::expect_used)]
    static ref KEYWORD_PATTERNS: Vec<Regex> = KEYWORDS
        .iter()
        .map(|keyword| {
            Regex::new(&format!(r"(?i)\b({})\b", regex::escape(keyword)))
                .expect("valid regex: keyword pattern")
        })
        .collect();
}

/// Wrap every whole-word occurrence of each keyword in emphasis markup.
///
/// Keywords are applied one after another, each pass scanning the output of
/// the previous one. The matched text keeps its original casing.
pub fn highlight_keywords(text: &str) -> String {
    KEYWORD_PATTERNS
        .iter()
        .fold(text.to_string(), |acc, pattern| {
            pattern.replace_all(&acc, HIGHLIGHT_TEMPLATE).into_owned()
        })
}
