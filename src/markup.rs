//! Rendering of formatter markup.
//!
//! The formatter emits a small inline dialect: `**strong**`, keyword spans
//! (`<span style="...">text</span>`) and the `&bull;` entity. This module
//! turns it into styled terminal text, or strips it for plain output.

use std::sync::LazyLock;

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
};
use regex::Regex;

use crate::constants::formatting::BULLET_GLYPH;

/// Regex matching one markup element: strong text, a styled span, or a bullet.
///
/// Strong text may wrap a single line break but never a blank line.
#[allow(clippy::expect_used)]
static RE_MARKUP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\*\*((?:[^\n]|\n[^\n])+?)\*\*|<span style="[^"]*">(.*?)</span>|&bull;"#)
        .expect("valid regex: RE_MARKUP")
});

/// How a piece of text is emphasized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    /// Unstyled text.
    Plain,
    /// Bold text, used for keys.
    Strong,
    /// Highlighted keyword.
    Keyword,
}

impl Emphasis {
    /// Terminal style for this emphasis.
    pub fn style(self) -> Style {
        match self {
            Self::Plain => Style::default(),
            Self::Strong => Style::default().add_modifier(Modifier::BOLD),
            Self::Keyword => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        }
    }
}

/// A run of text with a single emphasis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// The visible text.
    pub text: String,
    /// Emphasis applied to the text.
    pub emphasis: Emphasis,
}

impl Segment {
    fn new(text: &str, emphasis: Emphasis) -> Self {
        Self { text: text.to_string(), emphasis }
    }
}

/// Parse markup into lines of segments.
///
/// Emphasis that spans a line break continues on the next line.
pub fn parse(markup: &str) -> Vec<Vec<Segment>> {
    let mut runs: Vec<(&str, Emphasis)> = Vec::new();
    let mut last = 0;

    for caps in RE_MARKUP.captures_iter(markup) {
        let Some(whole) = caps.get(0) else { continue };
        runs.push((&markup[last..whole.start()], Emphasis::Plain));

        if let Some(strong) = caps.get(1) {
            runs.push((strong.as_str(), Emphasis::Strong));
        } else if let Some(keyword) = caps.get(2) {
            runs.push((keyword.as_str(), Emphasis::Keyword));
        } else {
            runs.push((BULLET_GLYPH, Emphasis::Plain));
        }
        last = whole.end();
    }
    runs.push((&markup[last..], Emphasis::Plain));

    let mut lines = vec![Vec::new()];
    for (text, emphasis) in runs {
        for (i, piece) in text.split('\n').enumerate() {
            if i > 0 {
                lines.push(Vec::new());
            }
            if piece.is_empty() {
                continue;
            }
            if let Some(line) = lines.last_mut() {
                push_merged(line, piece, emphasis);
            }
        }
    }
    lines
}

/// Append to a line, extending the previous segment when emphasis matches.
fn push_merged(line: &mut Vec<Segment>, text: &str, emphasis: Emphasis) {
    match line.last_mut() {
        Some(prev) if prev.emphasis == emphasis => prev.text.push_str(text),
        _ => line.push(Segment::new(text, emphasis)),
    }
}

/// Styled terminal text for markup.
pub fn to_text(markup: &str) -> Text<'static> {
    let lines: Vec<Line<'static>> = parse(markup)
        .into_iter()
        .map(|segments| {
            Line::from(
                segments
                    .into_iter()
                    .map(|seg| Span::styled(seg.text, seg.emphasis.style()))
                    .collect::<Vec<_>>(),
            )
        })
        .collect();
    Text::from(lines)
}

/// Markup with all emphasis removed.
pub fn to_plain(markup: &str) -> String {
    parse(markup)
        .into_iter()
        .map(|segments| segments.into_iter().map(|seg| seg.text).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
