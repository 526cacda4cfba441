use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem},
    Frame,
};
use unicode_width::UnicodeWidthChar;

use crate::app::{App, Focus};
use crate::ui::create_titled_block;

pub fn draw_record_list(f: &mut Frame, app: &mut App, area: Rect) {
    let is_focused = app.focus == Focus::Records;
    let selected = app.record_list_state.selected();
    // borders plus the "> " prefix
    let id_width = usize::from(area.width.saturating_sub(4));

    let items: Vec<ListItem> = match &app.store {
        Some(store) => app
            .visible
            .iter()
            .enumerate()
            .filter_map(|(row, &idx)| store.ids().get(idx).map(|id| (row, id)))
            .map(|(row, id)| {
                let is_selected = Some(row) == selected;
                let (prefix, text_style) = if is_selected {
                    let fg = if is_focused { Color::Yellow } else { Color::White };
                    ("> ", Style::default().fg(fg).add_modifier(Modifier::BOLD))
                } else {
                    ("  ", Style::default().fg(Color::White))
                };

                ListItem::new(Line::from(vec![
                    Span::raw(prefix),
                    Span::styled(truncate_to_width(id, id_width), text_style),
                ]))
            })
            .collect(),
        None => Vec::new(),
    };

    let title = if app.search_query.is_empty() {
        "Select a Product".to_string()
    } else {
        format!("Select a Product [{}]", app.search_query)
    };

    let list = List::new(items)
        .block(create_titled_block(&title, is_focused))
        .highlight_style(Style::default().bg(Color::Rgb(80, 80, 120)));

    f.render_stateful_widget(list, area, &mut app.record_list_state);
}

/// Cut `text` to `width` terminal columns, marking the cut with an ellipsis.
fn truncate_to_width(text: &str, width: usize) -> String {
    let total: usize = text.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= width {
        return text.to_string();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('\u{2026}');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_ids_untouched() {
        assert_eq!(truncate_to_width("12345", 10), "12345");
    }

    #[test]
    fn long_ids_end_with_ellipsis() {
        assert_eq!(truncate_to_width("1234567890", 5), "1234\u{2026}");
    }

    #[test]
    fn wide_chars_counted_by_columns() {
        assert_eq!(truncate_to_width("商品商品", 5), "商品\u{2026}");
    }
}
