//! User interface components.
//!
//! Provides TUI widgets and drawing functions for the application's
//! terminal-based user interface using ratatui.

mod details;
mod record_list;

pub use details::draw_details;
pub use record_list::draw_record_list;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, Focus};
use crate::constants::ui::SIDEBAR_WIDTH;

/// Render the full application UI to the terminal frame.
pub fn draw(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(3), // Command/status bar at bottom
        ])
        .split(f.size());

    if let Some(error) = &app.load_error {
        draw_load_error(f, app, error, chunks[0]);
    } else {
        let panes = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(1)])
            .split(chunks[0]);
        draw_record_list(f, app, panes[0]);
        draw_details(f, app, panes[1]);
    }

    draw_command_bar(f, app, chunks[1]);

    // Status/info modal (blocking)
    if let Some(status) = &app.status_message {
        draw_message(f, "Info", status, Color::Green);
        return;
    }
    if let Some(error) = &app.error_message {
        draw_message(f, "Error", error, Color::Red);
        return;
    }

    if app.show_help {
        draw_help_modal(f);
    }
}

fn draw_command_bar(f: &mut Frame, app: &App, area: Rect) {
    let (title, border_color) = if app.search_active {
        ("Search Records", Color::Cyan)
    } else {
        ("Commands/Status", Color::Yellow)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(Span::styled(title, Style::default().fg(border_color)));
    let inner_area = block.inner(area);
    f.render_widget(block, area);

    if app.search_active {
        let search = Paragraph::new(format!(" /{}", app.search_query))
            .style(Style::default().fg(Color::Cyan));
        f.render_widget(search, inner_area);
        return;
    }

    let mut text = create_help_text(&[
        ("j/k", "Move"),
        ("Tab", "Focus"),
        ("/", "Search"),
        ("y", "Copy image"),
        ("r", "Reload"),
        ("?", "Help"),
        ("q", "Quit"),
    ]);

    let focus = match app.focus {
        Focus::Records => "records",
        Focus::Formatted => "formatted",
        Focus::Raw => "raw",
    };
    let count = app.store.as_ref().map_or(0, |s| s.ids().len());
    let filter = if app.search_query.is_empty() {
        String::new()
    } else {
        format!(" | filter: {} ({} of {count})", app.search_query, app.visible.len())
    };
    text.push(Span::styled(
        format!(" | Focus: {focus}{filter}"),
        Style::default().fg(Color::Gray),
    ));

    f.render_widget(
        Paragraph::new(Line::from(text)).style(Style::default().fg(Color::Gray)),
        inner_area,
    );
}

/// Build styled help text spans from key-description pairs for the command bar.
pub fn create_help_text<'a>(commands: &[(&'a str, &'a str)]) -> Vec<Span<'a>> {
    let mut text = vec![Span::raw(" ")]; // Start with padding

    for (i, (key, description)) in commands.iter().enumerate() {
        if i > 0 {
            text.push(Span::raw(" | "));
        }
        text.push(Span::styled(*key, Style::default().fg(Color::Yellow)));
        text.push(Span::raw(format!(" {description}")));
    }

    text
}

/// Bordered block whose title and border light up when focused.
pub fn create_titled_block(title: &str, is_focused: bool) -> Block<'_> {
    let title_style = if is_focused {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let border_style = if is_focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };

    Block::default()
        .title(Span::styled(title, title_style))
        .borders(Borders::ALL)
        .border_style(border_style)
}

fn draw_load_error(f: &mut Frame, app: &App, error: &str, area: Rect) {
    let cwd = std::env::current_dir()
        .map(|p| p.display().to_string())
        .unwrap_or_default();

    let lines = vec![
        Line::from(Span::styled(
            "Product Details Viewer",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(format!("Error: {error}"), Style::default().fg(Color::Red))),
        Line::from(""),
        Line::from(Span::styled(
            "Please make sure the CSV file exists and has the required columns.",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(format!("- Configured path: {}", app.config.catalog_path.display())),
        Line::from(format!("- Working directory: {cwd}")),
        Line::from("- Set CATALOG_CSV or pass the path as the first argument, then press r"),
    ];

    let block = Block::default()
        .title(Span::styled("Catalog", Style::default().fg(Color::Red)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));

    f.render_widget(Paragraph::new(lines).block(block).wrap(Wrap { trim: true }), area);
}

fn draw_message(f: &mut Frame, title: &str, message: &str, color: Color) {
    let size = f.size();

    let width = 60.min(size.width.saturating_sub(4));
    let height = 7.min(size.height);
    let area = Rect {
        x: (size.width.saturating_sub(width)) / 2,
        y: (size.height.saturating_sub(height)) / 2,
        width,
        height,
    };

    let block = Block::default()
        .title(Span::styled(title, Style::default().fg(color).add_modifier(Modifier::BOLD)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .style(Style::default().bg(Color::Black));

    let text = Paragraph::new(message)
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    f.render_widget(Clear, area);
    f.render_widget(block, area);

    let inner_area = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Space after title
            Constraint::Min(1),
            Constraint::Length(1), // Dismiss hint
        ])
        .margin(1)
        .split(area);

    f.render_widget(text, inner_area[1]);

    let hint = Paragraph::new("Press any key to dismiss")
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);
    f.render_widget(hint, inner_area[2]);
}

fn draw_help_modal(f: &mut Frame) {
    let entries: &[(&str, &str)] = &[
        ("j / Down", "Next record (or scroll focused pane)"),
        ("k / Up", "Previous record (or scroll focused pane)"),
        ("PgDn / PgUp", "Move a page"),
        ("g / G", "First / last record"),
        ("Tab", "Cycle focus: records, formatted, raw"),
        ("/", "Search sample ids"),
        ("Enter / Esc", "Keep / clear search"),
        ("y", "Copy image reference"),
        ("r", "Reload catalog file"),
        ("? / F1", "Toggle help"),
        ("q / Ctrl-C", "Quit"),
    ];

    let size = f.size();
    let width = 56.min(size.width.saturating_sub(4));
    #[allow(clippy::cast_possible_truncation)]
    let height = (entries.len() as u16 + 4).min(size.height);
    let area = Rect {
        x: (size.width.saturating_sub(width)) / 2,
        y: (size.height.saturating_sub(height)) / 2,
        width,
        height,
    };

    let mut lines = vec![Line::from("")];
    lines.extend(entries.iter().map(|(key, desc)| {
        Line::from(vec![
            Span::styled(format!("  {key:<14}"), Style::default().fg(Color::Yellow)),
            Span::raw(*desc),
        ])
    }));

    let block = Block::default()
        .title(Span::styled("Help", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .style(Style::default().bg(Color::Black));

    f.render_widget(Clear, area);
    f.render_widget(Paragraph::new(lines).block(block), area);
}
