use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap},
    Frame,
};

use crate::app::{App, DetailView, Focus};
use crate::constants::ui::{DESCRIPTION_PERCENT, IMAGE_PANEL_PERCENT};
use crate::markup;
use crate::ui::create_titled_block;

pub fn draw_details(f: &mut Frame, app: &App, area: Rect) {
    if let Some(error) = &app.detail_error {
        let text = Paragraph::new(error.as_str())
            .style(Style::default().fg(Color::Red))
            .wrap(Wrap { trim: true })
            .block(create_titled_block("Error", false));
        f.render_widget(text, area);
        return;
    }

    let Some(detail) = &app.detail else {
        let text = Paragraph::new("No product selected.")
            .style(Style::default().fg(Color::DarkGray))
            .block(create_titled_block("Details", false));
        f.render_widget(text, area);
        return;
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Percentage(DESCRIPTION_PERCENT),
            Constraint::Min(6),
        ])
        .split(area);

    let header = Paragraph::new(Line::from(vec![
        Span::raw(" Details for Product: "),
        Span::styled(
            detail.id.as_str(),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
    ]));
    f.render_widget(header, rows[0]);

    draw_descriptions(f, app, detail, rows[1]);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(IMAGE_PANEL_PERCENT), Constraint::Min(10)])
        .split(rows[2]);

    draw_image_panel(f, detail, bottom[0]);
    draw_field_table(f, detail, bottom[1]);
}

fn draw_descriptions(f: &mut Frame, app: &App, detail: &DetailView, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let formatted = Paragraph::new(markup::to_text(&detail.formatted))
        .block(create_titled_block(
            "Formatted Description",
            app.focus == Focus::Formatted,
        ))
        .wrap(Wrap { trim: false })
        .scroll((app.formatted_scroll, 0));
    f.render_widget(formatted, columns[0]);

    let raw = Paragraph::new(markup::to_text(&detail.highlighted_raw))
        .block(create_titled_block(
            "Raw Content (with Highlighting)",
            app.focus == Focus::Raw,
        ))
        .wrap(Wrap { trim: false })
        .scroll((app.raw_scroll, 0));
    f.render_widget(raw, columns[1]);
}

fn draw_image_panel(f: &mut Frame, detail: &DetailView, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            detail.image.kind(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(detail.image.as_str(), Style::default().fg(Color::Cyan))),
        Line::from(""),
        Line::from(Span::styled(
            format!("ID: {}", detail.id),
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled("y: copy reference", Style::default().fg(Color::DarkGray))),
    ];

    let panel = Paragraph::new(lines)
        .block(create_titled_block("Product Image", false))
        .wrap(Wrap { trim: false });
    f.render_widget(panel, area);
}

fn draw_field_table(f: &mut Frame, detail: &DetailView, area: Rect) {
    let name_width = detail
        .fields
        .iter()
        .map(|(name, _)| name.chars().count())
        .max()
        .unwrap_or(5)
        .max(5);

    let rows: Vec<Row> = detail
        .fields
        .iter()
        .map(|(name, value)| {
            Row::new(vec![
                Cell::from(name.clone()).style(Style::default().fg(Color::Yellow)),
                Cell::from(value.replace(['\n', '\r'], " ")),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(u16::try_from(name_width).unwrap_or(u16::MAX)),
        Constraint::Min(10),
    ];

    let table = Table::new(rows, widths)
        .header(
            Row::new(vec!["Field", "Value"])
                .style(Style::default().add_modifier(Modifier::BOLD)),
        )
        .block(
            Block::default()
                .title("All Product Details")
                .borders(Borders::ALL),
        )
        .column_spacing(2);
    f.render_widget(table, area);
}
