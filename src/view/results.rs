use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Row, Table, Wrap},
    Frame,
};

use crate::app::state::AppState;
use crate::model::{cell_text, DisplayResult, Table as ResultTable, Theme};

use super::components::format::format_ago;

/// Render the results panel: nothing yet, a status message, or the
/// returned table.
pub fn render_results(frame: &mut Frame, state: &AppState, area: Rect) {
    let block = Block::default()
        .title(build_title(state))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Theme::PANEL_BORDER));

    if state.is_submitting() {
        let waiting = Paragraph::new(Line::from(Span::styled(
            "Waiting for response…",
            Style::default().fg(Theme::ACCENT_WARM),
        )))
        .block(block);
        frame.render_widget(waiting, area);
        return;
    }

    let Some(view) = state.result.as_ref() else {
        let hint = Paragraph::new(Line::from(Span::styled(
            "Fill in the form and press Enter",
            Style::default()
                .fg(Theme::MUTED_TEXT)
                .add_modifier(Modifier::ITALIC),
        )))
        .block(block);
        frame.render_widget(hint, area);
        return;
    };

    match &view.display {
        DisplayResult::Table(table) => {
            frame.render_widget(build_table(table, state.ui.results_scroll).block(block), area);
        }
        display => {
            let paragraph = Paragraph::new(build_message(display))
                .block(block)
                .wrap(Wrap { trim: false });
            frame.render_widget(paragraph, area);
        }
    }
}

/// " Results " plus when the shown response arrived.
fn build_title(state: &AppState) -> String {
    match state.result.as_ref().and_then(|r| r.received_at) {
        Some(at) => {
            format!(
                " Results · {} ({}) ",
                at.with_timezone(&chrono::Local).format("%H:%M:%S"),
                format_ago((state.meta.now - at).num_seconds())
            )
        }
        None => " Results ".to_string(),
    }
}

/// Pure function: headline plus optional detail line.
fn build_message(display: &DisplayResult) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled(
        display.headline(),
        Style::default()
            .fg(Theme::display_color(display))
            .add_modifier(Modifier::BOLD),
    ))];
    if let Some(detail) = display.detail() {
        lines.push(Line::from(Span::styled(
            detail,
            Style::default().fg(Theme::TEXT),
        )));
    }
    lines
}

fn build_table(table: &ResultTable, scroll: usize) -> Table<'static> {
    let header = Row::new(table.columns().to_vec()).style(
        Style::default()
            .fg(Theme::INFO)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = table
        .rows()
        .iter()
        .skip(scroll)
        .map(|row| {
            Row::new(
                table
                    .columns()
                    .iter()
                    .map(|col| row.get(col).map(cell_text).unwrap_or_default())
                    .collect::<Vec<String>>(),
            )
            .style(Style::default().fg(Theme::TEXT))
        })
        .collect();

    let widths = vec![Constraint::Fill(1); table.columns().len()];

    Table::new(rows, widths).header(header).column_spacing(2)
}
