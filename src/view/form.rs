use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::state::{AppState, PanelFocus};
use crate::model::{FieldSpec, Theme};

/// Rows used by one bordered input
const FIELD_HEIGHT: u16 = 3;

/// Total rows the active form needs: outer border, inputs, submit line.
pub fn form_height(state: &AppState) -> u16 {
    let fields = state.form.fields().len() as u16;
    2 + fields * FIELD_HEIGHT + 1
}

/// Render the active screen's form: one bordered input per field and a
/// submit hint. Locked fields show the session identifier.
pub fn render_form(frame: &mut Frame, state: &AppState, area: Rect) {
    let operation = state.session.current_functionality.operation();
    let form_focused = state.ui.focus == PanelFocus::Form;

    let block = Block::default()
        .title(format!(" {} ", operation.title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if form_focused {
            Theme::ACTIVE_BORDER
        } else {
            Theme::PANEL_BORDER
        }));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut constraints: Vec<Constraint> = operation
        .fields
        .iter()
        .map(|_| Constraint::Length(FIELD_HEIGHT))
        .collect();
    constraints.push(Constraint::Length(1));
    let rows = Layout::vertical(constraints).split(inner);

    for (idx, field) in operation.fields.iter().enumerate() {
        let value = state.form.value(idx, &state.session);
        let focused = form_focused && state.form.focused() == Some(idx);
        frame.render_widget(build_field(field, value, focused), rows[idx]);
    }

    let submit_line = build_submit_line(operation.submit_label, state.is_submitting());
    frame.render_widget(Paragraph::new(submit_line), rows[operation.fields.len()]);
}

fn build_field<'a>(field: &FieldSpec, value: &'a str, focused: bool) -> Paragraph<'a> {
    let title = if field.locked {
        format!(" {} (locked) ", field.label)
    } else {
        format!(" {} ", field.label)
    };

    let mut spans = Vec::new();
    if value.is_empty() {
        if let Some(placeholder) = field.placeholder {
            if !focused {
                spans.push(Span::styled(
                    placeholder,
                    Style::default()
                        .fg(Theme::MUTED_TEXT)
                        .add_modifier(Modifier::ITALIC),
                ));
            }
        }
    } else {
        let color = if field.locked {
            Theme::LOCKED_FIELD
        } else {
            Theme::TEXT
        };
        spans.push(Span::styled(value, Style::default().fg(color)));
    }
    if focused {
        spans.push(Span::styled("█", Style::default().fg(Theme::ACTIVE_BORDER)));
    }

    let border = if focused {
        Theme::ACTIVE_BORDER
    } else {
        Theme::PANEL_BORDER
    };

    Paragraph::new(Line::from(spans)).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border)),
    )
}

fn build_submit_line(label: &str, submitting: bool) -> Line<'static> {
    if submitting {
        Line::from(Span::styled(
            "Submitting…",
            Style::default().fg(Theme::ACCENT_WARM),
        ))
    } else {
        Line::from(vec![
            Span::styled("[Enter] ", Style::default().fg(Theme::INFO)),
            Span::styled(
                label.to_string(),
                Style::default().fg(Theme::TEXT).add_modifier(Modifier::BOLD),
            ),
        ])
    }
}
