use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::AppState;
use crate::model::Theme;

/// Render header bar.
/// Shows: app name, active screen, API host, login status, error count.
pub fn render_header(frame: &mut Frame, area: Rect, state: &AppState) {
    let header_text = build_header_text(state);

    let header = Paragraph::new(header_text).style(
        Style::default()
            .fg(Theme::TEXT)
            .bg(Theme::HEADER_BG)
            .add_modifier(Modifier::BOLD),
    );

    frame.render_widget(header, area);
}

/// Pure function: build header text from state.
fn build_header_text(state: &AppState) -> Line<'static> {
    let functionality = state.session.current_functionality;

    let mut spans = vec![
        Span::styled("course-recommender", Style::default().fg(Theme::ACCENT)),
        Span::raw(" "),
        Span::styled(
            format!("[{}:{}]", functionality.index() + 1, functionality.name()),
            Style::default().fg(Theme::INFO),
        ),
        Span::styled(
            format!("  {}", state.meta.host),
            Style::default().fg(Theme::MUTED_TEXT),
        ),
    ];

    match &state.session.authenticated_student_id {
        Some(id) => spans.push(Span::styled(
            format!("  Student {}", id),
            Style::default().fg(Theme::SUCCESS),
        )),
        None => spans.push(Span::styled(
            "  Not logged in",
            Style::default().fg(Theme::WARNING),
        )),
    }

    if !state.meta.errors.is_empty() {
        spans.push(Span::styled(
            format!("  {} error(s)", state.meta.errors.len()),
            Style::default().fg(Theme::ERROR),
        ));
    }

    Line::from(spans)
}
