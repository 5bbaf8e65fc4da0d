use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{AppState, PanelFocus};
use crate::model::Theme;

/// Render footer status bar with keybinding hints.
/// Shows different keybindings based on the focused panel.
pub fn render_footer(frame: &mut Frame, area: Rect, state: &AppState) {
    let footer_text = build_footer_text(state);

    let footer = Paragraph::new(footer_text).style(
        Style::default()
            .fg(Theme::TEXT)
            .bg(Theme::FOOTER_BG)
            .add_modifier(Modifier::DIM),
    );

    frame.render_widget(footer, area);
}

/// Pure function: build footer text based on focus.
fn build_footer_text(state: &AppState) -> Line<'static> {
    let hints: &[(&str, &str)] = match state.ui.focus {
        PanelFocus::Selector => &[
            ("q", "quit"),
            ("j/k", "select"),
            ("1-7", "jump"),
            ("Enter", "form"),
            ("PgUp/PgDn", "scroll"),
            ("?", "help"),
        ],
        PanelFocus::Form => &[
            ("Ctrl+c", "quit"),
            ("Esc", "back"),
            ("Tab", "next field"),
            ("Enter", "submit"),
            ("PgUp/PgDn", "scroll"),
        ],
    };

    let spans: Vec<Span<'static>> = hints
        .iter()
        .flat_map(|(key, action)| {
            [
                Span::styled(key.to_string(), Style::default().fg(Theme::INFO)),
                Span::raw(format!(":{} ", action)),
            ]
        })
        .collect();

    Line::from(spans)
}
