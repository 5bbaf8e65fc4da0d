use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::app::state::{AppState, PanelFocus};
use crate::model::{Functionality, Theme};

/// Render the functionality selector sidebar.
/// The highlighted entry is always the session's current functionality.
pub fn render_selector(frame: &mut Frame, state: &AppState, area: Rect) {
    let focused = state.ui.focus == PanelFocus::Selector;
    let current = state.session.current_functionality;

    let items: Vec<ListItem> = Functionality::ALL
        .iter()
        .map(|f| {
            let style = if *f == current {
                Style::default().fg(Theme::ACCENT).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Theme::TEXT)
            };
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{} ", f.index() + 1),
                    Style::default().fg(Theme::MUTED_TEXT),
                ),
                Span::styled(f.name(), style),
            ]))
        })
        .collect();

    let border = if focused {
        Theme::ACTIVE_BORDER
    } else {
        Theme::PANEL_BORDER
    };

    let list = List::new(items)
        .block(
            Block::default()
                .title(" Functionality ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        )
        .highlight_style(Style::default().bg(Theme::SELECTION_BG))
        .highlight_symbol("› ");

    let mut list_state = ListState::default().with_selected(Some(current.index()));
    frame.render_stateful_widget(list, area, &mut list_state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    #[test]
    fn selector_lists_all_functionalities() {
        let backend = TestBackend::new(40, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        let state = AppState::new();

        terminal
            .draw(|frame| render_selector(frame, &state, frame.area()))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let buffer_str: String = (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer.cell((x, y)).unwrap().symbol())
                    .collect::<String>()
            })
            .collect::<Vec<String>>()
            .join("\n");

        for f in Functionality::ALL {
            assert!(buffer_str.contains(f.name()), "{} should be listed", f.name());
        }
    }
}
