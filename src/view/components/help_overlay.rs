use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::model::theme::Theme;

/// Render the help overlay.
/// Displayed as centered popup when show_help is true.
pub fn render_help_overlay(frame: &mut Frame) {
    let popup_area = centered_rect(60, 70, frame.area());

    frame.render_widget(Clear, popup_area);

    let paragraph = Paragraph::new(build_help_text())
        .block(
            Block::default()
                .title(" Help - press any key to close ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Theme::ACTIVE_BORDER)),
        )
        .alignment(Alignment::Left)
        .style(Style::default().bg(Theme::BACKGROUND).fg(Theme::TEXT));

    frame.render_widget(paragraph, popup_area);
}

fn section(title: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        title,
        Style::default()
            .fg(Theme::INFO)
            .add_modifier(Modifier::BOLD),
    ))
}

/// Build help text with keybindings grouped by panel.
fn build_help_text() -> Vec<Line<'static>> {
    vec![
        Line::from(""),
        section("SELECTOR"),
        Line::from("  j / k       - Next / previous functionality"),
        Line::from("  1-7         - Jump to functionality"),
        Line::from("  Enter / Tab - Edit the form"),
        Line::from("  q           - Quit application"),
        Line::from(""),
        section("FORM"),
        Line::from("  Tab / Down  - Next field"),
        Line::from("  S-Tab / Up  - Previous field"),
        Line::from("  Enter       - Submit"),
        Line::from("  Esc         - Back to selector"),
        Line::from("  Student ID is filled from your login and cannot be edited"),
        Line::from(""),
        section("RESULTS"),
        Line::from("  PgDn / PgUp - Scroll table rows"),
        Line::from("  Ctrl+c      - Quit from anywhere"),
        Line::from(""),
    ]
}

/// Create a centered rect using up certain percentage of the available rect.
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .split(r);

    Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    #[test]
    fn test_render_help_overlay() {
        let backend = TestBackend::new(120, 40);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal.draw(|frame| render_help_overlay(frame)).unwrap();

        let buffer = terminal.backend().buffer();
        let buffer_str: String = (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer.cell((x, y)).unwrap().symbol())
                    .collect::<String>()
            })
            .collect::<Vec<String>>()
            .join("\n");

        assert!(buffer_str.contains("SELECTOR"));
        assert!(buffer_str.contains("FORM"));
        assert!(buffer_str.contains("Quit application"));
    }

    #[test]
    fn test_centered_rect() {
        let full_area = Rect {
            x: 0,
            y: 0,
            width: 100,
            height: 50,
        };

        let centered = centered_rect(60, 70, full_area);

        assert!(centered.width <= 60);
        assert!(centered.height <= 35);
        assert!(centered.x > 0);
        assert!(centered.y > 0);
    }
}
