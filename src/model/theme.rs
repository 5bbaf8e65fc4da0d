use ratatui::style::Color;

use super::display::DisplayResult;

pub struct Theme;

impl Theme {
    // ── Base palette ────────────────────────────────────────────
    pub const BACKGROUND: Color = Color::Rgb(18, 18, 24);
    pub const TEXT: Color = Color::Rgb(225, 225, 235);
    pub const MUTED_TEXT: Color = Color::Rgb(100, 105, 120);

    // ── Accent colors ───────────────────────────────────────────
    pub const ACCENT: Color = Color::Rgb(80, 200, 200); // teal, primary accent
    pub const ACCENT_WARM: Color = Color::Rgb(230, 160, 60); // amber, in flight

    // ── Semantic colors ─────────────────────────────────────────
    pub const SUCCESS: Color = Color::Rgb(80, 210, 120);
    pub const WARNING: Color = Color::Rgb(230, 180, 60);
    pub const ERROR: Color = Color::Rgb(230, 80, 80);
    pub const INFO: Color = Color::Rgb(80, 180, 220);

    // ── UI chrome ───────────────────────────────────────────────
    pub const HEADER_BG: Color = Color::Rgb(24, 24, 32);
    pub const FOOTER_BG: Color = Color::Rgb(24, 24, 32);
    pub const PANEL_BORDER: Color = Color::Rgb(50, 50, 65);
    pub const ACTIVE_BORDER: Color = Color::Rgb(80, 200, 200); // = ACCENT
    pub const SELECTION_BG: Color = Color::Rgb(40, 55, 75);
    pub const LOCKED_FIELD: Color = Color::Rgb(100, 105, 120); // = MUTED_TEXT

    /// Headline color for a result
    pub fn display_color(display: &DisplayResult) -> Color {
        match display {
            DisplayResult::Info(_) | DisplayResult::Table(_) => Self::INFO,
            DisplayResult::Success { .. } | DisplayResult::LoggedIn { .. } => Self::SUCCESS,
            DisplayResult::Failure { .. } | DisplayResult::Error(_) => Self::ERROR,
            DisplayResult::Invalid(_) => Self::WARNING,
        }
    }
}
