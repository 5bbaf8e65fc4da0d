use ratatui::{
    layout::{Constraint, Layout},
    Frame,
};

use crate::app::state::AppState;

pub mod components;
pub mod form;
pub mod results;
pub mod selector;

pub use form::{form_height, render_form};
pub use results::render_results;
pub use selector::render_selector;

/// Width of the functionality sidebar
const SELECTOR_WIDTH: u16 = 40;

/// Main view dispatcher.
/// Header and footer frame a sidebar (selector) and the active screen
/// (form above results). Help overlays everything.
pub fn render(state: &AppState, frame: &mut Frame) {
    let [header_area, body_area, footer_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    components::header::render_header(frame, header_area, state);

    let [selector_area, screen_area] =
        Layout::horizontal([Constraint::Length(SELECTOR_WIDTH), Constraint::Min(20)])
            .areas(body_area);

    selector::render_selector(frame, state, selector_area);

    let [form_area, results_area] = Layout::vertical([
        Constraint::Length(form_height(state)),
        Constraint::Min(3),
    ])
    .areas(screen_area);

    form::render_form(frame, state, form_area);
    results::render_results(frame, state, results_area);

    components::footer::render_footer(frame, footer_area, state);

    if state.ui.show_help {
        components::help_overlay::render_help_overlay(frame);
    }
}
