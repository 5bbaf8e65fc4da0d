use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::update::submit;
use crate::app::{AppState, PanelFocus};
use crate::model::Functionality;

/// Rows skipped by PageDown / PageUp in the results table
const PAGE_JUMP: usize = 10;

/// Pure navigation state transition function.
/// Takes current state + keyboard event, returns new state.
/// No I/O, no side effects, fully unit testable.
pub fn handle_key(mut state: AppState, key: KeyEvent) -> AppState {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        state.meta.should_quit = true;
        return state;
    }

    // Help overlay has priority
    if state.ui.show_help {
        state.ui.show_help = false;
        return state;
    }

    match key.code {
        KeyCode::PageDown => return scroll_results_down(state),
        KeyCode::PageUp => return scroll_results_up(state),
        _ => {}
    }

    match state.ui.focus {
        PanelFocus::Selector => handle_selector_key(state, key),
        PanelFocus::Form => handle_form_key(state, key),
    }
}

fn handle_selector_key(mut state: AppState, key: KeyEvent) -> AppState {
    match key.code {
        KeyCode::Char('q') => {
            state.meta.should_quit = true;
            state
        }
        KeyCode::Char('?') => {
            state.ui.show_help = true;
            state
        }
        KeyCode::Char('j') | KeyCode::Down => {
            let next = state.session.current_functionality.next();
            state.select(next);
            state
        }
        KeyCode::Char('k') | KeyCode::Up => {
            let prev = state.session.current_functionality.prev();
            state.select(prev);
            state
        }
        KeyCode::Char(c @ '1'..='7') => {
            let index = c as usize - '1' as usize;
            if let Some(functionality) = Functionality::from_index(index) {
                state.select(functionality);
            }
            state
        }
        KeyCode::Enter | KeyCode::Tab | KeyCode::Char('l') | KeyCode::Right => {
            state.ui.focus = PanelFocus::Form;
            state
        }
        _ => state,
    }
}

/// Keys edit the focused field; locked fields never receive input.
fn handle_form_key(mut state: AppState, key: KeyEvent) -> AppState {
    match key.code {
        KeyCode::Esc => {
            state.ui.focus = PanelFocus::Selector;
            state
        }
        KeyCode::Enter => submit(state),
        KeyCode::Tab | KeyCode::Down => {
            state.form.focus_next();
            state
        }
        KeyCode::BackTab | KeyCode::Up => {
            state.form.focus_prev();
            state
        }
        KeyCode::Backspace => {
            state.form.pop_char();
            state
        }
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            state.form.push_char(c);
            state
        }
        _ => state,
    }
}

fn scroll_results_down(mut state: AppState) -> AppState {
    let rows = state
        .result
        .as_ref()
        .and_then(|r| match &r.display {
            crate::model::DisplayResult::Table(table) => Some(table.len()),
            _ => None,
        })
        .unwrap_or(0);
    state.ui.results_scroll = state
        .ui
        .results_scroll
        .saturating_add(PAGE_JUMP)
        .min(rows.saturating_sub(1));
    state
}

fn scroll_results_up(mut state: AppState) -> AppState {
    state.ui.results_scroll = state.ui.results_scroll.saturating_sub(PAGE_JUMP);
    state
}
