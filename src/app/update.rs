use crate::app::{handle_key, AppState};
use crate::client::ApiRequest;
use crate::event::AppEvent;
use crate::interpret::interpreter_for;
use crate::model::{DisplayResult, ResultView};

/// Pure update function following Elm Architecture.
/// Takes current state and event, returns new state.
/// No I/O: requests are only queued in `state.pending` for the event loop.
pub fn update(mut state: AppState, event: AppEvent) -> AppState {
    match event {
        AppEvent::Key(key) => handle_key(state, key),

        AppEvent::Tick(now) => {
            state.meta.now = now;
            state
        }

        AppEvent::ResponseReceived {
            functionality,
            result,
            received_at,
        } => {
            state.pending = None;
            state.ui.results_scroll = 0;

            let display = match result {
                Ok(table) => interpreter_for(functionality).interpret(&table),
                Err(e) => {
                    tracing::warn!(%functionality, error = %e, "request failed");
                    let message = format!("{}: {}", functionality.endpoint(), e);
                    state.push_error(message.clone());
                    DisplayResult::Error(message)
                }
            };

            if let DisplayResult::LoggedIn { ref user_id, .. } = display {
                state.session.login(user_id.clone());
            }

            // A result for a screen that is no longer shown is dropped.
            if functionality == state.session.current_functionality {
                state.result = Some(ResultView {
                    functionality,
                    display,
                    received_at: Some(received_at),
                });
            }
            state
        }
    }
}

/// Validate the form and queue its request. Ignored while a request is
/// already pending.
pub fn submit(mut state: AppState) -> AppState {
    if state.is_submitting() {
        return state;
    }

    let functionality = state.session.current_functionality;
    match state.form.params(&state.session) {
        Ok(params) => {
            let request = ApiRequest::new(functionality, &state.meta.base_url, params);
            tracing::info!(
                endpoint = functionality.endpoint(),
                verb = request.verb.as_str(),
                "submitting"
            );
            state.pending = Some(request);
        }
        Err(issue) => {
            state.result = Some(ResultView {
                functionality,
                display: DisplayResult::Invalid(issue.message()),
                received_at: None,
            });
        }
    }
    state
}
