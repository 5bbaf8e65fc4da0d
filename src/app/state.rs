use std::collections::VecDeque;

use chrono::{DateTime, Utc};

use crate::client::ApiRequest;
use crate::config::Config;
use crate::model::{FormState, Functionality, ResultView, SessionContext};

/// Maximum retained request errors
pub const ERROR_CAPACITY: usize = 100;

/// Main application state.
/// Updated via pure `update(state, event) -> state` function.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Selector value and logged-in identifier
    pub session: SessionContext,

    /// Input buffer for the active screen
    pub form: FormState,

    /// Last result shown for the active screen
    pub result: Option<ResultView>,

    /// Request waiting to be sent by the event loop (at most one)
    pub pending: Option<ApiRequest>,

    pub ui: UiState,

    pub meta: MetaState,
}

/// Presentation-only state
#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub focus: PanelFocus,

    /// First visible row of the results table
    pub results_scroll: usize,

    pub show_help: bool,
}

/// Process-level state
#[derive(Debug, Clone)]
pub struct MetaState {
    /// Base URL without trailing slash
    pub base_url: String,

    /// Host shown in the header
    pub host: String,

    /// Error message ring buffer (for status bar display)
    pub errors: VecDeque<String>,

    /// Latest tick time
    pub now: DateTime<Utc>,

    /// Signal to quit the application
    pub should_quit: bool,
}

/// Which panel receives keystrokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelFocus {
    #[default]
    Selector,
    Form,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Create new default application state
    pub fn new() -> Self {
        Self::with_config(&Config::default())
    }

    pub fn with_config(config: &Config) -> Self {
        let session = SessionContext::new();
        Self {
            form: FormState::new(session.current_functionality),
            session,
            result: None,
            pending: None,
            ui: UiState::default(),
            meta: MetaState {
                base_url: config.base_url.clone(),
                host: config.host().to_string(),
                errors: VecDeque::with_capacity(ERROR_CAPACITY),
                now: Utc::now(),
                should_quit: false,
            },
        }
    }

    /// Create new state with a different screen selected
    pub fn with_functionality(functionality: Functionality) -> Self {
        let mut state = Self::new();
        state.select(functionality);
        state
    }

    /// Overwrite the selection. A different screen gets a fresh form and
    /// loses the previous result.
    pub fn select(&mut self, functionality: Functionality) {
        if self.session.select(functionality) {
            self.form = FormState::new(functionality);
            self.result = None;
            self.ui.results_scroll = 0;
            tracing::debug!(%functionality, "functionality selected");
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.pending.is_some()
    }

    pub fn push_error(&mut self, message: String) {
        if self.meta.errors.len() >= ERROR_CAPACITY {
            self.meta.errors.pop_front();
        }
        self.meta.errors.push_back(message);
    }
}
