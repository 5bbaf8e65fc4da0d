use chrono::{DateTime, Utc};
use crossterm::event::KeyEvent;

use crate::error::ApiError;
use crate::model::{Functionality, Table};

/// All events that can occur in the application.
/// Sourced from keyboard input, timers, and completed requests.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Keyboard input event
    Key(KeyEvent),

    /// Timer tick (keeps the clock in the header current)
    Tick(DateTime<Utc>),

    /// The pending request finished, successfully or not
    ResponseReceived {
        functionality: Functionality,
        result: Result<Table, ApiError>,
        received_at: DateTime<Utc>,
    },
}
