use chrono::{DateTime, Utc};

use super::functionality::Functionality;
use super::table::Table;

/// What the results panel shows after a submission.
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayResult {
    /// Neutral status line ("No courses enrolled.")
    Info(String),
    Success {
        message: String,
        detail: Option<String>,
    },
    /// Business failure reported inside a successful response
    Failure {
        message: String,
        detail: Option<String>,
    },
    /// Login accepted; `update` stores `user_id` in the session
    LoggedIn { user_id: String, full_name: String },
    Table(Table),
    /// Form rejected locally, nothing was sent
    Invalid(String),
    /// Transport or decode failure
    Error(String),
}

impl DisplayResult {
    pub fn info(message: impl Into<String>) -> Self {
        DisplayResult::Info(message.into())
    }

    pub fn success(message: impl Into<String>) -> Self {
        DisplayResult::Success {
            message: message.into(),
            detail: None,
        }
    }

    pub fn failure(message: impl Into<String>, detail: Option<String>) -> Self {
        DisplayResult::Failure {
            message: message.into(),
            detail,
        }
    }

    /// Headline text, without detail lines or table content.
    pub fn headline(&self) -> String {
        match self {
            DisplayResult::Info(msg)
            | DisplayResult::Invalid(msg)
            | DisplayResult::Error(msg) => msg.clone(),
            DisplayResult::Success { message, .. } | DisplayResult::Failure { message, .. } => {
                message.clone()
            }
            DisplayResult::LoggedIn { .. } => "Login successful.".to_string(),
            DisplayResult::Table(table) => format!("{} row(s)", table.len()),
        }
    }

    /// Secondary line under the headline, if any.
    pub fn detail(&self) -> Option<String> {
        match self {
            DisplayResult::Success { detail, .. } | DisplayResult::Failure { detail, .. } => {
                detail.clone()
            }
            DisplayResult::LoggedIn { user_id, full_name } => Some(format!(
                "App User ID: {user_id} Fullname: {full_name} is logged in."
            )),
            _ => None,
        }
    }
}

/// A result together with the screen it belongs to and when it arrived.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultView {
    pub functionality: Functionality,
    pub display: DisplayResult,
    /// None for local validation results
    pub received_at: Option<DateTime<Utc>>,
}
