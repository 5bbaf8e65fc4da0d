use super::functionality::{FieldSpec, Functionality, MAX_FIELD_CHARS};
use super::session::SessionContext;

/// Input buffer for the active screen.
///
/// Locked fields keep no value of their own: they always read through to
/// the session identifier, so they reflect the latest login and cannot be
/// edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub functionality: Functionality,
    values: Vec<String>,
    /// Index into `fields()` of the focused editable field
    focused: Option<usize>,
}

/// Why a form could not be turned into request parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormIssue {
    /// The locked Student ID is blank because nobody has logged in.
    NotLoggedIn,
    /// An editable field was left blank.
    Missing(&'static str),
}

impl FormIssue {
    pub fn message(&self) -> String {
        match self {
            FormIssue::NotLoggedIn => "Log in with ValidateUser first.".to_string(),
            FormIssue::Missing(label) => format!("{label} is required."),
        }
    }
}

impl FormState {
    pub fn new(functionality: Functionality) -> Self {
        let fields = functionality.fields();
        Self {
            functionality,
            values: vec![String::new(); fields.len()],
            focused: fields.iter().position(|f| !f.locked),
        }
    }

    pub fn fields(&self) -> &'static [FieldSpec] {
        self.functionality.fields()
    }

    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    /// Text shown for field `index`.
    pub fn value<'a>(&'a self, index: usize, session: &'a SessionContext) -> &'a str {
        match self.fields().get(index) {
            Some(field) if field.locked => session.student_id(),
            Some(_) => self.values[index].as_str(),
            None => "",
        }
    }

    /// Append a character to the focused field. Ignored past the length cap.
    pub fn push_char(&mut self, c: char) {
        if let Some(idx) = self.focused {
            let value = &mut self.values[idx];
            if value.chars().count() < MAX_FIELD_CHARS {
                value.push(c);
            }
        }
    }

    pub fn pop_char(&mut self) {
        if let Some(idx) = self.focused {
            self.values[idx].pop();
        }
    }

    /// Move focus to the next editable field, wrapping around.
    pub fn focus_next(&mut self) {
        self.focused = self.step_focus(1);
    }

    /// Move focus to the previous editable field, wrapping around.
    pub fn focus_prev(&mut self) {
        self.focused = self.step_focus(self.fields().len().saturating_sub(1));
    }

    fn step_focus(&self, step: usize) -> Option<usize> {
        let fields = self.fields();
        let current = self.focused?;
        let len = fields.len();
        (1..=len)
            .map(|offset| (current + offset * step) % len)
            .find(|&idx| !fields[idx].locked)
    }

    /// Query parameters in field order, or the first blank field.
    pub fn params(
        &self,
        session: &SessionContext,
    ) -> Result<Vec<(&'static str, String)>, FormIssue> {
        self.fields()
            .iter()
            .enumerate()
            .map(|(idx, field)| {
                let value = self.value(idx, session);
                if value.is_empty() {
                    Err(if field.locked {
                        FormIssue::NotLoggedIn
                    } else {
                        FormIssue::Missing(field.label)
                    })
                } else {
                    Ok((field.key, value.to_string()))
                }
            })
            .collect()
    }
}
