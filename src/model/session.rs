use super::functionality::Functionality;

/// Per-user session: the active selector value and the identifier captured
/// by a successful login. Lives only for the lifetime of the process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionContext {
    pub current_functionality: Functionality,
    /// Set by a successful ValidateUser call; trusted by every later form.
    pub authenticated_student_id: Option<String>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite the selection. Returns true if it changed.
    pub fn select(&mut self, functionality: Functionality) -> bool {
        let changed = self.current_functionality != functionality;
        self.current_functionality = functionality;
        changed
    }

    pub fn login(&mut self, student_id: impl Into<String>) {
        self.authenticated_student_id = Some(student_id.into());
    }

    /// Identifier shown in locked fields; blank before login.
    pub fn student_id(&self) -> &str {
        self.authenticated_student_id.as_deref().unwrap_or("")
    }

    pub fn is_logged_in(&self) -> bool {
        self.authenticated_student_id.is_some()
    }
}
