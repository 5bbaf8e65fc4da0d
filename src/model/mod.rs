pub mod display;
pub mod form;
pub mod functionality;
pub mod session;
pub mod table;
pub mod theme;

pub use display::{DisplayResult, ResultView};
pub use form::{FormIssue, FormState};
pub use functionality::{FieldSpec, Functionality, Operation, Verb, MAX_FIELD_CHARS};
pub use session::SessionContext;
pub use table::{cell_text, Row, Table};
pub use theme::Theme;
