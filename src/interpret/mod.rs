//! Per-screen response rules.
//!
//! The API signals success differently for each operation, so every
//! functionality gets an `Interpreter` that turns the returned table into
//! the message (or table) the results panel shows.

use crate::model::{DisplayResult, Functionality, Table};

pub trait Interpreter: Sync {
    fn interpret(&self, table: &Table) -> DisplayResult;
}

/// ValidateUser: first row carries `AppUserID` and `FullName`.
pub struct LoginInterpreter;

/// Plain lookups: empty means "none found", otherwise show the table.
pub struct ListingInterpreter {
    pub empty_message: &'static str,
}

/// CheckIfCompletedPrerequisites: rows are the prerequisites still missing.
pub struct PrerequisiteCheckInterpreter;

/// EnrollInCourseOffering: `EnrollmentResponse` containing "Enrolled".
pub struct EnrollInterpreter;

/// DropFromCourseOffering: `EnrollmentStatus` equal to "Dropped".
pub struct DropInterpreter;

static LOGIN: LoginInterpreter = LoginInterpreter;
static PREREQUISITES: ListingInterpreter = ListingInterpreter {
    empty_message: "No prerequisites found.",
};
static COURSES_OFFERED: ListingInterpreter = ListingInterpreter {
    empty_message: "No courses offered found.",
};
static ENROLLED: ListingInterpreter = ListingInterpreter {
    empty_message: "No courses enrolled.",
};
static PREREQUISITE_CHECK: PrerequisiteCheckInterpreter = PrerequisiteCheckInterpreter;
static ENROLL: EnrollInterpreter = EnrollInterpreter;
static DROP: DropInterpreter = DropInterpreter;

pub fn interpreter_for(functionality: Functionality) -> &'static dyn Interpreter {
    match functionality {
        Functionality::ValidateUser => &LOGIN,
        Functionality::FindPrerequisites => &PREREQUISITES,
        Functionality::GetCoursesOffered => &COURSES_OFFERED,
        Functionality::CheckIfCompletedPrerequisites => &PREREQUISITE_CHECK,
        Functionality::EnrollInCourseOffering => &ENROLL,
        Functionality::GetStudentEnrolledCourseOfferings => &ENROLLED,
        Functionality::DropFromCourseOffering => &DROP,
    }
}

fn missing_column(column: &str) -> Option<String> {
    Some(format!("response did not include {column}"))
}

impl Interpreter for LoginInterpreter {
    fn interpret(&self, table: &Table) -> DisplayResult {
        if table.is_empty() {
            return DisplayResult::info("Invalid username or password.");
        }
        match table.first_text("AppUserID") {
            Some(user_id) if !user_id.is_empty() => DisplayResult::LoggedIn {
                user_id,
                full_name: table
                    .first_text("FullName")
                    .filter(|name| !name.is_empty())
                    .unwrap_or_else(|| "(unknown)".to_string()),
            },
            _ => DisplayResult::failure("Login failed.", missing_column("AppUserID")),
        }
    }
}

impl Interpreter for ListingInterpreter {
    fn interpret(&self, table: &Table) -> DisplayResult {
        if table.is_empty() {
            DisplayResult::info(self.empty_message)
        } else {
            DisplayResult::Table(table.clone())
        }
    }
}

impl Interpreter for PrerequisiteCheckInterpreter {
    fn interpret(&self, table: &Table) -> DisplayResult {
        if table.is_empty() {
            DisplayResult::info("Student has completed all prerequisites for the course.")
        } else {
            DisplayResult::Table(table.clone())
        }
    }
}

impl Interpreter for EnrollInterpreter {
    fn interpret(&self, table: &Table) -> DisplayResult {
        match table.first_text("EnrollmentResponse") {
            Some(response) if response.contains("Enrolled") => {
                DisplayResult::success("Enrollment successful.")
            }
            Some(response) if response.is_empty() => DisplayResult::failure(
                "Enrollment failed.",
                missing_column("EnrollmentResponse"),
            ),
            Some(response) => DisplayResult::failure("Enrollment failed.", Some(response)),
            None => DisplayResult::failure(
                "Enrollment failed.",
                missing_column("EnrollmentResponse"),
            ),
        }
    }
}

impl Interpreter for DropInterpreter {
    fn interpret(&self, table: &Table) -> DisplayResult {
        match table.first_text("EnrollmentStatus") {
            Some(status) if status == "Dropped" => DisplayResult::success("Drop successful."),
            Some(_) => DisplayResult::failure("Drop failed.", None),
            None => DisplayResult::failure("Drop failed.", missing_column("EnrollmentStatus")),
        }
    }
}
