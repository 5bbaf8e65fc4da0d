use std::fmt;

/// One of the seven operations offered by the selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Functionality {
    #[default]
    ValidateUser,
    FindPrerequisites,
    GetCoursesOffered,
    CheckIfCompletedPrerequisites,
    EnrollInCourseOffering,
    GetStudentEnrolledCourseOfferings,
    DropFromCourseOffering,
}

/// HTTP verb used for an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Get,
    Post,
}

impl Verb {
    pub fn as_str(self) -> &'static str {
        match self {
            Verb::Get => "GET",
            Verb::Post => "POST",
        }
    }
}

/// A labeled text input on a screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Query parameter name sent to the API
    pub key: &'static str,
    pub label: &'static str,
    pub placeholder: Option<&'static str>,
    /// Locked fields mirror the session identifier and reject input
    pub locked: bool,
}

/// Maximum characters accepted by an editable field.
pub const MAX_FIELD_CHARS: usize = 20;

const USERNAME: FieldSpec = FieldSpec {
    key: "username",
    label: "Username",
    placeholder: Some("e.g., mjordan@wvu.edu"),
    locked: false,
};

const PASSWORD: FieldSpec = FieldSpec {
    key: "password",
    label: "Password",
    placeholder: Some("e.g., 0x01"),
    locked: false,
};

const SUBJECT_CODE: FieldSpec = FieldSpec {
    key: "subjectCode",
    label: "Subject Code",
    placeholder: Some("e.g., MIST"),
    locked: false,
};

const COURSE_NUMBER: FieldSpec = FieldSpec {
    key: "courseNumber",
    label: "Course Number",
    placeholder: Some("e.g., 460"),
    locked: false,
};

const STUDENT_ID: FieldSpec = FieldSpec {
    key: "studentID",
    label: "Student ID",
    placeholder: None,
    locked: true,
};

/// Static description of everything a functionality needs: where to send
/// the request, how, and which form to show.
#[derive(Debug)]
pub struct Operation {
    pub functionality: Functionality,
    pub endpoint: &'static str,
    pub verb: Verb,
    pub title: &'static str,
    pub submit_label: &'static str,
    pub fields: &'static [FieldSpec],
}

static OPERATIONS: [Operation; 7] = [
    Operation {
        functionality: Functionality::ValidateUser,
        endpoint: "validate_user",
        verb: Verb::Get,
        title: "Login User",
        submit_label: "Login User",
        fields: &[USERNAME, PASSWORD],
    },
    Operation {
        functionality: Functionality::FindPrerequisites,
        endpoint: "find_prerequisites",
        verb: Verb::Get,
        title: "Course Prerequisites Finder",
        submit_label: "Find Prerequisites",
        fields: &[SUBJECT_CODE, COURSE_NUMBER],
    },
    Operation {
        functionality: Functionality::GetCoursesOffered,
        endpoint: "find_current_semester_course_offerings",
        verb: Verb::Get,
        title: "Course Offerings Finder",
        submit_label: "Get Courses Offered",
        fields: &[SUBJECT_CODE, COURSE_NUMBER],
    },
    Operation {
        functionality: Functionality::CheckIfCompletedPrerequisites,
        endpoint: "check_if_student_has_taken_all_prerequisites_for_course",
        verb: Verb::Get,
        title: "Check If Completed Prerequisites",
        submit_label: "Check If Completed Prerequisites",
        fields: &[STUDENT_ID, SUBJECT_CODE, COURSE_NUMBER],
    },
    Operation {
        functionality: Functionality::EnrollInCourseOffering,
        endpoint: "enroll_student_in_course_offering",
        verb: Verb::Post,
        title: "Enroll In Course Offering",
        submit_label: "Enroll In Course Offering",
        fields: &[
            STUDENT_ID,
            FieldSpec {
                key: "courseOfferingID",
                label: "Course Offering ID",
                placeholder: None,
                locked: false,
            },
        ],
    },
    Operation {
        functionality: Functionality::GetStudentEnrolledCourseOfferings,
        endpoint: "get_student_enrolled_course_offerings",
        verb: Verb::Get,
        title: "Get Student Enrolled Course Offerings",
        submit_label: "Get Student Enrolled Course Offerings",
        fields: &[STUDENT_ID],
    },
    Operation {
        functionality: Functionality::DropFromCourseOffering,
        endpoint: "drop_student_from_course_offering",
        verb: Verb::Post,
        title: "Drop From Course Offering",
        submit_label: "Drop From Course Offering",
        fields: &[
            STUDENT_ID,
            FieldSpec {
                key: "courseOfferingID",
                label: "Course Offering ID",
                placeholder: Some("e.g., 123"),
                locked: false,
            },
        ],
    },
];

impl Functionality {
    /// Selector order.
    pub const ALL: [Functionality; 7] = [
        Functionality::ValidateUser,
        Functionality::FindPrerequisites,
        Functionality::GetCoursesOffered,
        Functionality::CheckIfCompletedPrerequisites,
        Functionality::EnrollInCourseOffering,
        Functionality::GetStudentEnrolledCourseOfferings,
        Functionality::DropFromCourseOffering,
    ];

    /// Position in the selector list.
    pub fn index(self) -> usize {
        match self {
            Functionality::ValidateUser => 0,
            Functionality::FindPrerequisites => 1,
            Functionality::GetCoursesOffered => 2,
            Functionality::CheckIfCompletedPrerequisites => 3,
            Functionality::EnrollInCourseOffering => 4,
            Functionality::GetStudentEnrolledCourseOfferings => 5,
            Functionality::DropFromCourseOffering => 6,
        }
    }

    pub fn from_index(index: usize) -> Option<Functionality> {
        Self::ALL.get(index).copied()
    }

    pub fn operation(self) -> &'static Operation {
        &OPERATIONS[self.index()]
    }

    pub fn endpoint(self) -> &'static str {
        self.operation().endpoint
    }

    pub fn verb(self) -> Verb {
        self.operation().verb
    }

    pub fn fields(self) -> &'static [FieldSpec] {
        self.operation().fields
    }

    /// Selector label, e.g. `GetCoursesOffered`.
    pub fn name(self) -> &'static str {
        match self {
            Functionality::ValidateUser => "ValidateUser",
            Functionality::FindPrerequisites => "FindPrerequisites",
            Functionality::GetCoursesOffered => "GetCoursesOffered",
            Functionality::CheckIfCompletedPrerequisites => "CheckIfCompletedPrerequisites",
            Functionality::EnrollInCourseOffering => "EnrollInCourseOffering",
            Functionality::GetStudentEnrolledCourseOfferings => {
                "GetStudentEnrolledCourseOfferings"
            }
            Functionality::DropFromCourseOffering => "DropFromCourseOffering",
        }
    }

    /// Next entry in selector order, clamped at the end.
    pub fn next(self) -> Functionality {
        Self::from_index(self.index() + 1).unwrap_or(self)
    }

    /// Previous entry in selector order, clamped at the start.
    pub fn prev(self) -> Functionality {
        self.index()
            .checked_sub(1)
            .and_then(Self::from_index)
            .unwrap_or(self)
    }
}

impl fmt::Display for Functionality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
