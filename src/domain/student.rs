use serde::Serialize;

/// A student enrolled at the university.
///
/// The student ID is assigned by the caller and never changes after
/// creation. Enrolled courses keep their enrolment order and may repeat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Student {
    /// Caller-assigned identifier.
    id: String,

    /// Display name of the student.
    pub name: String,

    /// Course names in the order the student enrolled in them.
    #[serde(rename = "courses")]
    enrolled_courses: Vec<String>,
}

impl Student {
    /// Creates a student with no enrolled courses.
    ///
    /// Neither the ID nor the name is validated; empty strings are accepted.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            enrolled_courses: Vec::new(),
        }
    }

    /// Returns the student ID.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the enrolled course names, in enrolment order.
    #[must_use]
    pub fn enrolled_courses(&self) -> &[String] {
        &self.enrolled_courses
    }

    /// Appends a course to the student's enrolments.
    ///
    /// Duplicates are kept.
    pub fn enroll_in_course(&mut self, course: impl Into<String>) {
        self.enrolled_courses.push(course.into());
    }

    /// One-line summary of the student, as shown in the roster report.
    #[must_use]
    pub fn details(&self) -> String {
        format!("Student ID: {}, Name: {}", self.id, self.name)
    }
}
