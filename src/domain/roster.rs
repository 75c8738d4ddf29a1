//! The university roster: students and the courses on offer.
//!
//! The [`Roster`] owns every [`Student`] exclusively. All mutation goes
//! through its methods, which keeps enrolment lookups consistent.

use std::io;

use serde::Serialize;
use thiserror::Error;
use tracing::instrument;

use crate::domain::Student;

/// Separator printed beneath the roster name in the text report.
const SEPARATOR: &str = "----------------";

/// An ordered registry of students and offered courses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Roster {
    name: String,
    students: Vec<Student>,

    /// Informational only. Enrolment is not checked against this list.
    offered_courses: Vec<String>,
}

/// Errors returned by roster operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RosterError {
    /// No student with the given ID exists.
    #[error("Student with ID {id} not found.")]
    StudentNotFound {
        /// The ID that was looked up.
        id: String,
    },
}

impl Roster {
    /// Creates an empty roster with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            students: Vec::new(),
            offered_courses: Vec::new(),
        }
    }

    /// Returns the roster name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the students in insertion order.
    #[must_use]
    pub fn students(&self) -> &[Student] {
        &self.students
    }

    /// Returns the offered course names in insertion order.
    #[must_use]
    pub fn offered_courses(&self) -> &[String] {
        &self.offered_courses
    }

    /// Adds a new student with no enrolments.
    ///
    /// IDs are not checked for uniqueness. A repeated ID is stored as a
    /// separate record, shadowed during lookups by the earlier one.
    #[instrument(level = "debug", skip(self))]
    pub fn add_student(&mut self, id: &str, name: &str) {
        self.students.push(Student::new(id, name));
    }

    /// Adds a course to the list of offered courses. Duplicates are kept.
    #[instrument(level = "debug", skip(self))]
    pub fn add_course(&mut self, course: &str) {
        self.offered_courses.push(course.to_string());
    }

    /// Finds the earliest-inserted student with the given ID.
    #[must_use]
    pub fn find_student(&self, id: &str) -> Option<&Student> {
        self.students.iter().find(|student| student.id() == id)
    }

    fn find_student_mut(&mut self, id: &str) -> Result<&mut Student, RosterError> {
        self.students
            .iter_mut()
            .find(|student| student.id() == id)
            .ok_or_else(|| RosterError::StudentNotFound { id: id.to_string() })
    }

    /// Enrols the student with the given ID in a course.
    ///
    /// The course does not need to be in the offered list. If several
    /// students share the ID, the earliest-inserted one is enrolled.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::StudentNotFound`] if no student has the ID. The
    /// roster is left unchanged.
    #[instrument(level = "debug", skip(self))]
    pub fn enroll_student_in_course(&mut self, id: &str, course: &str) -> Result<(), RosterError> {
        let student = self.find_student_mut(id).inspect_err(|_| {
            tracing::debug!("no student with ID {id:?}");
        })?;
        student.enroll_in_course(course);
        tracing::debug!(
            enrolments = student.enrolled_courses().len(),
            "enrolled {id:?} in {course:?}"
        );
        Ok(())
    }

    /// Changes the display name of the student with the given ID.
    ///
    /// Uses the same first-match lookup as enrolment.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::StudentNotFound`] if no student has the ID.
    #[instrument(level = "debug", skip(self))]
    pub fn rename_student(&mut self, id: &str, name: &str) -> Result<(), RosterError> {
        self.find_student_mut(id)?.name = name.to_string();
        Ok(())
    }

    /// Writes the text report of the whole roster.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `out` fails.
    pub fn write_report(&self, out: &mut impl io::Write) -> io::Result<()> {
        writeln!(out, "{}", self.name)?;
        writeln!(out, "{SEPARATOR}")?;
        for student in &self.students {
            writeln!(out, "{}", student.details())?;
            writeln!(out, "Enrolled Courses:")?;
            if student.enrolled_courses().is_empty() {
                writeln!(out, "  - None")?;
            } else {
                for course in student.enrolled_courses() {
                    writeln!(out, "---> {course}")?;
                }
            }
            writeln!(out)?;
        }
        Ok(())
    }

    /// Renders the text report as a string.
    ///
    /// # Panics
    ///
    /// Panics if writing to the in-memory buffer fails (which should never
    /// happen).
    #[must_use]
    pub fn report(&self) -> String {
        let mut buffer = Vec::new();
        self.write_report(&mut buffer).expect("this should never fail");
        String::from_utf8_lossy(&buffer).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn goa() -> Roster {
        let mut roster = Roster::new("Goa University");
        roster.add_student("S1", "Alice");
        roster.add_student("S2", "Bob");
        roster
    }

    #[test]
    fn students_keep_insertion_order() {
        let mut roster = Roster::new("Test");
        for i in 0..5 {
            roster.add_student(&format!("S{i}"), &format!("Student {i}"));
        }

        let ids: Vec<&str> = roster.students().iter().map(Student::id).collect();
        assert_eq!(ids, ["S0", "S1", "S2", "S3", "S4"]);
    }

    #[test]
    fn offered_courses_keep_duplicates() {
        let mut roster = Roster::new("Test");
        roster.add_course("Math");
        roster.add_course("Math");

        assert_eq!(roster.offered_courses(), ["Math", "Math"]);
    }

    #[test]
    fn enrol_touches_only_the_matching_student() {
        let mut roster = goa();
        roster.add_course("Art");

        roster.enroll_student_in_course("S2", "Math").unwrap();

        assert!(roster.students()[0].enrolled_courses().is_empty());
        assert_eq!(roster.students()[1].enrolled_courses(), ["Math"]);
        assert_eq!(roster.offered_courses(), ["Art"]);
    }

    #[test]
    fn enrol_accepts_courses_not_on_offer() {
        let mut roster = goa();
        roster.enroll_student_in_course("S1", "Underwater Basket Weaving").unwrap();

        assert_eq!(
            roster.find_student("S1").unwrap().enrolled_courses(),
            ["Underwater Basket Weaving"]
        );
        assert!(roster.offered_courses().is_empty());
    }

    #[test]
    fn enrol_unknown_student_leaves_state_unchanged() {
        let mut roster = goa();
        roster.enroll_student_in_course("S1", "Math").unwrap();
        let before = roster.clone();

        let error = roster.enroll_student_in_course("S9", "History").unwrap_err();

        assert_eq!(
            error,
            RosterError::StudentNotFound {
                id: "S9".to_string()
            }
        );
        assert_eq!(error.to_string(), "Student with ID S9 not found.");
        assert_eq!(roster, before);
    }

    #[test]
    fn id_match_is_exact() {
        let mut roster = goa();
        assert!(roster.enroll_student_in_course("s1", "Math").is_err());
        assert!(roster.enroll_student_in_course(" S1", "Math").is_err());
    }

    #[test]
    fn duplicate_id_enrols_first_inserted() {
        let mut roster = Roster::new("Test");
        roster.add_student("S1", "Alice");
        roster.add_student("S1", "Alice");

        roster.enroll_student_in_course("S1", "Art").unwrap();

        assert_eq!(roster.students().len(), 2);
        assert_eq!(roster.students()[0].enrolled_courses(), ["Art"]);
        assert!(roster.students()[1].enrolled_courses().is_empty());
    }

    #[test]
    fn rename_uses_first_match() {
        let mut roster = goa();
        roster.add_student("S1", "Second Alice");

        roster.rename_student("S1", "Alicia").unwrap();

        assert_eq!(roster.students()[0].name, "Alicia");
        assert_eq!(roster.students()[2].name, "Second Alice");
        assert!(roster.rename_student("S9", "Nobody").is_err());
    }

    #[test]
    fn empty_roster_report_is_header_only() {
        let roster = Roster::new("Goa University");
        assert_eq!(roster.report(), "Goa University\n----------------\n");
    }

    #[test]
    fn report_lists_students_and_courses() {
        let mut roster = goa();
        roster.enroll_student_in_course("S1", "Math").unwrap();
        roster.enroll_student_in_course("S1", "Physics").unwrap();
        roster.enroll_student_in_course("S2", "Math").unwrap();
        assert!(roster.enroll_student_in_course("S9", "History").is_err());

        let expected = "\
Goa University
----------------
Student ID: S1, Name: Alice
Enrolled Courses:
---> Math
---> Physics

Student ID: S2, Name: Bob
Enrolled Courses:
---> Math

";
        assert_eq!(roster.report(), expected);
    }

    #[test]
    fn report_marks_students_without_courses() {
        let roster = goa();
        let report = roster.report();

        assert_eq!(report.matches("  - None").count(), 2);
    }

    #[test]
    fn report_matches_streamed_report() {
        let mut roster = goa();
        roster.enroll_student_in_course("S1", "Art").unwrap();

        let mut streamed = Vec::new();
        roster.write_report(&mut streamed).unwrap();

        assert_eq!(roster.report().as_bytes(), streamed.as_slice());
    }

    #[test]
    fn report_is_repeatable() {
        let mut roster = goa();
        roster.enroll_student_in_course("S2", "Chemistry").unwrap();

        assert_eq!(roster.report(), roster.report());
    }

    #[test]
    fn serializes_to_json() {
        let mut roster = goa();
        roster.add_course("Math");
        roster.enroll_student_in_course("S1", "Math").unwrap();

        let value = serde_json::to_value(&roster).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "name": "Goa University",
                "students": [
                    { "id": "S1", "name": "Alice", "courses": ["Math"] },
                    { "id": "S2", "name": "Bob", "courses": [] },
                ],
                "offered_courses": ["Math"],
            })
        );
    }
}
