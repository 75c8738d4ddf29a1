//! Menu selections, commands and their replies.
//!
//! Front ends read input however they like, build a [`Command`], and hand it
//! to [`dispatch`]. Nothing here touches the console, and exiting the process
//! is left to the caller.

use std::{fmt, str::FromStr};

use crate::domain::{Roster, RosterError};

/// An entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// 1. Add Student
    AddStudent,
    /// 2. Enroll Student in Course
    EnrollStudent,
    /// 3. Display Information
    Display,
    /// 4. Exit
    Exit,
}

impl MenuChoice {
    /// All menu entries, in the order they are listed.
    pub const ALL: [Self; 4] = [Self::AddStudent, Self::EnrollStudent, Self::Display, Self::Exit];

    /// The number a user types to select this entry.
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::AddStudent => 1,
            Self::EnrollStudent => 2,
            Self::Display => 3,
            Self::Exit => 4,
        }
    }

    /// The menu label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::AddStudent => "Add Student",
            Self::EnrollStudent => "Enroll Student in Course",
            Self::Display => "Display Information",
            Self::Exit => "Exit",
        }
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}. {}", self.number(), self.label())
    }
}

impl FromStr for MenuChoice {
    type Err = MenuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let number: i64 = trimmed
            .parse()
            .map_err(|_| MenuError::NotANumber(trimmed.to_string()))?;

        Self::ALL
            .into_iter()
            .find(|choice| i64::from(choice.number()) == number)
            .ok_or(MenuError::InvalidChoice(number))
    }
}

/// Error returned when a line cannot be read as a menu selection.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum MenuError {
    /// The input was not an integer.
    #[error("Invalid input. Please enter a number.")]
    NotANumber(String),

    /// The input was an integer that matches no menu entry.
    #[error("Invalid choice.")]
    InvalidChoice(i64),
}

/// How the roster report is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ReportFormat {
    /// The plain text listing.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

impl ReportFormat {
    /// Renders the roster in this format.
    ///
    /// # Panics
    ///
    /// Panics if JSON serialization fails (which should never happen for
    /// roster data, which is made only of strings and lists).
    #[must_use]
    pub fn render(self, roster: &Roster) -> String {
        match self {
            Self::Text => roster.report(),
            Self::Json => {
                let mut json =
                    serde_json::to_string_pretty(roster).expect("this should never fail");
                json.push('\n');
                json
            }
        }
    }
}

/// A fully-read request against the roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Add a student with the given ID and name.
    AddStudent {
        /// Student ID, used verbatim.
        id: String,
        /// Student name, used verbatim.
        name: String,
    },

    /// Enrol a student in a course.
    Enroll {
        /// ID of the student to enrol.
        id: String,
        /// Course name, used verbatim.
        course: String,
    },

    /// Produce the roster report.
    Display,

    /// End the session.
    Exit,
}

/// The outcome of a dispatched [`Command`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// The student was added.
    StudentAdded,
    /// The enrolment was recorded.
    Enrolled,
    /// The student to enrol does not exist; nothing changed.
    NotFound(RosterError),
    /// The rendered roster report.
    Report(String),
    /// The session should end.
    Exit,
}

/// Applies a command to the roster.
#[must_use]
pub fn dispatch(roster: &mut Roster, command: Command, format: ReportFormat) -> Reply {
    match command {
        Command::AddStudent { id, name } => {
            roster.add_student(&id, &name);
            Reply::StudentAdded
        }
        Command::Enroll { id, course } => match roster.enroll_student_in_course(&id, &course) {
            Ok(()) => Reply::Enrolled,
            Err(e) => Reply::NotFound(e),
        },
        Command::Display => Reply::Report(format.render(roster)),
        Command::Exit => Reply::Exit,
    }
}
