//! In-memory University Roster
//!
//! Tracks the students of a university and the courses each has enrolled
//! in.

pub mod domain;
pub use domain::{Config, ConfigError, Roster, RosterError, Student};

/// Console-free command dispatch for interactive front ends.
pub mod session;
pub use session::{Command, MenuChoice, MenuError, Reply, ReportFormat};
