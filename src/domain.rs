//! Domain models for roster management.
//!
//! This module contains the core domain types: students, the roster that
//! owns them, and start-up configuration.

mod config;
pub use config::{Config, ConfigError};

/// The roster of students and offered courses.
pub mod roster;
pub use roster::{Roster, RosterError};

mod student;
pub use student::Student;
