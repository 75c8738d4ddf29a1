use std::{
    io::{self, BufRead, Write},
    path::Path,
};

use anyhow::Context;
use roster::{Command, Config, MenuChoice, Reply, ReportFormat, Roster, session::dispatch};
use tracing::instrument;

use super::terminal::{paint_warning, supports_color};

#[derive(Debug, Default, clap::Parser)]
#[command(about = "Add students, enrol them in courses and display the roster")]
pub struct Shell {
    /// Override the roster name from the configuration
    #[arg(long)]
    name: Option<String>,

    /// Format used by 'Display Information'
    #[arg(long, value_name = "FORMAT", default_value = "text")]
    output: ReportFormat,
}

impl Shell {
    #[instrument(level = "debug", skip(self))]
    pub fn run(self, config_path: &Path) -> anyhow::Result<()> {
        let roster = build_roster(config_path, self.name)?;
        tracing::info!(
            courses = roster.offered_courses().len(),
            "starting session for {}",
            roster.name()
        );

        let stdin = io::stdin();
        let stdout = io::stdout();
        let mut repl = Repl::new(roster, stdin.lock(), stdout.lock(), self.output)
            .with_color(supports_color());
        repl.run().context("console I/O failed")
    }
}

/// Loads the configuration and builds the starting roster, applying a name
/// override if one is given.
fn build_roster(config_path: &Path, name: Option<String>) -> anyhow::Result<Roster> {
    let mut config = Config::load_or_default(config_path)
        .with_context(|| format!("failed to load {}", config_path.display()))?;
    if let Some(name) = name {
        config.name = name;
    }
    Ok(config.roster())
}

/// The menu loop, reading from any line source and writing to any sink.
struct Repl<R, W> {
    roster: Roster,
    input: R,
    output: W,
    format: ReportFormat,
    color: bool,
}

impl<R: BufRead, W: Write> Repl<R, W> {
    fn new(roster: Roster, input: R, output: W, format: ReportFormat) -> Self {
        Self {
            roster,
            input,
            output,
            format,
            color: false,
        }
    }

    fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Runs until the user exits or input ends.
    fn run(&mut self) -> io::Result<()> {
        loop {
            for choice in MenuChoice::ALL {
                writeln!(self.output, "{choice}")?;
            }
            let Some(line) = self.prompt("Choose an option: ")? else {
                return Ok(());
            };

            let choice = match line.parse::<MenuChoice>() {
                Ok(choice) => choice,
                Err(e) => {
                    self.warn(&e.to_string())?;
                    continue;
                }
            };

            let Some(command) = self.read_command(choice)? else {
                return Ok(());
            };

            match dispatch(&mut self.roster, command, self.format) {
                Reply::StudentAdded | Reply::Enrolled => {}
                Reply::NotFound(e) => self.warn(&e.to_string())?,
                Reply::Report(report) => write!(self.output, "{report}")?,
                Reply::Exit => {
                    writeln!(self.output, "Exiting...")?;
                    return self.output.flush();
                }
            }
        }
    }

    /// Collects the fields a menu choice needs. `None` means input ended.
    fn read_command(&mut self, choice: MenuChoice) -> io::Result<Option<Command>> {
        let command = match choice {
            MenuChoice::AddStudent => {
                let Some(id) = self.prompt("Enter student ID: ")? else {
                    return Ok(None);
                };
                let Some(name) = self.prompt("Enter student name: ")? else {
                    return Ok(None);
                };
                Command::AddStudent { id, name }
            }
            MenuChoice::EnrollStudent => {
                let Some(id) = self.prompt("Enter student ID: ")? else {
                    return Ok(None);
                };
                let Some(course) = self.prompt("Enter course name: ")? else {
                    return Ok(None);
                };
                Command::Enroll { id, course }
            }
            MenuChoice::Display => Command::Display,
            MenuChoice::Exit => Command::Exit,
        };
        Ok(Some(command))
    }

    /// Prints a prompt and reads one line, minus its line terminator.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut buffer = Vec::new();
        if self.input.read_until(b'\n', &mut buffer)? == 0 {
            return Ok(None);
        }
        if buffer.last() == Some(&b'\n') {
            buffer.pop();
            if buffer.last() == Some(&b'\r') {
                buffer.pop();
            }
        }
        // invalid UTF-8 is replaced, so it reaches menu parsing as bad input
        Ok(Some(String::from_utf8_lossy(&buffer).into_owned()))
    }

    fn warn(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{}", paint_warning(message, self.color))
    }

    #[cfg(test)]
    fn into_roster(self) -> Roster {
        self.roster
    }
}
