use std::path::Path;

use roster::Config;
use tracing::instrument;

use crate::cli::terminal::Colorize;

#[derive(Debug, clap::Parser)]
/// Show or modify the roster configuration
///
/// Configuration is stored in roster.toml (see --config) and controls the
/// roster name and the courses offered when a session starts.
///
/// Available configuration keys:
///   name     Name printed at the top of every report
///   courses  Comma-separated list of offered courses
pub struct Command {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Debug, clap::Parser)]
enum ConfigCommand {
    /// Show all configuration values
    Show,

    /// Get a specific configuration value
    Get {
        /// Configuration key to retrieve (name, courses)
        key: String,
    },

    /// Set a configuration value
    ///
    /// Examples:
    ///   roster config set name "Goa University"
    ///   roster config set courses "Math,Physics"
    Set {
        /// Configuration key to set (name, courses)
        key: String,

        /// Value to set
        value: String,
    },
}

impl Command {
    #[instrument]
    pub fn run(self, config_path: &Path) -> anyhow::Result<()> {
        let config = Config::load_or_default(config_path)?;

        match self.command {
            ConfigCommand::Show => {
                Self::show_config(&config);
                Ok(())
            }
            ConfigCommand::Get { key } => Self::get_config(&config, &key),
            ConfigCommand::Set { key, value } => {
                Self::set_config(config, config_path, &key, &value)
            }
        }
    }

    fn show_config(config: &Config) {
        println!("Configuration:");
        println!("  name: {}", config.name);
        if config.courses.is_empty() {
            println!("  courses: {} (none offered)", "[]".dim());
        } else {
            println!("  courses: {:?}", config.courses);
        }
    }

    fn get_config(config: &Config, key: &str) -> anyhow::Result<()> {
        match key {
            "name" => println!("{}", config.name),
            "courses" => {
                for course in &config.courses {
                    println!("{course}");
                }
            }
            _ => anyhow::bail!(
                "Unknown configuration key: '{key}'\n\nAvailable keys:\n  name\n  courses"
            ),
        }
        Ok(())
    }

    fn set_config(
        mut config: Config,
        config_path: &Path,
        key: &str,
        value: &str,
    ) -> anyhow::Result<()> {
        match key {
            "name" => config.name = value.to_string(),
            "courses" => config.courses = parse_courses(value),
            _ => anyhow::bail!("Unknown configuration key: '{key}'\nSupported keys: name, courses"),
        }

        config.save(config_path)?;
        println!("{}", format!("✅ Updated {key}").success());
        Ok(())
    }
}

/// Splits a comma-separated course list, dropping blank entries.
fn parse_courses(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|course| !course.is_empty())
        .map(ToString::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_comma_separated_courses() {
        assert_eq!(parse_courses("Math, Physics,,Art "), ["Math", "Physics", "Art"]);
        assert!(parse_courses("").is_empty());
    }

    #[test]
    fn set_writes_config_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("roster.toml");

        Command::set_config(Config::default(), &path, "courses", "Math,Art").unwrap();
        Command::set_config(Config::load(&path).unwrap(), &path, "name", "Test College").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.name, "Test College");
        assert_eq!(config.courses, ["Math", "Art"]);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("roster.toml");

        assert!(Command::set_config(Config::default(), &path, "colour", "red").is_err());
        assert!(Command::get_config(&Config::default(), "colour").is_err());
        assert!(!path.exists());
    }
}
