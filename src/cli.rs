use std::path::{Path, PathBuf};

mod config;
mod shell;
mod terminal;

use clap::ArgAction;
use shell::Shell;
use tracing::instrument;

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global=true)]
    verbose: u8,

    /// The path to the roster configuration file
    #[arg(short, long, default_value = "roster.toml", global = true)]
    config: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        self.command
            .unwrap_or_else(|| Command::Shell(Shell::default()))
            .run(self.config)
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        // stdout belongs to the interactive shell
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

#[derive(Debug, clap::Parser)]
pub enum Command {
    /// Start the interactive roster menu (default)
    Shell(Shell),

    /// Write a default configuration file
    Init(Init),

    /// Show or modify configuration settings
    Config(config::Command),
}

impl Command {
    fn run(self, config_path: PathBuf) -> anyhow::Result<()> {
        match self {
            Self::Shell(command) => command.run(&config_path)?,
            Self::Init(command) => command.run(&config_path)?,
            Self::Config(command) => command.run(&config_path)?,
        }
        Ok(())
    }
}

#[derive(Debug, clap::Parser)]
pub struct Init {
    /// Overwrite an existing configuration file
    #[arg(long)]
    force: bool,
}

impl Init {
    #[instrument]
    fn run(self, config_path: &Path) -> anyhow::Result<()> {
        use terminal::Colorize;

        if config_path.exists() && !self.force {
            anyhow::bail!(
                "Configuration already exists at {} (use --force to overwrite)",
                config_path.display()
            );
        }

        roster::Config::default()
            .save(config_path)
            .map_err(|e| anyhow::anyhow!("Failed to create {}: {e}", config_path.display()))?;

        println!(
            "{}",
            format!("✅ Wrote default configuration to {}", config_path.display()).success()
        );
        println!();
        println!("Next steps:");
        println!("  roster config set courses \"Math,Physics\"");
        println!("  roster");

        Ok(())
    }
}
