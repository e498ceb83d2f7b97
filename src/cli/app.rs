//! Main CLI application structure

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use super::output::{Output, OutputFormat};
use super::{settings_cmd, tasks};
use crate::storage::SettingsFile;
use crate::surface::stylesheet;

#[derive(Parser)]
#[command(name = "tasklist")]
#[command(author, version, about = "Reorder Markdown task lists")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Settings file (defaults to the platform config directory)
    #[arg(long, global = true, env = "TASKLIST_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the tasks of a document with their task indices
    List {
        /// Markdown file
        file: PathBuf,
    },

    /// Move a task to another position
    ///
    /// Examples:
    ///   tasklist move todo.md 0 2      # First task becomes the third
    ///   tasklist move todo.md 3 0 -n   # Print the result instead of saving
    Move {
        /// Markdown file
        file: PathBuf,

        /// Task index to pick up
        from: usize,

        /// Task index to drop on
        to: usize,

        /// Print the reordered document instead of saving it
        #[arg(long, short = 'n')]
        dry_run: bool,
    },

    /// Toggle draggable tasklists for all documents
    Toggle {
        /// Report how many tasks of this file are decorated afterwards
        file: Option<PathBuf>,
    },

    /// Show or change settings
    #[command(subcommand)]
    Settings(settings_cmd::SettingsCommands),

    /// Print the stylesheet for decorated task lists
    Styles,
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let output = Output::new(cli.format, cli.verbose);

    output.verbose("tasklist starting");

    let settings_file = SettingsFile::locate(cli.config)?;
    output.verbose_ctx(
        "settings",
        &format!("Using settings file: {}", settings_file.path().display()),
    );

    match cli.command {
        Commands::List { file } => tasks::list(&output, &settings_file, &file)?,

        Commands::Move {
            file,
            from,
            to,
            dry_run,
        } => {
            output.verbose_ctx(
                "move",
                &format!("Moving task {} to {} in {} (dry_run={})", from, to, file.display(), dry_run),
            );
            tasks::move_task(&output, &settings_file, &file, from, to, dry_run)?
        }

        Commands::Toggle { file } => tasks::toggle(&output, &settings_file, file.as_deref())?,

        Commands::Settings(cmd) => settings_cmd::run(cmd, &output, &settings_file)?,

        Commands::Styles => {
            let settings = settings_file.load()?;
            let css = stylesheet(&settings);

            if output.is_json() {
                output.data(&serde_json::json!({ "css": css }));
            } else {
                print!("{}", css);
            }
        }
    }

    output.verbose("Command completed successfully");
    Ok(())
}
