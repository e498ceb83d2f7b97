//! # Command-Line Interface
//!
//! A minimal host for draggable tasklists: it renders nothing, but drives
//! the same controller a graphical host would.
//!
//! | Command | Purpose |
//! |---------|---------|
//! | `list FILE` | Show tasks with their task indices |
//! | `move FILE FROM TO` | Move a task and save (or print) the result |
//! | `toggle [FILE]` | Turn draggable tasklists on or off |
//! | `settings show/set/reset` | Manage settings |
//! | `styles` | Print the generated stylesheet |
//!
//! ## Output Formats
//!
//! All commands support `--format text|json`.
//!
//! ## Verbose Mode
//!
//! Use `--verbose` (or `-v`) for debug output on stderr:
//! ```bash
//! tasklist --verbose move todo.md 0 2
//! ```
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute the appropriate command.

mod app;
mod output;
mod settings_cmd;
mod tasks;

pub use app::{run, Cli, Commands};
pub use output::{Output, OutputFormat};
