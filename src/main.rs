//! tasklist - reorder Markdown task lists from the command line

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = draggable_tasklist::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
