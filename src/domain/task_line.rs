//! Markdown task-list lines
//!
//! A task line is `<indentation>- [<state>] <description>` where the state is
//! a space (open) or a lowercase `x` (checked). Anything else, including `[X]`
//! and `*` bullets, is ordinary text.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

static TASK_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\s*)- \[([ x])\] (.*)$").expect("task line pattern is valid")
});

/// A single task-list line found in a document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskLine {
    /// Zero-based line number in the document the task was read from
    pub line_number: usize,

    /// Leading whitespace, kept verbatim
    pub indentation: String,

    /// Whether the checkbox is ticked
    pub checked: bool,

    /// Text after the checkbox
    pub description: String,
}

impl TaskLine {
    /// Parses a line, returning `None` when it is not a task line
    pub fn parse(line_number: usize, line: &str) -> Option<Self> {
        let caps = TASK_LINE.captures(line)?;

        Some(Self {
            line_number,
            indentation: caps[1].to_string(),
            checked: &caps[2] == "x",
            description: caps[3].to_string(),
        })
    }

    /// Returns true if the line matches the task line pattern
    pub fn is_task_line(line: &str) -> bool {
        TASK_LINE.is_match(line)
    }

    /// Indentation width in characters
    pub fn depth(&self) -> usize {
        self.indentation.chars().count()
    }

    /// Renders the task back to its line form
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for TaskLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = if self.checked { 'x' } else { ' ' };
        write!(f, "{}- [{}] {}", self.indentation, mark, self.description)
    }
}
