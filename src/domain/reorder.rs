//! Task reordering
//!
//! Moves one task line to another position in the task sequence of a
//! document. The set of line numbers holding tasks never changes: task
//! content is redistributed over the same slots, and every other line stays
//! where it was, byte for byte.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use super::task_line::TaskLine;

/// Where indentation goes when task content is redistributed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IndentationPolicy {
    /// Indentation travels with the task
    #[default]
    FollowTask,
    /// Each line slot keeps its indentation; only checkbox and text move
    FollowSlot,
}

impl IndentationPolicy {
    pub fn as_str(&self) -> &str {
        match self {
            IndentationPolicy::FollowTask => "follow-task",
            IndentationPolicy::FollowSlot => "follow-slot",
        }
    }
}

/// Options for [`reorder_with`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReorderOptions {
    pub indentation: IndentationPolicy,
}

/// A requested move within the task sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TaskMove {
    pub from: usize,
    pub to: usize,
}

impl TaskMove {
    pub fn new(from: usize, to: usize) -> Self {
        Self { from, to }
    }

    /// Applies the move to `text`
    pub fn apply(&self, text: &str, options: &ReorderOptions) -> String {
        reorder_with(text, self.from, self.to, options)
    }
}

/// Extracts the task sequence of a document, top to bottom
pub fn task_sequence(text: &str) -> Vec<TaskLine> {
    text.split('\n')
        .enumerate()
        .filter_map(|(line_number, line)| TaskLine::parse(line_number, line))
        .collect()
}

/// Moves task `from` so it ends up at task index `to`
///
/// Out-of-range or equal indices return the text unchanged.
pub fn reorder(text: &str, from: usize, to: usize) -> String {
    reorder_with(text, from, to, &ReorderOptions::default())
}

/// Like [`reorder`], with an explicit indentation policy
pub fn reorder_with(text: &str, from: usize, to: usize, options: &ReorderOptions) -> String {
    let lines: Vec<&str> = text.split('\n').collect();
    let mut tasks: Vec<TaskLine> = lines
        .iter()
        .enumerate()
        .filter_map(|(line_number, line)| TaskLine::parse(line_number, line))
        .collect();

    if from >= tasks.len() || to >= tasks.len() || from == to {
        return text.to_string();
    }

    // Slots in ascending line order, as scanned
    let slots: Vec<(usize, String)> = tasks
        .iter()
        .map(|t| (t.line_number, t.indentation.clone()))
        .collect();

    let moved = tasks.remove(from);
    tasks.insert(to, moved);

    let mut output: Vec<Cow<'_, str>> = lines.iter().map(|line| Cow::Borrowed(*line)).collect();

    for (mut task, (line_number, slot_indentation)) in tasks.into_iter().zip(slots) {
        task.line_number = line_number;
        if options.indentation == IndentationPolicy::FollowSlot {
            task.indentation = slot_indentation;
        }
        output[line_number] = Cow::Owned(task.render());
    }

    output.join("\n")
}
