//! Domain models for draggable tasklists
//!
//! Contains the reorder logic without any I/O concerns.

mod frontmatter;
mod reorder;
mod task_line;

pub use frontmatter::Frontmatter;
pub use reorder::{reorder, reorder_with, task_sequence, IndentationPolicy, ReorderOptions, TaskMove};
pub use task_line::TaskLine;
