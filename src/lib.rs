//! Draggable Tasklist - reorder Markdown task lists by drag gesture
//!
//! A drag gesture names two positions in a document's task sequence (the
//! task picked up and the task it was dropped on). This crate turns that
//! pair into new document text with the task moved, leaving every other
//! line untouched, and writes it back through a document source.

pub mod cli;
pub mod controller;
pub mod domain;
pub mod storage;
pub mod surface;

pub use controller::{Controller, ControllerError, MoveOutcome};
pub use domain::{reorder, reorder_with, task_sequence, TaskLine, TaskMove};
pub use storage::Settings;
