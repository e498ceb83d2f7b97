//! # Storage Layer
//!
//! Document access and user settings.
//!
//! | Data | Format | Location |
//! |------|--------|----------|
//! | Documents | Markdown, `\n` separated | any path |
//! | Settings | TOML | `<config dir>/settings.toml` |
//!
//! ## Concurrency Safety
//!
//! - [`FileDocument`] uses file locking (`fs2`): shared for reads,
//!   exclusive for writes
//! - Document writes are atomic (temp file + rename)
//!
//! ## Key Types
//!
//! - [`DocumentSource`] / [`PersistenceSink`] - what the controller reads
//!   from and saves to
//! - [`FileDocument`] - both, for a file on disk
//! - [`Settings`] - immutable user configuration
//! - [`SettingsFile`] - loads and saves [`Settings`]

mod config;
mod document;

pub use config::{
    ConfigError, DragHandleStyle, Settings, SettingsFile, ANIMATION_SPEED_STEP,
    MAX_ANIMATION_SPEED,
};
pub use document::{Buffer, Discard, DocumentSource, FileDocument, PersistenceSink};
