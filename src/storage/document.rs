//! Document sources and persistence sinks
//!
//! A [`DocumentSource`] is the editor buffer the reorder reads from and
//! writes back into. A [`PersistenceSink`] writes the result to durable
//! storage. [`FileDocument`] is both, backed by a single Markdown file;
//! [`Buffer`] is an in-memory source for hosts without a file.

use std::fs::{self, File, OpenOptions};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use fs2::FileExt;

/// Supplies the current document text and accepts its replacement
pub trait DocumentSource {
    /// Returns the full text of the document
    fn text(&self) -> Result<String>;

    /// Replaces the full text of the document
    fn replace(&mut self, text: &str) -> Result<()>;
}

/// Writes document text to durable storage
pub trait PersistenceSink {
    fn persist(&mut self, text: &str) -> Result<()>;
}

/// In-memory document, e.g. an editor buffer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Buffer {
    text: String,
}

impl Buffer {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

impl DocumentSource for Buffer {
    fn text(&self) -> Result<String> {
        Ok(self.text.clone())
    }

    fn replace(&mut self, text: &str) -> Result<()> {
        self.text = text.to_string();
        Ok(())
    }
}

/// Sink that drops everything, for hosts that never save
#[derive(Debug, Clone, Copy, Default)]
pub struct Discard;

impl PersistenceSink for Discard {
    fn persist(&mut self, _text: &str) -> Result<()> {
        Ok(())
    }
}

/// Markdown file on disk
///
/// Reads take a shared lock; writes go to a temp file under an exclusive
/// lock and are renamed over the original.
pub struct FileDocument {
    path: PathBuf,
}

impl FileDocument {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path to the document
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<String> {
        let mut file = File::open(&self.path)
            .with_context(|| format!("Failed to open document: {}", self.path.display()))?;

        file.lock_shared()
            .context("Failed to acquire read lock on document")?;

        let mut text = String::new();
        file.read_to_string(&mut text)
            .with_context(|| format!("Failed to read document: {}", self.path.display()))?;

        // Lock is released when file is dropped
        Ok(text)
    }

    fn write(&self, text: &str) -> Result<()> {
        let file_name = self
            .path
            .file_name()
            .ok_or_else(|| anyhow::anyhow!("Not a file path: {}", self.path.display()))?;

        let mut temp_name = file_name.to_os_string();
        temp_name.push(".tmp");
        let temp_path = self.path.with_file_name(temp_name);

        {
            let file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(&temp_path)
                .with_context(|| format!("Failed to create temp file: {}", temp_path.display()))?;

            file.lock_exclusive()
                .context("Failed to acquire write lock on document")?;

            let mut writer = &file;
            writer
                .write_all(text.as_bytes())
                .context("Failed to write document")?;
            writer.flush().context("Failed to flush document")?;
        }

        // Atomic rename
        fs::rename(&temp_path, &self.path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                temp_path.display(),
                self.path.display()
            )
        })?;

        Ok(())
    }
}

impl DocumentSource for FileDocument {
    fn text(&self) -> Result<String> {
        self.read()
    }

    fn replace(&mut self, text: &str) -> Result<()> {
        self.write(text)
    }
}

impl PersistenceSink for FileDocument {
    fn persist(&mut self, text: &str) -> Result<()> {
        self.write(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn buffer_replace() {
        let mut buffer = Buffer::new("- [ ] A");
        buffer.replace("- [x] A").unwrap();
        assert_eq!(buffer.text().unwrap(), "- [x] A");
        assert_eq!(buffer.into_string(), "- [x] A");
    }

    #[test]
    fn file_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("todo.md");
        fs::write(&path, "- [ ] A\n- [ ] B\n").unwrap();

        let mut doc = FileDocument::new(&path);
        assert_eq!(doc.text().unwrap(), "- [ ] A\n- [ ] B\n");

        doc.persist("- [ ] B\n- [ ] A\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "- [ ] B\n- [ ] A\n");
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let doc = FileDocument::new(dir.path().join("absent.md"));

        let err = doc.text().unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to open document"));
    }

    #[test]
    fn atomic_write_no_temp_file_left() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("todo.md");
        fs::write(&path, "- [ ] A\n").unwrap();

        let mut doc = FileDocument::new(&path);
        doc.replace("- [x] A\n").unwrap();

        assert!(!dir.path().join("todo.md.tmp").exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), "- [x] A\n");
    }
}
