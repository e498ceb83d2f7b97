//! YAML frontmatter probe
//!
//! Only the `draggable` key matters here; everything else in the block is
//! ignored. A document without a well-formed block has no frontmatter.

use serde::Deserialize;

/// Frontmatter keys read from a document
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Frontmatter {
    /// Opts a single document into draggable tasks
    pub draggable: Option<bool>,
}

impl Frontmatter {
    /// Parses the leading `---` block of a document, if any
    pub fn parse(text: &str) -> Option<Self> {
        let mut lines = text.split('\n');

        if lines.next().map(str::trim_end) != Some("---") {
            return None;
        }

        let mut yaml = String::new();
        for line in lines {
            if line.trim_end() == "---" {
                if yaml.trim().is_empty() {
                    return Some(Self::default());
                }
                return serde_yaml::from_str(&yaml).ok();
            }
            yaml.push_str(line.trim_end_matches('\r'));
            yaml.push('\n');
        }

        None
    }

    /// Returns true when the document asks for draggable tasks
    pub fn wants_draggable(text: &str) -> bool {
        Self::parse(text)
            .and_then(|fm| fm.draggable)
            .unwrap_or(false)
    }
}
