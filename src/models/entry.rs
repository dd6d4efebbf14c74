use serde::{Deserialize, Serialize};

/// Whether a tree entry is file content or a directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// File content
    Blob,

    /// A directory
    Tree,
}

/// One path record from a source-control tree listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepoEntry {
    /// Path relative to the repository root, slash-separated, never
    /// starting with `/`
    pub path: String,

    /// Blob or tree
    #[serde(rename = "type")]
    pub kind: EntryKind,

    /// Opaque handle used later to fetch the entry's bytes. Tree entries
    /// may omit it.
    #[serde(default)]
    pub content_ref: String,
}

impl RepoEntry {
    /// Create a new blob entry
    pub fn blob(path: impl Into<String>, content_ref: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind: EntryKind::Blob,
            content_ref: content_ref.into(),
        }
    }

    /// Create a new tree (directory) entry
    pub fn tree(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind: EntryKind::Tree,
            content_ref: String::new(),
        }
    }

    /// The final path segment
    pub fn name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }
}
