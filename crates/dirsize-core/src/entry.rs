//! Scanned file and directory entries.

use std::path::{Path, PathBuf};

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

use crate::units::HumanSize;

/// One immediate child of a scanned directory.
///
/// `name` and `path` are fixed when the entry is created. `size` is the
/// aggregate byte count: the file length for files, the recursive subtree size
/// for directories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// File/directory name (not full path).
    pub name: CompactString,

    /// Size in bytes (aggregate for directories).
    pub size: u64,

    /// Whether this entry is a directory.
    pub is_dir: bool,

    /// Full path the size was derived from.
    pub path: PathBuf,
}

impl Entry {
    /// Create a file entry.
    pub fn file(name: impl Into<CompactString>, path: impl Into<PathBuf>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
            is_dir: false,
            path: path.into(),
        }
    }

    /// Create a directory entry.
    pub fn directory(name: impl Into<CompactString>, path: impl Into<PathBuf>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
            is_dir: true,
            path: path.into(),
        }
    }

    /// Check if this entry is a directory.
    pub fn is_dir(&self) -> bool {
        self.is_dir
    }

    /// Check if this entry is a file.
    pub fn is_file(&self) -> bool {
        !self.is_dir
    }

    /// Full path of the entry.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Size rescaled to the decimal unit ladder.
    pub fn human_size(&self) -> HumanSize {
        HumanSize::from_bytes(self.size)
    }
}
