//! HTML page view model.

use std::path::Path;
use std::time::Duration;

use askama::Template;

use dirsize_core::{Entry, Listing, ScanError};

/// One row of the listing table.
#[derive(Debug, Clone, PartialEq)]
pub struct PageEntry {
    pub name: String,
    pub size: String,
    pub is_dir: bool,
}

impl From<&Entry> for PageEntry {
    fn from(entry: &Entry) -> Self {
        Self {
            name: entry.name.to_string(),
            size: entry.human_size().to_string(),
            is_dir: entry.is_dir(),
        }
    }
}

/// Askama view model for the directory listing page.
#[derive(Debug, Template)]
#[template(path = "index.html")]
pub struct IndexPage {
    pub entries: Vec<PageEntry>,
    pub elapsed: String,
    pub error_msg: String,
    pub last_path: String,
}

impl IndexPage {
    /// The bare form, shown when no directory was requested.
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
            elapsed: String::new(),
            error_msg: String::new(),
            last_path: String::new(),
        }
    }

    /// A sorted listing with human-readable sizes.
    pub fn listing(listing: &Listing, root: &Path, elapsed: Duration) -> Self {
        Self {
            entries: listing.entries.iter().map(PageEntry::from).collect(),
            elapsed: format!("{elapsed:?}"),
            error_msg: String::new(),
            last_path: root.display().to_string(),
        }
    }

    /// The form with an error in place of the listing.
    pub fn failure(error: &ScanError, root: &Path, elapsed: Duration) -> Self {
        Self {
            entries: Vec::new(),
            elapsed: format!("{elapsed:?}"),
            error_msg: format!("Failed to read directory: {error}"),
            last_path: root.display().to_string(),
        }
    }
}
