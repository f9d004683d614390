//! Scan result container.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::entry::Entry;
use crate::sort::{SortOrder, sort_entries};

/// Immediate children of a scanned directory, with their sizes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Listing {
    /// Root path that was scanned.
    pub root: PathBuf,

    /// One entry per readable child of the root.
    pub entries: Vec<Entry>,

    /// Duration of the scan.
    pub duration: Duration,
}

impl Listing {
    /// Create a new listing.
    pub fn new(root: impl Into<PathBuf>, entries: Vec<Entry>, duration: Duration) -> Self {
        Self {
            root: root.into(),
            entries,
            duration,
        }
    }

    /// Order the entries by size.
    pub fn sort(&mut self, order: SortOrder) {
        sort_entries(&mut self.entries, order);
    }

    /// Sum of the entry sizes.
    pub fn total_size(&self) -> u64 {
        self.entries.iter().map(|e| e.size).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consume the listing, keeping only the entries.
    pub fn into_entries(self) -> Vec<Entry> {
        self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing() -> Listing {
        Listing::new(
            "/data",
            vec![
                Entry::file("a", "/data/a", 10),
                Entry::directory("b", "/data/b", 300),
                Entry::file("c", "/data/c", 20),
            ],
            Duration::from_millis(5),
        )
    }

    #[test]
    fn test_total_size() {
        assert_eq!(listing().total_size(), 330);
        assert_eq!(listing().len(), 3);
        assert!(!listing().is_empty());
    }

    #[test]
    fn test_sort_listing() {
        let mut listing = listing();
        listing.sort(SortOrder::Desc);
        let names: Vec<_> = listing.entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["b", "c", "a"]);
    }
}
