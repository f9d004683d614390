//! Ordering of scanned entries by size.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::entry::Entry;

/// Direction of the size ordering.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumString,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Smallest first.
    Asc,
    /// Largest first.
    #[default]
    Desc,
}

/// Sort entries by `size` only.
///
/// Entries of equal size end up in no particular order.
pub fn sort_entries(entries: &mut [Entry], order: SortOrder) {
    match order {
        SortOrder::Asc => entries.sort_unstable_by(|a, b| a.size.cmp(&b.size)),
        SortOrder::Desc => entries.sort_unstable_by(|a, b| b.size.cmp(&a.size)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(sizes: &[u64]) -> Vec<Entry> {
        sizes
            .iter()
            .enumerate()
            .map(|(i, &size)| Entry::file(format!("f{i}"), format!("/t/f{i}"), size))
            .collect()
    }

    fn sizes(entries: &[Entry]) -> Vec<u64> {
        entries.iter().map(|e| e.size).collect()
    }

    #[test]
    fn test_sort_ascending() {
        let mut list = entries(&[5, 1, 3]);
        sort_entries(&mut list, SortOrder::Asc);
        assert_eq!(sizes(&list), vec![1, 3, 5]);
    }

    #[test]
    fn test_sort_descending() {
        let mut list = entries(&[5, 1, 3]);
        sort_entries(&mut list, SortOrder::Desc);
        assert_eq!(sizes(&list), vec![5, 3, 1]);
    }

    #[test]
    fn test_ties_keep_every_entry() {
        let mut list = entries(&[2, 7, 2, 2, 7]);
        sort_entries(&mut list, SortOrder::Asc);
        assert_eq!(sizes(&list), vec![2, 2, 2, 7, 7]);

        let mut names: Vec<_> = list.iter().map(|e| e.name.to_string()).collect();
        names.sort();
        assert_eq!(names, vec!["f0", "f1", "f2", "f3", "f4"]);
    }

    #[test]
    fn test_parse_sort_order() {
        assert_eq!("asc".parse::<SortOrder>().unwrap(), SortOrder::Asc);
        assert_eq!("desc".parse::<SortOrder>().unwrap(), SortOrder::Desc);
        assert!("ASC".parse::<SortOrder>().is_err());
        assert!("size".parse::<SortOrder>().is_err());
        assert_eq!(SortOrder::Asc.to_string(), "asc");
    }
}
