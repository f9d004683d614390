//! Recursive subtree sizing.

use std::path::Path;

use jwalk::{Parallelism, WalkDir};
use tracing::debug;

/// Total byte count of everything under `path`.
///
/// Regular files (and any other non-directory entries) contribute their
/// length; every directory below `path` contributes its own metadata size as
/// reported by the filesystem. The metadata of `path` itself is excluded so
/// that a directory sized from one level up is not counted twice.
///
/// Any traversal or metadata error aborts the walk and yields `0` for the
/// whole subtree; there is no partial result.
pub fn compute_size(path: impl AsRef<Path>) -> u64 {
    let path = path.as_ref();

    // Serial walk: callers already size many subtrees at once.
    let walker = WalkDir::new(path)
        .parallelism(Parallelism::Serial)
        .skip_hidden(false)
        .follow_links(false)
        .min_depth(0);

    let mut total: u64 = 0;

    for entry_result in walker {
        let entry = match entry_result {
            Ok(e) => e,
            Err(err) => {
                debug!(path = %path.display(), error = %err, "subtree walk failed, size collapsed to zero");
                return 0;
            }
        };

        // jwalk reports an unreadable directory on its entry and keeps going.
        if let Some(err) = &entry.read_children_error {
            debug!(path = %entry.path().display(), error = %err, "directory unreadable, size collapsed to zero");
            return 0;
        }

        let is_dir = entry.file_type().is_dir();
        if is_dir && entry.depth() == 0 {
            continue;
        }

        let metadata = match entry.metadata() {
            Ok(m) => m,
            Err(err) => {
                debug!(path = %entry.path().display(), error = %err, "metadata unavailable, size collapsed to zero");
                return 0;
            }
        };

        total += metadata.len();
    }

    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn dir_weight(path: &Path) -> u64 {
        fs::metadata(path).unwrap().len()
    }

    #[test]
    fn test_flat_directory_sums_files() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("a"), vec![0u8; 10]).unwrap();
        fs::write(temp.path().join("b"), vec![0u8; 20]).unwrap();
        fs::write(temp.path().join("c"), vec![0u8; 30]).unwrap();

        assert_eq!(compute_size(temp.path()), 60);
    }

    #[test]
    fn test_nested_directories_add_their_metadata() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        fs::create_dir_all(root.join("one/two")).unwrap();
        fs::write(root.join("top.txt"), vec![0u8; 10]).unwrap();
        fs::write(root.join("one/mid.txt"), vec![0u8; 20]).unwrap();
        fs::write(root.join("one/two/deep.txt"), vec![0u8; 30]).unwrap();

        let expected = 60 + dir_weight(&root.join("one")) + dir_weight(&root.join("one/two"));
        assert_eq!(compute_size(root), expected);
    }

    #[test]
    fn test_hidden_entries_are_counted() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".hidden"), vec![0u8; 7]).unwrap();

        assert_eq!(compute_size(temp.path()), 7);
    }

    #[test]
    fn test_empty_directory_is_zero() {
        let temp = TempDir::new().unwrap();
        assert_eq!(compute_size(temp.path()), 0);
    }

    #[test]
    fn test_file_root_is_its_length() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("single.bin");
        fs::write(&file, vec![0u8; 42]).unwrap();

        assert_eq!(compute_size(&file), 42);
    }

    #[test]
    fn test_missing_path_is_zero() {
        let temp = TempDir::new().unwrap();
        assert_eq!(compute_size(temp.path().join("nope")), 0);
    }

    /// A chain of `depth` directories with long names under `base`.
    #[cfg(unix)]
    fn long_chain(base: &Path, tag: char, depth: usize) -> std::path::PathBuf {
        let segment: String = std::iter::repeat_n(tag, 250).collect();
        let mut path = base.to_path_buf();
        for _ in 0..depth {
            path.push(&segment);
        }
        fs::create_dir_all(&path).unwrap();
        path
    }

    // Paths past PATH_MAX cannot be listed, even by root, so this failure
    // deep in the tree does not depend on permission bits.
    #[cfg(unix)]
    #[test]
    fn test_unlistable_deep_directory_collapses_to_zero() {
        let temp = TempDir::new().unwrap();
        let top = temp.path().join("top");
        let upper = long_chain(&top, 'a', 9);
        fs::write(top.join("payload.bin"), vec![0u8; 4096]).unwrap();

        let lower = long_chain(&temp.path().join("lower"), 'b', 9);
        fs::write(lower.join("deep.bin"), vec![0u8; 16]).unwrap();
        fs::rename(temp.path().join("lower"), upper.join("lower")).unwrap();

        assert_eq!(compute_size(&top), 0);
    }
}
