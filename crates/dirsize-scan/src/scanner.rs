//! Directory scanner: sizes every immediate child of a root on a worker pool.

use std::fs;
use std::path::Path;
use std::time::Instant;

use compact_str::CompactString;
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use tracing::debug;

use dirsize_core::{Entry, Listing, ScanError, ScanRequest, SortOrder};

use crate::size::compute_size;

/// Worker threads per available CPU. Sizing subtrees is I/O bound.
const WORKERS_PER_CPU: usize = 2;

/// Upper bound on concurrent subtree walks.
const MAX_WORKERS: usize = 64;

/// Lists a directory and sizes each child concurrently.
///
/// Children are processed on a dedicated, fixed-size rayon pool. Every child
/// task returns its own [`Entry`] and the results are collected once all
/// tasks have finished, so nothing observes a partial listing.
pub struct DirScanner {
    pool: ThreadPool,
}

impl DirScanner {
    /// Create a scanner with the default number of workers.
    pub fn new() -> Result<Self, ScanError> {
        Self::with_workers(default_workers())
    }

    /// Create a scanner backed by exactly `workers` threads (at least one).
    pub fn with_workers(workers: usize) -> Result<Self, ScanError> {
        let pool = ThreadPoolBuilder::new()
            .num_threads(workers.max(1))
            .thread_name(|i| format!("dirsize-scan-{i}"))
            .build()
            .map_err(|e| ScanError::WorkerPool {
                message: e.to_string(),
            })?;

        Ok(Self { pool })
    }

    /// Number of worker threads.
    pub fn workers(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Scan the immediate children of `root`.
    ///
    /// Fails only when `root` itself cannot be listed. A directory child whose
    /// walk fails gets size `0`; a file child whose metadata cannot be read
    /// is left out. Entry order is unspecified.
    pub fn scan(&self, root: impl AsRef<Path>) -> Result<Listing, ScanError> {
        let start = Instant::now();
        let root = root.as_ref();

        let children = fs::read_dir(root)
            .and_then(|read_dir| read_dir.collect::<Result<Vec<_>, _>>())
            .map_err(|e| ScanError::io(root, e))?;

        let child_count = children.len();
        let entries: Vec<Entry> = self
            .pool
            .install(|| children.into_par_iter().filter_map(scan_child).collect());

        let duration = start.elapsed();
        debug!(
            root = %root.display(),
            children = child_count,
            entries = entries.len(),
            elapsed = ?duration,
            "scan complete"
        );

        Ok(Listing::new(root, entries, duration))
    }

    /// Scan `root` and order the entries by size.
    pub fn scan_sorted(&self, root: impl AsRef<Path>, order: SortOrder) -> Result<Listing, ScanError> {
        let mut listing = self.scan(root)?;
        listing.sort(order);
        Ok(listing)
    }

    /// Run a validated request.
    pub fn run(&self, request: &ScanRequest) -> Result<Listing, ScanError> {
        self.scan_sorted(&request.root, request.sort)
    }
}

/// Size one child of the root.
///
/// Classification uses the file type from the directory listing.
fn scan_child(child: fs::DirEntry) -> Option<Entry> {
    let path = child.path();
    let name = CompactString::new(child.file_name().to_string_lossy());

    let file_type = match child.file_type() {
        Ok(t) => t,
        Err(err) => {
            debug!(path = %path.display(), error = %err, "file type unavailable, skipping");
            return None;
        }
    };

    if file_type.is_dir() {
        let size = compute_size(&path);
        return Some(Entry::directory(name, path, size));
    }

    match child.metadata() {
        Ok(metadata) => Some(Entry::file(name, path, metadata.len())),
        Err(err) => {
            debug!(path = %path.display(), error = %err, "metadata unavailable, skipping");
            None
        }
    }
}

fn default_workers() -> usize {
    let cpus = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    (cpus * WORKERS_PER_CPU).clamp(1, MAX_WORKERS)
}
