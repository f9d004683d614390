//! Directory scanning engine for dirsize.
//!
//! Lists the immediate children of a directory and computes the size of
//! each one: file length for files, recursive subtree size for directories.
//!
//! # Overview
//!
//! - **Size aggregation** via a serial jwalk traversal per subtree
//! - **Bounded fan-out** over a dedicated rayon pool, one task per child
//! - **No shared state**: each task returns its entry to the coordinator
//!
//! A failure below the root never fails the scan. Unreadable files are left
//! out of the listing and unreadable subtrees report a size of zero.
//!
//! # Example
//!
//! ```rust,no_run
//! use dirsize_scan::{DirScanner, SortOrder};
//!
//! let scanner = DirScanner::new().unwrap();
//! let listing = scanner.scan_sorted("/path/to/scan", SortOrder::Desc).unwrap();
//!
//! for entry in &listing.entries {
//!     println!("{} {}", entry.name, entry.human_size());
//! }
//! ```

mod scanner;
mod size;

pub use scanner::DirScanner;
pub use size::compute_size;

// Re-export core types for convenience
pub use dirsize_core::{
    Entry, HumanSize, Listing, RequestError, ScanError, ScanRequest, SizeUnit, SortOrder,
};
