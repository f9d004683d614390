//! Core types for dirsize.
//!
//! This crate provides the data structures shared by the scanner and the
//! front ends: scanned entries, listings, sort order, request validation and
//! the decimal unit ladder used for human-readable sizes.

mod entry;
mod error;
mod listing;
mod request;
mod sort;
mod units;

pub use entry::Entry;
pub use error::{RequestError, ScanError};
pub use listing::Listing;
pub use request::{ScanRequest, ScanRequestBuilder};
pub use sort::{SortOrder, sort_entries};
pub use units::{HumanSize, SizeUnit, UNIT_BASE};
