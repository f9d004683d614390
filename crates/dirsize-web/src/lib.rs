//! Web front ends for dirsize.
//!
//! Serves the same directory scan two ways:
//!
//! - `GET /?root=<dir>&sort=<asc|desc>` renders an HTML page with
//!   human-readable sizes, and reports scan statistics to an optional
//!   external collector
//! - `GET /api/entries?root=<dir>&sort=<asc|desc>` returns the entries as
//!   JSON with raw byte sizes
//!
//! The router is an explicit value built by [`build_router`]; [`serve`] binds
//! it and shuts down gracefully on Ctrl-C.

mod config;
mod error;
mod page;
mod routes;
mod server;
mod stats;

pub use config::{ServerConfig, ServerConfigBuilder};
pub use error::WebError;
pub use page::{IndexPage, PageEntry};
pub use routes::{AppState, ScanQuery, build_router};
pub use server::{serve, serve_with_shutdown};
pub use stats::{ScanStats, StatsReporter};
