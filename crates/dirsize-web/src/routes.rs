//! Axum routes for the HTML page and the JSON API.

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use askama::Template;
use axum::extract::{Query, State};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use tower_http::services::ServeDir;
use tracing::{info, warn};

use dirsize_core::{Listing, RequestError, ScanError, ScanRequest};
use dirsize_scan::DirScanner;

use crate::error::WebError;
use crate::page::IndexPage;
use crate::stats::StatsReporter;

/// Shared application state
pub struct AppState {
    pub scanner: Arc<DirScanner>,
    pub stats: StatsReporter,
}

impl AppState {
    pub fn new(scanner: DirScanner, stats: StatsReporter) -> Self {
        Self {
            scanner: Arc::new(scanner),
            stats,
        }
    }
}

/// Raw query parameters shared by the page and the API.
#[derive(Debug, Default, Deserialize)]
pub struct ScanQuery {
    pub root: Option<String>,
    pub sort: Option<String>,
}

impl ScanQuery {
    fn validate(&self) -> Result<ScanRequest, RequestError> {
        ScanRequest::parse(self.root.as_deref(), self.sort.as_deref())
    }
}

// ─── Route builder ───────────────────────────────────────────────

pub fn build_router(state: AppState, static_dir: &Path) -> Router {
    let api = Router::new().route("/entries", get(list_entries));

    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .nest("/api", api)
        .nest_service("/web/static", ServeDir::new(static_dir))
        .with_state(Arc::new(state))
}

// ─── Handlers ────────────────────────────────────────────────────

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "dirsize",
    }))
}

/// HTML page: form, listing, or the form with an error message.
async fn index(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ScanQuery>,
) -> Result<Response, WebError> {
    let start = Instant::now();

    let request = match query.validate() {
        Ok(request) => request,
        Err(RequestError::MissingRoot) => return render(&IndexPage::empty()),
        Err(err) => return Err(err.into()),
    };

    match run_scan(&state, request.clone()).await? {
        Ok(listing) => {
            let elapsed = start.elapsed();
            info!(
                root = %request.root.display(),
                entries = listing.len(),
                elapsed = ?elapsed,
                "page scan complete"
            );
            let page = IndexPage::listing(&listing, &request.root, elapsed);
            state.stats.report(request.root, elapsed);
            render(&page)
        }
        Err(err) => {
            warn!(
                root = %request.root.display(),
                path = ?err.path(),
                error = %err,
                "page scan failed"
            );
            render(&IndexPage::failure(&err, &request.root, start.elapsed()))
        }
    }
}

/// JSON API: sorted entries with raw byte sizes.
async fn list_entries(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ScanQuery>,
) -> Result<impl IntoResponse, WebError> {
    let request = query.validate()?;
    let listing = run_scan(&state, request).await??;
    Ok(Json(listing.into_entries()))
}

/// Run a scan on the blocking pool.
async fn run_scan(
    state: &AppState,
    request: ScanRequest,
) -> Result<Result<Listing, ScanError>, WebError> {
    let scanner = Arc::clone(&state.scanner);
    Ok(tokio::task::spawn_blocking(move || scanner.run(&request)).await?)
}

fn render(page: &IndexPage) -> Result<Response, WebError> {
    Ok(Html(page.render()?).into_response())
}
