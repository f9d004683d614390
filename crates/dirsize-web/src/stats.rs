//! Best-effort scan statistics reporting.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use dirsize_scan::compute_size;

use crate::error::WebError;

/// Timeout for a single statistics POST.
const REPORT_TIMEOUT: Duration = Duration::from_secs(10);

/// Payload sent to the statistics collector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanStats {
    /// Directory that was scanned.
    pub root: String,
    /// Total size of the directory, in bytes.
    pub size: u64,
    /// Time the page request took, formatted.
    #[serde(rename = "elapsedTime")]
    pub elapsed_time: String,
}

/// Sends [`ScanStats`] to an external collector without blocking callers.
#[derive(Clone, Default)]
pub struct StatsReporter {
    target: Option<Arc<Target>>,
}

struct Target {
    client: reqwest::Client,
    url: String,
}

impl StatsReporter {
    /// A reporter that never sends anything.
    pub fn disabled() -> Self {
        Self::default()
    }

    /// A reporter posting to `url`.
    pub fn new(url: impl Into<String>) -> Result<Self, WebError> {
        let client = reqwest::Client::builder().timeout(REPORT_TIMEOUT).build()?;
        Ok(Self {
            target: Some(Arc::new(Target {
                client,
                url: url.into(),
            })),
        })
    }

    /// Build from an optional URL; `None` disables reporting.
    pub fn from_url(url: Option<&str>) -> Result<Self, WebError> {
        match url {
            Some(url) => Self::new(url),
            None => Ok(Self::disabled()),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.target.is_some()
    }

    /// Report a completed scan of `root` in the background.
    ///
    /// The total size is computed off the request path. Failures are logged
    /// and never reach the caller. Must be called from within a tokio runtime.
    pub fn report(&self, root: PathBuf, elapsed: Duration) {
        let Some(target) = self.target.clone() else {
            return;
        };

        tokio::spawn(async move {
            let size = {
                let root = root.clone();
                match tokio::task::spawn_blocking(move || compute_size(root)).await {
                    Ok(size) => size,
                    Err(err) => {
                        warn!(error = %err, "failed to size directory for statistics");
                        return;
                    }
                }
            };

            let stats = ScanStats {
                root: root.display().to_string(),
                size,
                elapsed_time: format!("{elapsed:?}"),
            };

            match target.send(&stats).await {
                Ok(()) => debug!(url = %target.url, root = %stats.root, "scan statistics sent"),
                Err(err) => warn!(url = %target.url, error = %err, "failed to send scan statistics"),
            }
        });
    }
}

impl Target {
    async fn send(&self, stats: &ScanStats) -> Result<(), reqwest::Error> {
        self.client
            .post(&self.url)
            .json(stats)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}
