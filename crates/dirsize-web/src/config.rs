//! Server configuration.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// Configuration for the web front end.
#[derive(Debug, Clone, Builder, Serialize, Deserialize)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct ServerConfig {
    /// Address to listen on.
    #[builder(default = "default_addr()")]
    #[serde(default = "default_addr")]
    pub addr: SocketAddr,

    /// Statistics collector receiving a JSON POST after each page scan.
    /// `None` disables reporting.
    #[builder(default, setter(into, strip_option))]
    #[serde(default)]
    pub stats_url: Option<String>,

    /// Directory served under `/web/static/`.
    #[builder(default = "default_static_dir()")]
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,

    /// How long in-flight requests may run after a shutdown signal.
    #[builder(default = "default_shutdown_timeout()")]
    #[serde(default = "default_shutdown_timeout")]
    pub shutdown_timeout: Duration,
}

fn default_addr() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 9015))
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("web/static")
}

fn default_shutdown_timeout() -> Duration {
    Duration::from_secs(5)
}

impl ServerConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if let Some(Some(ref url)) = self.stats_url {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(format!("Statistics URL must be http(s): {url}"));
            }
        }
        if let Some(timeout) = self.shutdown_timeout {
            if timeout.is_zero() {
                return Err("Shutdown timeout cannot be zero".to_string());
            }
        }
        Ok(())
    }
}

impl ServerConfig {
    /// Create a new server config builder.
    pub fn builder() -> ServerConfigBuilder {
        ServerConfigBuilder::default()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: default_addr(),
            stats_url: None,
            static_dir: default_static_dir(),
            shutdown_timeout: default_shutdown_timeout(),
        }
    }
}
