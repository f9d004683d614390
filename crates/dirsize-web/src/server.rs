//! Server startup and graceful shutdown.

use std::time::Duration;

use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tracing::{error, info};

use dirsize_scan::DirScanner;

use crate::config::ServerConfig;
use crate::error::WebError;
use crate::routes::{AppState, build_router};
use crate::stats::StatsReporter;

/// Start the server and run until Ctrl-C.
pub async fn serve(config: ServerConfig) -> Result<(), WebError> {
    let scanner = DirScanner::new()?;
    let stats = StatsReporter::from_url(config.stats_url.as_deref())?;
    if !stats.is_enabled() {
        info!("statistics reporting disabled");
    }

    let router = build_router(AppState::new(scanner, stats), &config.static_dir);

    let listener = TcpListener::bind(config.addr)
        .await
        .map_err(|source| WebError::Bind {
            addr: config.addr,
            source,
        })?;

    info!(addr = %listener.local_addr()?, "server listening");

    serve_with_shutdown(listener, router, shutdown_signal(), config.shutdown_timeout).await?;

    info!("server shut down");
    Ok(())
}

/// Serve `router` until `signal` resolves, then give in-flight requests
/// `timeout` to finish.
pub async fn serve_with_shutdown<S>(
    listener: TcpListener,
    router: Router,
    signal: S,
    timeout: Duration,
) -> Result<(), WebError>
where
    S: Future<Output = ()> + Send + 'static,
{
    let (signalled_tx, signalled_rx) = oneshot::channel::<()>();
    let shutdown = async move {
        signal.await;
        let _ = signalled_tx.send(());
    };

    let server = axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .into_future();
    tokio::pin!(server);

    tokio::select! {
        result = &mut server => return result.map_err(WebError::Io),
        _ = signalled_rx => {}
    }

    info!(timeout = ?timeout, "shutdown signal received, draining connections");

    match tokio::time::timeout(timeout, server).await {
        Ok(result) => result.map_err(WebError::Io),
        Err(_) => Err(WebError::ShutdownTimeout(timeout)),
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!(error = %err, "failed to listen for Ctrl-C, shutdown only by termination");
        std::future::pending::<()>().await;
    }
}
