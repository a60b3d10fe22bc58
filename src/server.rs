//! HTTP server initialization and runtime setup.
//!
//! Handles redirect table loading, audit worker spawning, and Axum server lifecycle.

use crate::application::services::IdentityService;
use crate::config::Config;
use crate::domain::audit_worker::run_audit_worker;
use crate::infrastructure::audit::{AuditSink, FileAuditSink};
use crate::infrastructure::persistence::RedirectStore;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - File-backed redirect store (fail-open load)
/// - Background audit worker with its file sink
/// - Visitor identity service
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let store = Arc::new(RedirectStore::new(&config.redirects_filepath));
    let loaded = store.load().await;
    tracing::info!(
        "Loaded {loaded} redirects from {}",
        config.redirects_filepath.display()
    );

    if let Some(parent) = config.audit_log_filepath.parent() {
        if !parent.as_os_str().is_empty() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                tracing::warn!(error = %e, "failed to create audit log directory");
            }
        }
    }

    let sink: Arc<dyn AuditSink> = Arc::new(FileAuditSink::new(
        &config.audit_log_filepath,
        config.audit_mirror(),
    ));

    let (audit_tx, audit_rx) = mpsc::channel(config.audit_queue_capacity);

    tokio::spawn(run_audit_worker(audit_rx, sink));
    tracing::info!("Audit worker started");

    let identity = Arc::new(IdentityService::new(
        config.cookie_name.clone(),
        config.cookie_secret.clone(),
    ));

    let state = AppState::new(store, identity, audit_tx);

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

/// Resolves when the process receives Ctrl-C.
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl-C handler");
}
