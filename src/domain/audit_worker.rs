//! Asynchronous audit processing worker.

use std::sync::Arc;
use tokio::sync::mpsc;
use tokio_retry::Retry;
use tokio_retry::strategy::ExponentialBackoff;

use crate::domain::resolution_event::ResolutionEvent;
use crate::infrastructure::audit::AuditSink;

/// Drains the audit channel and persists each record through the sink.
///
/// Runs until the channel closes (all senders dropped). Each write is retried
/// up to three times with exponential backoff (10ms, 100ms, 1s); a record that
/// still fails is logged and dropped so one bad write cannot stall the queue.
pub async fn run_audit_worker(mut rx: mpsc::Receiver<ResolutionEvent>, sink: Arc<dyn AuditSink>) {
    while let Some(event) = rx.recv().await {
        let strategy = ExponentialBackoff::from_millis(10).take(3);

        if let Err(e) = Retry::spawn(strategy, || sink.write(&event)).await {
            tracing::warn!(error = %e, id = %event.id, "failed to persist audit record, dropping it");
        }
    }
}
