//! Audit sink trait.

use async_trait::async_trait;
use std::io;

use crate::domain::resolution_event::ResolutionEvent;

/// Destination for audit records.
///
/// Implementations must be thread-safe; the worker owns a single sink and
/// retries failed writes before dropping a record.
///
/// # Implementations
///
/// - [`crate::infrastructure::audit::FileAuditSink`] - Append-only JSON lines file
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuditSink: Send + Sync {
    /// Persists one audit record.
    ///
    /// # Errors
    ///
    /// Returns an [`io::Error`] when the record could not be written. The
    /// caller decides whether to retry.
    async fn write(&self, event: &ResolutionEvent) -> io::Result<()>;
}
