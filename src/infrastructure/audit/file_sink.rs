//! File-backed audit sink.

use async_trait::async_trait;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::domain::resolution_event::ResolutionEvent;
use crate::infrastructure::audit::AuditSink;

/// Audit sink appending one JSON record per line to a log file.
///
/// The file is opened per write so external rotation does not require any
/// coordination with the service. With `mirror` enabled each record is also
/// emitted through `tracing` under the `audit` target, which deployments
/// outside production use to watch audit traffic on the console.
pub struct FileAuditSink {
    path: PathBuf,
    mirror: bool,
}

impl FileAuditSink {
    /// Creates a new sink writing to `path`.
    pub fn new(path: impl Into<PathBuf>, mirror: bool) -> Self {
        Self {
            path: path.into(),
            mirror,
        }
    }
}

#[async_trait]
impl AuditSink for FileAuditSink {
    async fn write(&self, event: &ResolutionEvent) -> io::Result<()> {
        let line = serde_json::to_string(event).map_err(io::Error::other)?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        writeln!(file, "{line}")?;

        if self.mirror {
            tracing::info!(target: "audit", "{line}");
        }

        Ok(())
    }
}
