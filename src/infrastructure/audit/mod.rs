//! Audit sink abstractions and implementations.
//!
//! The sink trait defines the contract consumed by
//! [`crate::domain::audit_worker::run_audit_worker`]; the file-backed
//! implementation appends one JSON record per line.
//!
//! # Implementations
//!
//! - [`FileAuditSink`] - Append-only JSON lines file
//! - Test mocks available with `cfg(test)`

pub mod file_sink;
pub mod sink;

pub use file_sink::FileAuditSink;
pub use sink::AuditSink;

#[cfg(test)]
pub use sink::MockAuditSink;
