//! Domain layer containing business entities and logic.
//!
//! This module implements the core domain logic following Clean Architecture principles.
//! It defines the visitor identity model and the audit event pipeline independent of
//! infrastructure concerns.
//!
//! # Architecture
//!
//! - [`visitor`] - Visitor identity and traffic channel model
//! - [`resolution_event`] - Audit record emitted for every redirect lookup
//! - [`audit_worker`] - Asynchronous audit processing worker
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - The audit sink trait defines a contract implemented by the infrastructure layer
//! - Identity logic is encapsulated in services (see [`crate::application::services`])
//!
//! # Audit Processing Flow
//!
//! 1. HTTP handler receives a redirect request
//! 2. [`resolution_event::ResolutionEvent`] is sent to an async channel
//! 3. [`audit_worker::run_audit_worker`] processes events with retry logic
//! 4. Audit records are persisted via [`crate::infrastructure::audit::AuditSink`]

pub mod audit_worker;
pub mod resolution_event;
pub mod visitor;
