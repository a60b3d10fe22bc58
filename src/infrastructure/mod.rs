//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! concrete implementations for data persistence and audit output.
//!
//! # Modules
//!
//! - [`audit`] - Audit sink abstractions (file-backed implementation)
//! - [`persistence`] - File-backed redirect table

pub mod audit;
pub mod persistence;
