//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating signature checks,
//! identity minting, and business rules. Services provide a clean API for HTTP
//! handlers and middleware.
//!
//! # Available Services
//!
//! - [`services::identity_service::IdentityService`] - Visitor cookie verification and minting

pub mod services;
