//! # URL Redirector
//!
//! A small URL redirection service built with Axum: short identifiers map to
//! destination URLs, anonymous visitors are tracked across requests with a
//! signed cookie, and every resolution attempt leaves a structured audit record.
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Visitor identity model and audit events
//! - **Application Layer** ([`application`]) - Identity resolution logic
//! - **Infrastructure Layer** ([`infrastructure`]) - File-backed redirect store and audit sinks
//! - **API Layer** ([`api`]) - HTTP handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - File-persisted redirect table with collision-safe creation
//! - Signed visitor cookie distinguishing new and returning visitors
//! - Web vs. email channel detection from the request path
//! - Non-blocking audit pipeline writing JSON records to an append-only log
//!
//! ## Quick Start
//!
//! ```bash
//! # Set required environment variables
//! export SECURE_COOKIE_SECRET="change-me"
//! export SECURE_COOKIE_NAME="visitor_session"
//! export REDIRECTS_FILEPATH="./data/redirects.json"
//!
//! # Start the service
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::IdentityService;
    pub use crate::domain::resolution_event::ResolutionEvent;
    pub use crate::domain::visitor::{SourceChannel, VisitorIdentity, VisitorRole};
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::RedirectStore;
    pub use crate::state::AppState;
}
