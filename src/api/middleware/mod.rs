//! HTTP middleware for request processing and observability.
//!
//! Provides visitor identity resolution and request tracing middleware.

pub mod identity;
pub mod tracing;
