//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod redirects;
pub mod resolve;

pub use redirects::{create_redirect_handler, get_redirect_handler, list_redirects_handler};
pub use resolve::resolve_handler;
