//! File-backed redirect table.
//!
//! The store keeps the full table in memory for lock-cheap lookups and writes
//! it back to a single JSON file on every mutation.
//!
//! # Stores
//!
//! - [`RedirectStore`] - Redirect id to URL mapping with file persistence

pub mod redirect_store;

pub use redirect_store::RedirectStore;
