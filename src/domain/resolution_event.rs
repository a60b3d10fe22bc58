//! Audit record emitted for every redirect lookup.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::visitor::VisitorIdentity;

/// Service name stamped into every audit record.
const SERVICE_NAME: &str = "url-redirector";

/// An audit record describing one redirect resolution.
///
/// Created in the resolve handler for both hits and misses, then passed to the
/// background worker via a channel. This decouples the HTTP response from
/// audit persistence, allowing fast redirects without blocking on disk.
///
/// # Wire Format
///
/// Serializes to the camelCase JSON shape written by the audit sink:
///
/// ```json
/// {
///   "timestamp": "2025-01-15T10:30:00Z",
///   "service": "url-redirector",
///   "user": { "source": "web", "id": "k3J...", "role": "returning" },
///   "ipaddr": "203.0.113.9",
///   "id": "docs",
///   "url": "https://example.com/docs",
///   "userAgent": "Mozilla/5.0"
/// }
/// ```
///
/// `url` is absent for misses; `userAgent` is absent when the client sent no
/// `User-Agent` header.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolutionEvent {
    pub timestamp: DateTime<Utc>,
    pub service: &'static str,
    pub user: VisitorIdentity,
    pub ipaddr: String,
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

impl ResolutionEvent {
    /// Creates a new audit record stamped with the current time.
    ///
    /// # Arguments
    ///
    /// - `user` - Resolved visitor identity from the identity middleware
    /// - `ipaddr` - Client address (forwarded header or peer address)
    /// - `id` - The redirect identifier that was looked up
    /// - `url` - The resolved target, or `None` for a miss
    /// - `user_agent` - Optional `User-Agent` header
    pub fn new(
        user: VisitorIdentity,
        ipaddr: String,
        id: String,
        url: Option<String>,
        user_agent: Option<&str>,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            service: SERVICE_NAME,
            user,
            ipaddr,
            id,
            url,
            user_agent: user_agent.map(|s| s.to_string()),
        }
    }
}
