//! Visitor identity and traffic channel model.

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

/// Compiled regex matching the email-channel path suffix.
static EMAIL_SUFFIX_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)/m$").unwrap());

/// Traffic channel a redirect request arrived through.
///
/// Requests whose path ends in `/m` (case-insensitive) are treated as clicks
/// from email campaigns; everything else counts as regular web traffic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceChannel {
    Web,
    Email,
}

impl SourceChannel {
    /// Classifies a request path into a traffic channel.
    pub fn from_path(path: &str) -> Self {
        if EMAIL_SUFFIX_REGEX.is_match(path) {
            SourceChannel::Email
        } else {
            SourceChannel::Web
        }
    }
}

/// Whether the visitor presented a valid session cookie.
///
/// A visitor is `Returning` only when the request carried a cookie whose
/// signature verified; a missing, malformed, or tampered cookie makes the
/// visitor `New` and triggers a fresh identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VisitorRole {
    New,
    Returning,
}

/// Resolved identity of the visitor behind a redirect request.
///
/// Attached to every request by the identity middleware and embedded into
/// audit records. Cloneable for sending across async boundaries.
#[derive(Debug, Clone, Serialize)]
pub struct VisitorIdentity {
    pub source: SourceChannel,
    pub id: String,
    pub role: VisitorRole,
}

impl VisitorIdentity {
    /// Creates an identity for a returning visitor with a verified cookie.
    pub fn returning(source: SourceChannel, id: String) -> Self {
        Self {
            source,
            id,
            role: VisitorRole::Returning,
        }
    }

    /// Creates an identity for a first-time (or unverifiable) visitor.
    pub fn new_visitor(source: SourceChannel, id: String) -> Self {
        Self {
            source,
            id,
            role: VisitorRole::New,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_channel_detected_on_m_suffix() {
        assert_eq!(SourceChannel::from_path("/u/abc123/m"), SourceChannel::Email);
    }

    #[test]
    fn test_email_channel_suffix_is_case_insensitive() {
        assert_eq!(SourceChannel::from_path("/u/abc123/M"), SourceChannel::Email);
    }

    #[test]
    fn test_web_channel_for_plain_path() {
        assert_eq!(SourceChannel::from_path("/u/abc123"), SourceChannel::Web);
    }

    #[test]
    fn test_web_channel_when_m_is_not_a_suffix() {
        assert_eq!(SourceChannel::from_path("/u/m/abc123"), SourceChannel::Web);
    }

    #[test]
    fn test_web_channel_when_m_is_part_of_id() {
        assert_eq!(SourceChannel::from_path("/u/form"), SourceChannel::Web);
    }

    #[test]
    fn test_channels_serialize_lowercase() {
        assert_eq!(
            serde_json::to_string(&SourceChannel::Email).unwrap(),
            "\"email\""
        );
        assert_eq!(serde_json::to_string(&SourceChannel::Web).unwrap(), "\"web\"");
        assert_eq!(serde_json::to_string(&VisitorRole::New).unwrap(), "\"new\"");
        assert_eq!(
            serde_json::to_string(&VisitorRole::Returning).unwrap(),
            "\"returning\""
        );
    }

    #[test]
    fn test_identity_constructors_set_role() {
        let returning = VisitorIdentity::returning(SourceChannel::Web, "abc".to_string());
        assert_eq!(returning.role, VisitorRole::Returning);
        assert_eq!(returning.id, "abc");

        let fresh = VisitorIdentity::new_visitor(SourceChannel::Email, "xyz".to_string());
        assert_eq!(fresh.role, VisitorRole::New);
        assert_eq!(fresh.source, SourceChannel::Email);
    }
}
