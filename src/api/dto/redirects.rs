//! DTOs for the redirect management endpoints.

use serde::Deserialize;
use validator::Validate;

/// Request body for `POST /api/redirects`.
///
/// # Fields
///
/// - `url` - destination to redirect to; required
/// - `id` - explicit redirect identifier; omitted or empty means the server
///   generates one
#[derive(Debug, Deserialize, Validate)]
pub struct CreateRedirectRequest {
    /// Explicit identifier for the new redirect.
    pub id: Option<String>,

    /// Destination URL.
    #[validate(required(message = "url required"))]
    pub url: Option<String>,
}

impl CreateRedirectRequest {
    /// Splits the request into `(id, url)`, treating an empty id as absent.
    pub fn into_parts(self) -> (Option<String>, String) {
        let id = self.id.filter(|id| !id.is_empty());
        (id, self.url.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_url_fails_validation() {
        let request = CreateRedirectRequest { id: None, url: None };

        let result = request.validate();

        assert!(result.is_err());
    }

    #[test]
    fn test_url_present_passes_validation() {
        let request = CreateRedirectRequest {
            id: Some("docs".to_string()),
            url: Some("https://example.com/docs".to_string()),
        };

        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_into_parts_drops_empty_id() {
        let request = CreateRedirectRequest {
            id: Some(String::new()),
            url: Some("https://example.com".to_string()),
        };

        let (id, url) = request.into_parts();

        assert!(id.is_none());
        assert_eq!(url, "https://example.com");
    }

    #[test]
    fn test_into_parts_keeps_non_empty_id() {
        let request = CreateRedirectRequest {
            id: Some("docs".to_string()),
            url: Some("https://example.com".to_string()),
        };

        let (id, _) = request.into_parts();

        assert_eq!(id.as_deref(), Some("docs"));
    }

    #[test]
    fn test_deserializes_without_id() {
        let request: CreateRedirectRequest =
            serde_json::from_str(r#"{"url": "https://example.com"}"#).unwrap();

        assert!(request.id.is_none());
        assert_eq!(request.url.as_deref(), Some("https://example.com"));
    }
}
