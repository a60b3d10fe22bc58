//! Visitor identity middleware.

use axum::{
    extract::{Request, State},
    http::HeaderValue,
    http::header::{COOKIE, SET_COOKIE},
    middleware::Next,
    response::Response,
};

use crate::state::AppState;

/// Resolves the visitor behind every request from the signed session cookie.
///
/// # Cookie Format
///
/// ```text
/// Cookie: <name>=<id>.<hmac-sha256 hex>
/// ```
///
/// # Resolution Flow
///
/// 1. Extract the session cookie from the request
/// 2. Verify the signature via [`crate::application::services::IdentityService`]
/// 3. Insert the resolved [`crate::domain::visitor::VisitorIdentity`] as a
///    request extension for handlers
/// 4. When the visitor is new (or the cookie failed verification), append a
///    `Set-Cookie` header with a freshly minted identity
///
/// # Cookie Parsing
///
/// Handles multiple cookies in the `Cookie` header by:
/// - Splitting on semicolons
/// - Extracting the configured session cookie key-value pair
/// - Ignoring other cookies
///
/// Unlike an authentication middleware this one never rejects: a bad cookie
/// just means a fresh identity.
pub async fn layer(State(st): State<AppState>, mut req: Request, next: Next) -> Response {
    let cookie = req
        .headers()
        .get(COOKIE)
        .and_then(|cookie_header| cookie_header.to_str().ok())
        .and_then(|cookie_str| {
            cookie_str.split(';').find_map(|cookie| {
                let mut parts = cookie.trim().splitn(2, '=');
                match (parts.next(), parts.next()) {
                    (Some(name), Some(value)) if name == st.identity.cookie_name() => {
                        Some(value.to_string())
                    }
                    _ => None,
                }
            })
        });

    let resolution = st.identity.resolve(req.uri().path(), cookie.as_deref());

    req.extensions_mut().insert(resolution.identity);

    let mut response = next.run(req).await;

    if let Some(value) = resolution.issued_cookie {
        let header = format!(
            "{}={}; Path=/; HttpOnly; SameSite=Lax",
            st.identity.cookie_name(),
            value
        );

        match HeaderValue::from_str(&header) {
            Ok(header) => {
                response.headers_mut().append(SET_COOKIE, header);
            }
            Err(e) => tracing::warn!(error = %e, "failed to build session cookie header"),
        }
    }

    response
}
