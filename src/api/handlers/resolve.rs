//! Handler for public redirect resolution.

use axum::{
    Extension,
    extract::{ConnectInfo, Path, State},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Redirect, Response},
};
use std::net::SocketAddr;

use crate::{
    domain::resolution_event::ResolutionEvent, domain::visitor::VisitorIdentity, state::AppState,
};

/// Resolves a redirect id and sends the visitor to its target.
///
/// Serves both `GET /u/{id}` and the email-channel variant `GET /u/{id}/m`.
/// Every lookup is audited, hits and misses alike; a hit answers with a
/// `307 Temporary Redirect`, a miss with a plain-text `404 Not found`.
pub async fn resolve_handler(
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    Extension(visitor): Extension<VisitorIdentity>,
    headers: HeaderMap,
    State(st): State<AppState>,
    Path(id): Path<String>,
) -> Response {
    let url = st.store.get(&id).await;

    let event = ResolutionEvent::new(
        visitor,
        client_ip(&headers, addr),
        id,
        url.clone(),
        user_agent(&headers),
    );

    if let Err(e) = st.audit_tx.try_send(event) {
        // queue full or worker gone, the redirect is served regardless
        tracing::warn!(error = %e, "failed to enqueue audit record");
    }

    match url {
        Some(url) => Redirect::temporary(&url).into_response(),
        None => (StatusCode::NOT_FOUND, "Not found").into_response(),
    }
}

/// Client address for the audit record.
///
/// A proxy-supplied `X-Forwarded-For` header wins over the peer address and
/// is recorded verbatim, hop list and all.
fn client_ip(headers: &HeaderMap, addr: SocketAddr) -> String {
    headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string())
        .unwrap_or_else(|| addr.ip().to_string())
}

fn user_agent(headers: &HeaderMap) -> Option<&str> {
    headers.get(header::USER_AGENT).and_then(|v| v.to_str().ok())
}
