//! Handlers for redirect management endpoints.

use axum::{
    Json,
    extract::{Path, State},
};
use std::collections::BTreeMap;
use validator::Validate;

use crate::api::dto::redirects::CreateRedirectRequest;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the full redirect table.
///
/// # Endpoint
///
/// `GET /api/redirects`
///
/// # Response
///
/// ```json
/// {
///   "docs": "https://example.com/docs",
///   "home": "https://example.com"
/// }
/// ```
///
/// Keys are sorted; an empty table answers with `{}`.
pub async fn list_redirects_handler(
    State(state): State<AppState>,
) -> Json<BTreeMap<String, String>> {
    Json(state.store.list().await)
}

/// Returns a single redirect entry.
///
/// # Endpoint
///
/// `GET /api/redirects/{id}`
///
/// # Response
///
/// The entry keyed by its id, with a `null` target when the id is unknown:
///
/// ```json
/// { "docs": "https://example.com/docs" }
/// ```
///
/// ```json
/// { "missing": null }
/// ```
pub async fn get_redirect_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Json<BTreeMap<String, Option<String>>> {
    Json(state.store.list_one(&id).await)
}

/// Creates a redirect.
///
/// # Endpoint
///
/// `POST /api/redirects`
///
/// # Request Body
///
/// ```json
/// {
///   "id": "docs",                        // optional
///   "url": "https://example.com/docs"
/// }
/// ```
///
/// Without an `id` (or with an empty one) the server generates a random
/// 12-character identifier.
///
/// # Response
///
/// The stored entry, keyed by its id:
///
/// ```json
/// { "docs": "https://example.com/docs" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request when `url` is missing or empty, or when the
/// requested id is already taken.
pub async fn create_redirect_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateRedirectRequest>,
) -> Result<Json<BTreeMap<String, String>>, AppError> {
    payload.validate()?;

    let (id, url) = payload.into_parts();
    let (id, url) = state.store.create(id, url).await?;

    Ok(Json(BTreeMap::from([(id, url)])))
}
