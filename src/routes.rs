//! Top-level router configuration combining public and API routes.
//!
//! # Route Structure
//!
//! - `GET /u/{id}`   - Redirect resolution, audited (public)
//! - `GET /u/{id}/m` - Redirect resolution via the email channel (public)
//! - `/api/*`        - Redirect management API
//! - `/*`            - Static assets from `public/`
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Identity** - Signed visitor cookie resolution (router-wide)
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::resolve_handler;
use crate::api::middleware::{identity, tracing};
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Constructs the application router with all routes and middleware.
///
/// Identity resolution wraps every route, so even static asset requests
/// establish a visitor session. Unknown paths fall through to the static
/// file service.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/u/{id}", get(resolve_handler))
        .route("/u/{id}/m", get(resolve_handler))
        .nest("/api", api::routes::routes())
        .fallback_service(ServeDir::new("public"))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            identity::layer,
        ))
        .with_state(state)
        .layer(tracing::layer())
}

/// The service as exposed to the listener, with trailing slashes trimmed
/// before routing.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
