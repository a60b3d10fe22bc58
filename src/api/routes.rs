//! API route configuration.

use crate::api::handlers::{
    create_redirect_handler, get_redirect_handler, list_redirects_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Management routes for the redirect table.
///
/// # Endpoints
///
/// - `GET  /redirects`      - Full redirect table
/// - `POST /redirects`      - Create a redirect
/// - `GET  /redirects/{id}` - Single entry (`null` target when the id is unknown)
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/redirects",
            get(list_redirects_handler).post(create_redirect_handler),
        )
        .route("/redirects/{id}", get(get_redirect_handler))
}
