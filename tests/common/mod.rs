#![allow(dead_code)]

use axum::extract::ConnectInfo;
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tempfile::TempDir;
use tokio::sync::mpsc;
use tower::Layer;
use url_redirector::application::services::IdentityService;
use url_redirector::domain::resolution_event::ResolutionEvent;
use url_redirector::infrastructure::persistence::RedirectStore;
use url_redirector::routes;
use url_redirector::state::AppState;

pub const TEST_COOKIE_NAME: &str = "visitor_session";
pub const TEST_COOKIE_SECRET: &str = "test-cookie-secret";

/// Builds an application state backed by a temp directory.
///
/// The receiver captures audit events instead of a running worker; the
/// `TempDir` must be kept alive for the duration of the test.
pub fn create_test_state() -> (AppState, mpsc::Receiver<ResolutionEvent>, TempDir) {
    let dir = tempfile::tempdir().unwrap();

    let store = Arc::new(RedirectStore::new(dir.path().join("redirects.json")));
    let identity = Arc::new(IdentityService::new(
        TEST_COOKIE_NAME.to_string(),
        TEST_COOKIE_SECRET.to_string(),
    ));

    let (tx, rx) = mpsc::channel(100);

    let state = AppState::new(store, identity, tx);

    (state, rx, dir)
}

/// The full application router with a fake peer address injected, since
/// `TestServer` drives the router without a real socket.
pub fn app(state: AppState) -> Router {
    routes::router(state).layer(MockConnectInfoLayer)
}

/// A valid session cookie value for the test identity service.
pub fn session_cookie(visitor_id: &str) -> String {
    IdentityService::new(TEST_COOKIE_NAME.to_string(), TEST_COOKIE_SECRET.to_string())
        .cookie_value(visitor_id)
}

#[derive(Clone)]
pub struct MockConnectInfoLayer;

impl<S> Layer<S> for MockConnectInfoLayer {
    type Service = MockConnectInfoService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        MockConnectInfoService { inner }
    }
}

#[derive(Clone)]
pub struct MockConnectInfoService<S> {
    inner: S,
}

impl<S, B> tower::Service<axum::http::Request<B>> for MockConnectInfoService<S>
where
    S: tower::Service<axum::http::Request<B>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    B: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: axum::http::Request<B>) -> Self::Future {
        let addr: SocketAddr = "127.0.0.1:12345".parse().unwrap();
        req.extensions_mut().insert(ConnectInfo(addr));
        self.inner.call(req)
    }
}
