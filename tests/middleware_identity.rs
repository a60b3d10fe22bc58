mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use axum_test::TestServer;
use tower::ServiceExt;
use url_redirector::domain::visitor::VisitorRole;

#[tokio::test]
async fn test_new_visitor_receives_session_cookie() {
    let (state, _rx, _dir) = common::create_test_state();

    let server = TestServer::new(common::app(state)).unwrap();

    let response = server.get("/u/anything").await;

    let cookie = response.header("set-cookie");
    let cookie = cookie.to_str().unwrap();

    assert!(cookie.starts_with("visitor_session="));
    assert!(cookie.contains("Path=/"));
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("SameSite=Lax"));
}

#[tokio::test]
async fn test_issued_cookie_is_accepted_on_next_request() {
    let (state, mut rx, _dir) = common::create_test_state();
    state
        .store
        .create(Some("docs".to_string()), "https://example.com".to_string())
        .await
        .unwrap();

    let server = TestServer::new(common::app(state)).unwrap();

    let first = server.get("/u/docs").await;
    let cookie_pair = first
        .header("set-cookie")
        .to_str()
        .unwrap()
        .split(';')
        .next()
        .unwrap()
        .to_string();
    let first_event = rx.try_recv().unwrap();
    assert_eq!(first_event.user.role, VisitorRole::New);

    let second = server
        .get("/u/docs")
        .add_header("Cookie", cookie_pair.as_str())
        .await;

    assert!(second.maybe_header("set-cookie").is_none());

    let second_event = rx.try_recv().unwrap();
    assert_eq!(second_event.user.role, VisitorRole::Returning);
    assert_eq!(second_event.user.id, first_event.user.id);
}

#[tokio::test]
async fn test_presigned_cookie_resolves_to_returning_visitor() {
    let (state, mut rx, _dir) = common::create_test_state();

    let server = TestServer::new(common::app(state)).unwrap();

    let cookie = format!(
        "{}={}",
        common::TEST_COOKIE_NAME,
        common::session_cookie("known-visitor")
    );

    let response = server
        .get("/u/anything")
        .add_header("Cookie", cookie.as_str())
        .await;

    assert!(response.maybe_header("set-cookie").is_none());

    let event = rx.try_recv().unwrap();
    assert_eq!(event.user.id, "known-visitor");
    assert_eq!(event.user.role, VisitorRole::Returning);
}

#[tokio::test]
async fn test_tampered_cookie_gets_fresh_identity() {
    let (state, mut rx, _dir) = common::create_test_state();

    let server = TestServer::new(common::app(state)).unwrap();

    let forged = format!(
        "{}={}",
        common::TEST_COOKIE_NAME,
        common::session_cookie("known-visitor").replacen("known", "other", 1)
    );

    let response = server
        .get("/u/anything")
        .add_header("Cookie", forged.as_str())
        .await;

    // The forged identity is discarded and a new one is issued.
    assert!(response.maybe_header("set-cookie").is_some());

    let event = rx.try_recv().unwrap();
    assert_eq!(event.user.role, VisitorRole::New);
    assert_ne!(event.user.id, "other-visitor");
}

#[tokio::test]
async fn test_session_cookie_found_among_other_cookies() {
    let (state, mut rx, _dir) = common::create_test_state();

    let server = TestServer::new(common::app(state)).unwrap();

    let cookie = format!(
        "theme=dark; {}={}; lang=en",
        common::TEST_COOKIE_NAME,
        common::session_cookie("known-visitor")
    );

    server
        .get("/u/anything")
        .add_header("Cookie", cookie.as_str())
        .await;

    let event = rx.try_recv().unwrap();
    assert_eq!(event.user.id, "known-visitor");
    assert_eq!(event.user.role, VisitorRole::Returning);
}

#[tokio::test]
async fn test_identity_applies_to_api_routes() {
    let (state, _rx, _dir) = common::create_test_state();
    let app = common::app(state);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/redirects")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key(header::SET_COOKIE));
}
