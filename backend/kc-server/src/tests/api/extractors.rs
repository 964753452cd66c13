use crate::api::extractors::asserted_identity::request_identity;
use crate::tests::{PROXY_IP, create_test_state};
use crate::{ApiError, AssertedEmail, AssertedIdentity};

use kc_core::ResolutionPath;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{body::Body, extract::ConnectInfo, extract::FromRequestParts, http::Request};

fn identity_request(peer: Option<&str>) -> Request<Body> {
    let mut request = Request::builder()
        .header("X-Forwarded-User", "u-1")
        .header("X-Forwarded-Email", "a@x.com")
        .header("X-Forwarded-Preferred-Username", "alice")
        .body(Body::empty())
        .unwrap();

    if let Some(ip) = peer {
        let addr = SocketAddr::new(ip.parse().unwrap(), 40000);
        request.extensions_mut().insert(ConnectInfo(addr));
    }
    request
}

#[tokio::test]
async fn test_extractor_resolves_new_identity_from_trusted_proxy() {
    let state = create_test_state().await;
    let (mut parts, _body) = identity_request(Some(PROXY_IP)).into_parts();

    let asserted = AssertedIdentity::from_request_parts(&mut parts, &state)
        .await
        .unwrap();

    assert_eq!(asserted.identity.username, "Alice");
    assert_eq!(asserted.identity.email, "a@x.com");
    assert_eq!(asserted.path, ResolutionPath::NewAccount);
}

#[tokio::test]
async fn test_extractor_rejects_request_without_peer_address() {
    let state = create_test_state().await;
    let (mut parts, _body) = identity_request(None).into_parts();

    let result = AssertedIdentity::from_request_parts(&mut parts, &state).await;

    assert!(matches!(result, Err(ApiError::NotAuthenticated { .. })));
}

#[tokio::test]
async fn test_extractors_share_one_request_identity() {
    let state = create_test_state().await;
    let (mut parts, _body) = identity_request(Some(PROXY_IP)).into_parts();

    let first = request_identity(&mut parts, &state);
    let second = request_identity(&mut parts, &state);

    assert!(Arc::ptr_eq(&first, &second));
}

#[tokio::test]
async fn test_email_extractor_returns_asserted_email() {
    let state = create_test_state().await;
    let (mut parts, _body) = identity_request(Some(PROXY_IP)).into_parts();

    let AssertedEmail(email) = AssertedEmail::from_request_parts(&mut parts, &state)
        .await
        .unwrap();

    assert_eq!(email, "a@x.com");
}

#[tokio::test]
async fn test_email_extractor_rejects_untrusted_peer() {
    let state = create_test_state().await;
    let (mut parts, _body) = identity_request(Some("203.0.113.50")).into_parts();

    let result = AssertedEmail::from_request_parts(&mut parts, &state).await;

    assert!(matches!(result, Err(ApiError::NotAuthenticated { .. })));
}
