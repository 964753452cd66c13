use crate::ApiError;

use kc_auth::AuthError;
use kc_core::{CoreError, NoIdentityReason};

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

async fn response_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_identity_conflict_returns_403_with_username_field() {
    let error = ApiError::from(AuthError::IdentityConflict {
        username: "Jdoe".into(),
        email: "j@x.com".into(),
        location: ErrorLocation::from(Location::caller()),
    });

    let (status, json) = response_json(error).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["error"]["code"], "IDENTITY_CONFLICT");
    assert_eq!(json["error"]["field"], "preferred_username");
    assert!(json["error"]["message"].as_str().unwrap().contains("Jdoe"));
}

#[tokio::test]
async fn test_ambiguous_email_returns_403() {
    let error = ApiError::from(AuthError::AmbiguousEmailMatch {
        email: "b@x.com".into(),
        username: "Robert".into(),
        candidates: 2,
        location: ErrorLocation::from(Location::caller()),
    });

    let (status, json) = response_json(error).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["error"]["code"], "AMBIGUOUS_EMAIL");
    assert_eq!(json["error"]["field"], "email");
}

#[tokio::test]
async fn test_not_authenticated_returns_401_without_field() {
    let error = ApiError::from(AuthError::not_authenticated(
        NoIdentityReason::MissingPeerAddress,
    ));

    let (status, json) = response_json(error).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["code"], "NOT_AUTHENTICATED");
    assert_eq!(json["error"]["message"], "request peer address is not known");
    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn test_store_error_returns_500_without_details() {
    let error = ApiError::from(AuthError::from(CoreError::store(
        "disk I/O error at /var/lib/kc.db",
    )));

    let (status, json) = response_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"]["message"], "Identity store unavailable");
}

#[tokio::test]
async fn test_account_already_bound_returns_403_naming_the_account() {
    let error = ApiError::from(AuthError::AccountAlreadyBound {
        uuid: "u-2".into(),
        username: "Bob".into(),
        email: "b@x.com".into(),
        location: ErrorLocation::from(Location::caller()),
    });

    let (status, json) = response_json(error).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["error"]["code"], "ACCOUNT_ALREADY_BOUND");
    assert_eq!(json["error"]["field"], "email");
    let message = json["error"]["message"].as_str().unwrap();
    assert!(message.contains("\"Bob\""));
    assert!(message.contains("u-2"));
}
