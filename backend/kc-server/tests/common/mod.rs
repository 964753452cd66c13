#![allow(dead_code)]

//! Test infrastructure for kc-server API tests

use kc_config::KeycloakConfig;
use kc_server::IdentityState;

use std::net::SocketAddr;

use axum::body::Body;
use axum::extract::ConnectInfo;
use axum::http::{Request, Response};
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

pub const PROXY_IP: &str = "10.0.0.5";
pub const OUTSIDER_IP: &str = "203.0.113.50";

/// In-memory SQLite with the kc-db schema
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("Failed to create test database");

    kc_db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Header mode, trusting only PROXY_IP
pub fn test_keycloak_config() -> KeycloakConfig {
    KeycloakConfig {
        trusted_proxies: vec![PROXY_IP.to_string()],
        ..KeycloakConfig::default()
    }
}

pub fn create_test_state(pool: &SqlitePool, keycloak: &KeycloakConfig) -> IdentityState {
    IdentityState::new(pool.clone(), keycloak).expect("Failed to build state")
}

pub async fn create_account(pool: &SqlitePool, name: &str, email: &str, confirmed: bool) -> i64 {
    kc_db::AccountRepository::new(pool.clone())
        .create(name, email, confirmed)
        .await
        .expect("Failed to create account")
        .id
}

/// GET `uri` from `peer` carrying the three identity headers
pub fn identity_request(
    uri: &str,
    peer: Option<&str>,
    uuid: &str,
    email: &str,
    username: &str,
) -> Request<Body> {
    let mut request = Request::builder()
        .uri(uri)
        .header("X-Forwarded-User", uuid)
        .header("X-Forwarded-Email", email)
        .header("X-Forwarded-Preferred-Username", username)
        .body(Body::empty())
        .expect("Failed to build request");

    if let Some(ip) = peer {
        let addr = SocketAddr::new(ip.parse().expect("Invalid peer IP"), 51000);
        request.extensions_mut().insert(ConnectInfo(addr));
    }

    request
}

pub fn plain_request(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("Failed to build request")
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let body = response
        .into_body()
        .collect()
        .await
        .expect("Failed to read body")
        .to_bytes();
    serde_json::from_slice(&body).expect("Body is not JSON")
}
