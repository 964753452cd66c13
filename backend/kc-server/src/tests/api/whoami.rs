use crate::tests::{PROXY_IP, create_test_pool};
use crate::{IdentityState, build_router};

use kc_config::KeycloakConfig;
use kc_core::{IdentityStore, LocalAccount, Mapping, Result as CoreErrorResult};
use kc_db::{AccountRepository, SqliteIdentityStore};

use std::net::SocketAddr;
use std::sync::Arc;

use async_trait::async_trait;
use axum::{body::Body, extract::ConnectInfo, http::Request, http::StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

/// Reports every name as free, as if the account were created right after
/// the resolver's conflict check.
struct NameCheckRace(SqliteIdentityStore);

#[async_trait]
impl IdentityStore for NameCheckRace {
    async fn find_mapped_account(&self, uuid: &str) -> CoreErrorResult<Option<LocalAccount>> {
        self.0.find_mapped_account(uuid).await
    }

    async fn find_accounts_by_email(&self, email: &str) -> CoreErrorResult<Vec<LocalAccount>> {
        self.0.find_accounts_by_email(email).await
    }

    async fn account_name_exists(&self, _name: &str) -> CoreErrorResult<bool> {
        Ok(false)
    }

    async fn create_mapping(&self, mapping: &Mapping) -> CoreErrorResult<()> {
        self.0.create_mapping(mapping).await
    }
}

fn whoami_request(uuid: &str, email: &str, username: &str) -> Request<Body> {
    let mut request = Request::builder()
        .uri("/whoami")
        .header("X-Forwarded-User", uuid)
        .header("X-Forwarded-Email", email)
        .header("X-Forwarded-Preferred-Username", username)
        .body(Body::empty())
        .unwrap();
    let addr = SocketAddr::new(PROXY_IP.parse().unwrap(), 40000);
    request.extensions_mut().insert(ConnectInfo(addr));
    request
}

#[tokio::test]
async fn given_name_taken_after_conflict_check_when_whoami_then_403_and_account_untouched() {
    // Given: Alice belongs to someone else, but the name check misses her
    let pool = create_test_pool().await;
    let accounts = AccountRepository::new(pool.clone());
    let victim = accounts.create("Alice", "victim@x.com", true).await.unwrap();
    let keycloak = KeycloakConfig {
        trusted_proxies: vec![PROXY_IP.to_string()],
        ..KeycloakConfig::default()
    };
    let store = Arc::new(NameCheckRace(SqliteIdentityStore::new(pool.clone())));
    let state = IdentityState::with_store(pool, &keycloak, store).unwrap();

    // When: A new identity claims the same username
    let response = build_router(state)
        .oneshot(whoami_request("u-attacker", "attacker@x.com", "alice"))
        .await
        .unwrap();

    // Then: The request is refused instead of signed in as Alice
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["error"]["code"], "IDENTITY_CONFLICT");
    assert_eq!(accounts.find_by_name("Alice").await.unwrap().unwrap(), victim);
}
