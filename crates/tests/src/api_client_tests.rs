use client::ApiClient;
use pretty_assertions::assert_eq;
use serde_json::Value;
use shared_types::{ApiConfig, AppErrorKind, AuthUser, UserRole};

use crate::common::{
    client_with_access, spawn_stub, spawn_stub_origin, StubApi, FIRST_ACCESS, PASSWORD,
    REFRESHED_ACCESS, REFRESH_TOKEN,
};

/// Loopback address that refuses connections.
const DEAD_BASE: &str = "http://127.0.0.1:9/api";

#[tokio::test]
async fn valid_token_is_sent_as_bearer() {
    let stub = StubApi::new("staff");
    let api = client_with_access(spawn_stub(stub.clone()).await, FIRST_ACCESS);

    let user: AuthUser = api.get("/auth/me").await.expect("me");
    assert_eq!(user.user_type, UserRole::Staff);
    assert_eq!(StubApi::count(&stub.me_calls), 1);
    assert_eq!(StubApi::count(&stub.refresh_calls), 0);
}

#[tokio::test]
async fn expired_token_is_refreshed_and_request_retried_once() {
    let stub = StubApi::new("center_manager");
    let api = client_with_access(spawn_stub(stub.clone()).await, "stale");

    let user: AuthUser = api.get("/auth/me").await.expect("me after refresh");

    assert_eq!(user.user_type, UserRole::CenterManager);
    assert_eq!(StubApi::count(&stub.me_calls), 2);
    assert_eq!(StubApi::count(&stub.refresh_calls), 1);
    assert_eq!(api.tokens().access_token().as_deref(), Some(REFRESHED_ACCESS));
    // The refresh response omits a refresh token, so the old one is kept
    assert_eq!(api.tokens().refresh_token().as_deref(), Some(REFRESH_TOKEN));
}

#[tokio::test]
async fn second_unauthorized_is_returned_without_another_refresh() {
    let stub = StubApi::new("staff");
    let api = client_with_access(spawn_stub(stub.clone()).await, FIRST_ACCESS);

    let err = api.get::<Value>("/reports/denied").await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Unauthorized);
    assert_eq!(err.message, "Not allowed");
    assert_eq!(StubApi::count(&stub.denied_calls), 2);
    assert_eq!(StubApi::count(&stub.refresh_calls), 1);
}

#[tokio::test]
async fn failed_refresh_clears_tokens() {
    let stub = StubApi::with_failing_refresh("staff");
    let api = client_with_access(spawn_stub(stub.clone()).await, "stale");

    let err = api.get::<AuthUser>("/auth/me").await.unwrap_err();

    assert!(err.is_unauthorized());
    assert_eq!(err.message, "Session expired. Please sign in again.");
    assert!(!api.is_authenticated());
    assert!(api.tokens().get().is_none());
    assert_eq!(StubApi::count(&stub.me_calls), 1);
}

#[tokio::test]
async fn anonymous_unauthorized_does_not_refresh() {
    let stub = StubApi::new("staff");
    let api = ApiClient::new(spawn_stub(stub.clone()).await);

    let err = api.get::<Value>("/reports/denied").await.unwrap_err();

    assert!(err.is_unauthorized());
    assert_eq!(StubApi::count(&stub.denied_calls), 1);
    assert_eq!(StubApi::count(&stub.refresh_calls), 0);
}

#[tokio::test]
async fn error_body_message_is_used() {
    let stub = StubApi::new("staff");
    let api = client_with_access(spawn_stub(stub).await, FIRST_ACCESS);

    let err = api.get::<Value>("/centers/missing").await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::NotFound);
    assert_eq!(err.message, "Center not found");
    assert_eq!(err.status_code_u16(), 404);
}

#[tokio::test]
async fn unreachable_server_is_a_network_error() {
    let stub = StubApi::new("staff");
    let mut config = spawn_stub(stub).await;
    config.direct_base_url = DEAD_BASE.to_string();
    let api = ApiClient::new(config);

    let err = api.get::<Value>("/auth/me").await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Network);
    assert_eq!(err.friendly_message(), "Could not reach the server. Please try again.");
}

#[tokio::test]
async fn refresh_timeout_keeps_the_session() {
    let stub = StubApi::with_hanging_refresh("staff");
    let mut config = spawn_stub(stub.clone()).await;
    config.request_timeout_secs = 1;
    let api = client_with_access(config, "stale");

    let err = api.get::<AuthUser>("/auth/me").await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Network);
    assert!(api.is_authenticated());
    assert_eq!(api.tokens().access_token().as_deref(), Some("stale"));
    assert_eq!(StubApi::count(&stub.refresh_calls), 1);
}

#[tokio::test]
async fn login_through_absolute_proxy_base() {
    let stub = StubApi::new("staff");
    let origin = spawn_stub_origin(stub).await;
    let config = ApiConfig {
        use_proxy: true,
        proxy_base_url: format!("{origin}/api/"),
        direct_base_url: DEAD_BASE.to_string(),
        ..ApiConfig::default()
    };
    let api = ApiClient::new(config);

    let user = api.login("dana@example.com", PASSWORD).await.expect("login via proxy");

    assert_eq!(api.base_url(), format!("{origin}/api"));
    assert_eq!(user.user_type, UserRole::Staff);
    assert!(api.current_user().await.expect("me").is_some());
}

#[tokio::test]
async fn relative_proxy_base_without_page_origin_uses_direct_url() {
    let stub = StubApi::new("center_manager");
    let config = ApiConfig {
        use_proxy: true,
        ..spawn_stub(stub.clone()).await
    };
    assert_eq!(config.proxy_base_url, "/api");
    let api = ApiClient::new(config.clone());

    let user = api.login("dana@example.com", PASSWORD).await.expect("login");

    assert_eq!(api.base_url(), config.direct_base_url);
    assert_eq!(user.user_type, UserRole::CenterManager);
    api.logout().await.expect("logout");
    assert_eq!(StubApi::count(&stub.logout_calls), 1);
}
