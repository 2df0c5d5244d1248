use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use client::{ApiClient, MemoryTokenStore};
use serde_json::{json, Value};
use shared_types::{ApiConfig, TokenPair};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const PASSWORD: &str = "correct horse";
pub const FIRST_ACCESS: &str = "access-1";
pub const REFRESHED_ACCESS: &str = "access-2";
pub const REFRESH_TOKEN: &str = "refresh-1";

/// How the stub answers `/auth/refresh`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshMode {
    Succeeds,
    Rejects,
    /// Never answers within the client's timeout.
    Hangs,
}

/// In-memory stand-in for the ExpertLink auth API.
#[derive(Debug)]
pub struct StubApi {
    /// Access token `/auth/me` currently accepts.
    valid_access: Mutex<String>,
    refresh_mode: RefreshMode,
    user_type: String,
    pub me_calls: AtomicUsize,
    pub refresh_calls: AtomicUsize,
    pub logout_calls: AtomicUsize,
    pub denied_calls: AtomicUsize,
}

pub type Stub = Arc<StubApi>;

impl StubApi {
    pub fn new(user_type: &str) -> Stub {
        Self::build(user_type, RefreshMode::Succeeds)
    }

    /// A stub whose refresh endpoint always rejects.
    pub fn with_failing_refresh(user_type: &str) -> Stub {
        Self::build(user_type, RefreshMode::Rejects)
    }

    /// A stub whose refresh endpoint stalls past the client timeout.
    pub fn with_hanging_refresh(user_type: &str) -> Stub {
        Self::build(user_type, RefreshMode::Hangs)
    }

    fn build(user_type: &str, refresh_mode: RefreshMode) -> Stub {
        Arc::new(Self {
            valid_access: Mutex::new(FIRST_ACCESS.to_string()),
            refresh_mode,
            user_type: user_type.to_string(),
            me_calls: AtomicUsize::new(0),
            refresh_calls: AtomicUsize::new(0),
            logout_calls: AtomicUsize::new(0),
            denied_calls: AtomicUsize::new(0),
        })
    }

    pub fn count(counter: &AtomicUsize) -> usize {
        counter.load(Ordering::SeqCst)
    }

    fn user_json(&self) -> Value {
        json!({
            "id": 7,
            "name": "Dana Park",
            "email": "dana@example.com",
            "userType": self.user_type,
        })
    }
}

fn bearer(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

fn unauthorized(message: &str) -> Response {
    (StatusCode::UNAUTHORIZED, Json(json!({ "message": message }))).into_response()
}

async fn login(State(stub): State<Stub>, Json(body): Json<Value>) -> Response {
    let email = body["email"].as_str().unwrap_or_default();
    let password = body["password"].as_str().unwrap_or_default();
    if email.is_empty() {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({
                "message": "Validation failed",
                "errors": { "email": "Email is required" },
            })),
        )
            .into_response();
    }
    if password != PASSWORD {
        return unauthorized("Invalid email or password");
    }
    Json(json!({
        "accessToken": FIRST_ACCESS,
        "refreshToken": REFRESH_TOKEN,
        "user": stub.user_json(),
    }))
    .into_response()
}

async fn me(State(stub): State<Stub>, headers: HeaderMap) -> Response {
    stub.me_calls.fetch_add(1, Ordering::SeqCst);
    let valid = stub.valid_access.lock().expect("stub lock").clone();
    match bearer(&headers) {
        Some(token) if token == valid => Json(stub.user_json()).into_response(),
        _ => unauthorized("Token expired"),
    }
}

async fn refresh(State(stub): State<Stub>, Json(body): Json<Value>) -> Response {
    stub.refresh_calls.fetch_add(1, Ordering::SeqCst);
    if stub.refresh_mode == RefreshMode::Hangs {
        tokio::time::sleep(Duration::from_secs(5)).await;
    }
    if stub.refresh_mode == RefreshMode::Rejects || body["refreshToken"] != REFRESH_TOKEN {
        return unauthorized("Refresh token expired");
    }
    *stub.valid_access.lock().expect("stub lock") = REFRESHED_ACCESS.to_string();
    Json(json!({ "accessToken": REFRESHED_ACCESS })).into_response()
}

async fn logout(State(stub): State<Stub>) -> StatusCode {
    stub.logout_calls.fetch_add(1, Ordering::SeqCst);
    StatusCode::NO_CONTENT
}

/// Rejects every request, whatever the token.
async fn always_denied(State(stub): State<Stub>) -> Response {
    stub.denied_calls.fetch_add(1, Ordering::SeqCst);
    unauthorized("Not allowed")
}

async fn missing_center() -> Response {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "Center not found" }))).into_response()
}

/// Serve `stub` on an ephemeral local port and return a config pointing at it.
pub async fn spawn_stub(stub: Stub) -> ApiConfig {
    let origin = spawn_stub_origin(stub).await;
    ApiConfig {
        use_proxy: false,
        direct_base_url: format!("{origin}/api"),
        ..ApiConfig::default()
    }
}

/// Serve `stub` on an ephemeral local port and return its `http://host:port`.
pub async fn spawn_stub_origin(stub: Stub) -> String {
    let app = Router::new()
        .route("/api/auth/login", post(login))
        .route("/api/auth/me", get(me))
        .route("/api/auth/refresh", post(refresh))
        .route("/api/auth/logout", post(logout))
        .route("/api/reports/denied", get(always_denied))
        .route("/api/centers/missing", get(missing_center))
        .with_state(stub);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind stub server");
    let addr = listener.local_addr().expect("Failed to read stub address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Stub server failed");
    });

    format!("http://{addr}")
}

/// Client that already holds `access` and the stub's refresh token.
pub fn client_with_access(config: ApiConfig, access: &str) -> ApiClient {
    let tokens = MemoryTokenStore::with_tokens(TokenPair {
        access_token: access.to_string(),
        refresh_token: REFRESH_TOKEN.to_string(),
    });
    ApiClient::with_store(config, Arc::new(tokens))
}
