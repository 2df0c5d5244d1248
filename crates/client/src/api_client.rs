use reqwest::{header, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared_types::{
    join_url, ApiConfig, AppError, AppErrorKind, RefreshRequest, RefreshResponse, TokenPair,
};
use std::sync::Arc;

use crate::token::{MemoryTokenStore, TokenStore};

pub(crate) const REFRESH_PATH: &str = "/auth/refresh";

/// JSON client for the ExpertLink REST API.
///
/// Every request carries the stored access token as a bearer token. A 401 on
/// an authenticated request triggers one token refresh and one retry. A
/// rejected refresh clears the stored tokens.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
    base_url: String,
    tokens: Arc<dyn TokenStore>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

fn build_http(config: &ApiConfig) -> reqwest::Client {
    let builder = reqwest::Client::builder();
    #[cfg(not(target_arch = "wasm32"))]
    let builder = builder.timeout(std::time::Duration::from_secs(config.request_timeout_secs));
    #[cfg(target_arch = "wasm32")]
    let _ = config;
    builder.build().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "failed to build configured http client, using defaults");
        reqwest::Client::new()
    })
}

#[cfg(target_arch = "wasm32")]
fn page_origin() -> Option<String> {
    web_sys::window().and_then(|win| win.location().origin().ok())
}

#[cfg(not(target_arch = "wasm32"))]
fn page_origin() -> Option<String> {
    None
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self::with_store(config, Arc::new(MemoryTokenStore::new()))
    }

    pub fn with_store(config: ApiConfig, tokens: Arc<dyn TokenStore>) -> Self {
        let base_url = config.absolute_base_url(page_origin().as_deref());
        Self {
            http: build_http(&config),
            config,
            base_url,
            tokens,
        }
    }

    /// Absolute base URL every request is sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn tokens(&self) -> &Arc<dyn TokenStore> {
        &self.tokens
    }

    pub fn set_tokens(&self, tokens: TokenPair) {
        self.tokens.set(tokens);
    }

    pub fn clear_tokens(&self) {
        self.tokens.clear();
    }

    pub fn is_authenticated(&self) -> bool {
        self.tokens.access_token().is_some()
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        self.request(Method::GET, path, None::<&()>).await
    }

    pub async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, AppError> {
        self.request(Method::POST, path, Some(body)).await
    }

    pub async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, AppError> {
        self.request(Method::PUT, path, Some(body)).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        self.request(Method::DELETE, path, None::<&()>).await
    }

    /// Send a request, refreshing the access token and retrying once on 401.
    #[tracing::instrument(skip(self, body), fields(method = %method))]
    pub async fn request<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, AppError> {
        let had_token = self.tokens.access_token().is_some();
        let response = self.send(method.clone(), path, body).await?;

        if response.status() == StatusCode::UNAUTHORIZED && had_token && path != REFRESH_PATH {
            tracing::debug!(path, "access token rejected, refreshing");
            match self.refresh().await {
                Ok(()) => {}
                Err(e) if e.kind == AppErrorKind::Unauthorized => {
                    tracing::warn!(error = %e, "token refresh rejected");
                    self.tokens.clear();
                    return Err(AppError::unauthorized("Session expired. Please sign in again."));
                }
                Err(e) => {
                    tracing::warn!(error = %e, "token refresh failed, keeping session");
                    return Err(e);
                }
            }
            let retried = self.send(method, path, body).await?;
            return decode(retried).await;
        }

        decode(response).await
    }

    async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<reqwest::Response, AppError> {
        let mut builder = self
            .http
            .request(method, join_url(&self.base_url, path))
            .header(header::ACCEPT, "application/json");
        if let Some(token) = self.tokens.access_token() {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = body {
            builder = builder.json(body);
        }
        builder
            .send()
            .await
            .map_err(|e| AppError::network(format!("Request to {path} failed: {e}")))
    }

    /// Exchange the stored refresh token for a new access token.
    pub async fn refresh(&self) -> Result<(), AppError> {
        let refresh_token = self
            .tokens
            .refresh_token()
            .ok_or_else(|| AppError::unauthorized("No refresh token"))?;

        let response = self
            .http
            .post(join_url(&self.base_url, REFRESH_PATH))
            .header(header::ACCEPT, "application/json")
            .json(&RefreshRequest {
                refresh_token: refresh_token.clone(),
            })
            .send()
            .await
            .map_err(|e| AppError::network(format!("Token refresh failed: {e}")))?;

        let refreshed: RefreshResponse = decode(response).await?;
        self.tokens.set(TokenPair {
            access_token: refreshed.access_token,
            refresh_token: refreshed.refresh_token.unwrap_or(refresh_token),
        });
        tracing::info!("access token refreshed");
        Ok(())
    }
}

/// Turn a response into `T`, or into an `AppError` for non-2xx statuses.
/// An empty success body decodes as JSON `null`, which lets `T = ()` work.
async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, AppError> {
    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| AppError::network(format!("Failed to read response: {e}")))?;

    if !status.is_success() {
        return Err(AppError::from_response(status.as_u16(), &text));
    }

    let body = if text.trim().is_empty() { "null" } else { text.as_str() };
    serde_json::from_str(body)
        .map_err(|e| AppError::internal(format!("Unexpected response format: {e}")))
}
