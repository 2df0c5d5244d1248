use shared_types::{AppError, AuthUser, LoginRequest, LoginResponse};

use crate::api_client::ApiClient;

impl ApiClient {
    /// Sign in and keep the returned tokens.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthUser, AppError> {
        let request = LoginRequest {
            email: email.trim().to_string(),
            password: password.to_string(),
        };
        let response: LoginResponse = self.post("/auth/login", &request).await?;
        self.set_tokens(response.tokens());
        tracing::info!(user_type = %response.user.user_type, "signed in");
        Ok(response.user)
    }

    /// Fetch the signed-in user. Returns `None` without a request when no
    /// token is stored, and `None` when the session is no longer valid.
    pub async fn current_user(&self) -> Result<Option<AuthUser>, AppError> {
        if !self.is_authenticated() {
            return Ok(None);
        }
        match self.get::<AuthUser>("/auth/me").await {
            Ok(user) => Ok(Some(user)),
            Err(e) if e.is_unauthorized() => {
                self.clear_tokens();
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// Sign out. Local tokens are dropped even if the server call fails.
    pub async fn logout(&self) -> Result<(), AppError> {
        let result = self.post::<_, ()>("/auth/logout", &serde_json::json!({})).await;
        self.clear_tokens();
        if let Err(e) = &result {
            tracing::warn!(error = %e, "logout request failed");
        }
        result
    }
}
