//! Authentication API client methods

use super::{ClientError, PeakfitClient};
use crate::types::{
    LoginRequest, RefreshRequest, RefreshResponse, RegisterRequest, RegisterResponse, TokenPair,
};
use async_trait::async_trait;
use peakfit_core::{AuthResult, TokenRefresher};
use reqwest::{Method, StatusCode};

/// Token pair endpoint
pub const TOKEN_PATH: &str = "/api/token/";

/// Access token refresh endpoint
pub const TOKEN_REFRESH_PATH: &str = "/api/token/refresh/";

/// Account registration endpoint
pub const REGISTER_PATH: &str = "/api/user/register/";

impl PeakfitClient {
    /// Exchange credentials for an access/refresh token pair
    pub async fn obtain_token(&self, credentials: &LoginRequest) -> Result<TokenPair, ClientError> {
        let request = self.request(Method::POST, TOKEN_PATH).json(credentials);
        self.execute(request).await
    }

    /// Exchange a refresh token for a new access token.
    ///
    /// Only a 200 answer counts as success.
    pub async fn refresh_token(&self, refresh: &str) -> Result<RefreshResponse, ClientError> {
        let response = self
            .request(Method::POST, TOKEN_REFRESH_PATH)
            .json(&RefreshRequest {
                refresh: refresh.to_string(),
            })
            .send()
            .await?;
        let status = response.status();

        if status != StatusCode::OK {
            let message = response.text().await.unwrap_or_else(|_| status.to_string());
            return Err(ClientError::from_status(status, message));
        }

        Ok(response.json().await?)
    }

    /// Create a member account
    pub async fn register(
        &self,
        registration: &RegisterRequest,
    ) -> Result<RegisterResponse, ClientError> {
        let request = self.request(Method::POST, REGISTER_PATH).json(registration);
        self.execute(request).await
    }
}

#[async_trait(?Send)]
impl TokenRefresher for PeakfitClient {
    async fn refresh_access(&self, refresh_token: &str) -> AuthResult<String> {
        match self.refresh_token(refresh_token).await {
            Ok(response) => {
                tracing::debug!("Access token refreshed");
                Ok(response.access)
            }
            Err(err) => {
                tracing::warn!(status = ?err.status(), "Token refresh failed: {err}");
                Err(err.into())
            }
        }
    }
}
