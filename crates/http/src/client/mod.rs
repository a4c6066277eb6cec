//! PeakFit HTTP client

pub mod auth;
pub mod error;
pub mod users;

use error::ClientError;
use reqwest::{Client, ClientBuilder, header};

/// User-Agent sent by native builds
pub const USER_AGENT: &str = concat!("peakfit-client/", env!("CARGO_PKG_VERSION"));

/// PeakFit API client
#[derive(Clone)]
pub struct PeakfitClient {
    client: Client,
    base_url: String,
    access_token: Option<String>,
}

impl PeakfitClient {
    /// Client for `base_url` without credentials
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::builder().base_url(base_url).build()
    }

    pub fn builder() -> PeakfitClientBuilder {
        PeakfitClientBuilder::default()
    }

    /// API origin, without a trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Copy of this client that sends `token` as its bearer credential
    pub fn with_access_token(&self, token: impl Into<String>) -> Self {
        Self {
            client: self.client.clone(),
            base_url: self.base_url.clone(),
            access_token: Some(token.into()),
        }
    }

    /// Request to an API path, carrying the bearer header when a token is set
    pub fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.client.request(method, url);

        if let Some(token) = &self.access_token {
            request = request.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }

        request
    }

    /// Send `request` and decode a 2xx JSON body; other statuses become
    /// [`ClientError::from_status`] with the response text as message
    pub async fn execute<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_else(|_| status.to_string());
            return Err(ClientError::from_status(status, message));
        }

        Ok(response.json().await?)
    }
}

/// Builder for [`PeakfitClient`]; `base_url` is required
#[derive(Default)]
pub struct PeakfitClientBuilder {
    base_url: Option<String>,
    access_token: Option<String>,
}

impl PeakfitClientBuilder {
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Bearer token sent with every request
    pub fn access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    pub fn build(self) -> Result<PeakfitClient, ClientError> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::Configuration("base_url is required".into()))?;

        // Paths start with '/', so keep the base without a trailing one
        let base_url = base_url.trim_end_matches('/').to_string();

        // Browsers set their own User-Agent
        #[cfg(not(target_arch = "wasm32"))]
        let client = ClientBuilder::new().user_agent(USER_AGENT).build()?;
        #[cfg(target_arch = "wasm32")]
        let client = ClientBuilder::new().build()?;

        Ok(PeakfitClient {
            client,
            base_url,
            access_token: self.access_token,
        })
    }
}
