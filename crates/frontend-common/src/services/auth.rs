//! Session API service

use crate::client::{create_authenticated_client, create_public_client};
use crate::storage::BrowserTokenStore;
use peakfit_core::TokenStore;
use peakfit_http::ClientError;
use peakfit_http::types::{
    CurrentUser, LoginRequest, RegisterRequest, RegisterResponse, TokenPair,
};
use serde_json::Value;

/// Shown when a registration failure carries no field messages
pub const REGISTER_FAILED: &str = "Registration failed";

/// Session API service
#[derive(Clone)]
pub struct AuthApiService;

impl AuthApiService {
    /// Create a new auth API service
    pub fn new() -> Self {
        Self
    }
}

impl Default for AuthApiService {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthApiService {
    /// Sign in and keep both tokens in localStorage
    pub async fn login(&self, email: String, password: String) -> Result<TokenPair, String> {
        let client = create_public_client().map_err(|e| format!("Failed to get client: {e}"))?;

        let pair = client
            .obtain_token(&LoginRequest { email, password })
            .await
            .map_err(|e| e.to_string())?;

        BrowserTokenStore.store_pair(&pair);
        tracing::debug!("Signed in, tokens stored");
        Ok(pair)
    }

    /// Drop both tokens
    pub fn logout(&self) {
        BrowserTokenStore.clear_all();
        tracing::debug!("Signed out, tokens cleared");
    }

    /// Create a member account
    pub async fn register(&self, request: RegisterRequest) -> Result<RegisterResponse, String> {
        let client = create_public_client().map_err(|e| format!("Failed to get client: {e}"))?;

        client.register(&request).await.map_err(|e| match e {
            ClientError::BadRequest(body) => field_messages(&body),
            other => other.to_string(),
        })
    }

    /// Profile of the signed-in user
    pub async fn current_user(&self) -> Result<CurrentUser, String> {
        let client = create_authenticated_client()
            .map_err(|e| format!("Failed to get client: {e}"))?
            .ok_or_else(|| "Not signed in".to_string())?;

        client.current_user().await.map_err(|e| e.to_string())
    }
}

/// Flatten a validation body like `{"email": ["taken"]}` into one message
/// per line.
pub fn field_messages(body: &str) -> String {
    fn collect(value: &Value, out: &mut Vec<String>) {
        match value {
            Value::String(s) => out.push(s.clone()),
            Value::Array(items) => items.iter().for_each(|v| collect(v, out)),
            Value::Object(map) => map.values().for_each(|v| collect(v, out)),
            Value::Null => {}
            other => out.push(other.to_string()),
        }
    }

    let Ok(value) = serde_json::from_str::<Value>(body) else {
        return REGISTER_FAILED.to_string();
    };

    let mut messages = Vec::new();
    collect(&value, &mut messages);

    if messages.is_empty() {
        REGISTER_FAILED.to_string()
    } else {
        messages.join("\n")
    }
}
