//! Client configuration and initialization

use crate::config::AuthConfig;
use crate::storage::BrowserTokenStore;
pub use peakfit_http::ClientError;
use peakfit_core::{TokenKey, TokenStore};
use peakfit_http::PeakfitClient;
use std::cell::RefCell;
use web_sys::window;

thread_local! {
    /// Shared unauthenticated client
    static PUBLIC_CLIENT: RefCell<Option<PeakfitClient>> = const { RefCell::new(None) };
}

/// Get the base URL for API calls
fn get_base_url() -> String {
    if let Some(url) = AuthConfig::API_URL {
        return url.to_string();
    }

    // Try to get from window location
    if let Some(window) = window() {
        if let Ok(location) = window.location().origin() {
            return location;
        }
    }

    // Default to relative URLs
    String::new()
}

/// Get the public client instance (for the token endpoints and registration)
pub fn create_public_client() -> Result<PeakfitClient, ClientError> {
    PUBLIC_CLIENT.with(|cell| {
        let mut slot = cell.borrow_mut();
        if let Some(client) = slot.as_ref() {
            return Ok(client.clone());
        }

        let client = PeakfitClient::builder().base_url(get_base_url()).build()?;
        *slot = Some(client.clone());
        Ok(client)
    })
}

/// Client carrying the stored access token, or `None` when signed out
pub fn create_authenticated_client() -> Result<Option<PeakfitClient>, ClientError> {
    let Some(token) = BrowserTokenStore.get(TokenKey::Access) else {
        return Ok(None);
    };
    Ok(Some(create_public_client()?.with_access_token(token)))
}
