//! Token store backed by the browser's localStorage

use peakfit_core::{TokenKey, TokenStore};
use web_sys::Storage;

/// Get localStorage, if the browser lets us have it
fn get_local_storage() -> Option<Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// [`TokenStore`] over `window.localStorage`.
///
/// Unavailable storage (private mode, disabled cookies, no window) reads as
/// empty and drops writes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BrowserTokenStore;

impl TokenStore for BrowserTokenStore {
    fn get(&self, key: TokenKey) -> Option<String> {
        get_local_storage()?
            .get_item(key.storage_key())
            .ok()
            .flatten()
    }

    fn set(&self, key: TokenKey, value: &str) {
        let Some(storage) = get_local_storage() else {
            tracing::warn!(%key, "localStorage unavailable, token not saved");
            return;
        };
        if storage.set_item(key.storage_key(), value).is_err() {
            tracing::warn!(%key, "Failed to write token to localStorage");
        }
    }

    fn clear_all(&self) {
        let Some(storage) = get_local_storage() else {
            tracing::warn!("localStorage unavailable, tokens not cleared");
            return;
        };
        remove_tokens(|name| storage.remove_item(name).map_err(drop));
    }
}

/// Remove every token key, continuing past failures. Returns the keys that
/// could not be removed.
fn remove_tokens(mut remove: impl FnMut(&str) -> Result<(), ()>) -> Vec<TokenKey> {
    TokenKey::ALL
        .into_iter()
        .filter(|key| {
            let failed = remove(key.storage_key()).is_err();
            if failed {
                tracing::warn!(%key, "Failed to remove token from localStorage");
            }
            failed
        })
        .collect()
}
