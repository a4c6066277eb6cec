//! Persistent storage for the session token pair

use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt::{self, Display};
use std::rc::Rc;

/// Storage key under which the access token is kept
pub const ACCESS_TOKEN: &str = "access";

/// Storage key under which the refresh token is kept
pub const REFRESH_TOKEN: &str = "refresh";

/// The two tokens a session owns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKey {
    Access,
    Refresh,
}

impl TokenKey {
    /// All keys, in the order they are cleared on logout
    pub const ALL: [Self; 2] = [Self::Access, Self::Refresh];

    /// Storage key name
    pub fn storage_key(self) -> &'static str {
        match self {
            Self::Access => ACCESS_TOKEN,
            Self::Refresh => REFRESH_TOKEN,
        }
    }
}

impl Display for TokenKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Access => write!(f, "access"),
            Self::Refresh => write!(f, "refresh"),
        }
    }
}

/// Access and refresh tokens as issued by `POST /api/token/`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

/// Key-value storage for session tokens.
///
/// Operations are synchronous and infallible: a store that cannot be reached
/// behaves as if it were empty.
pub trait TokenStore {
    /// Read a token
    fn get(&self, key: TokenKey) -> Option<String>;

    /// Overwrite a token
    fn set(&self, key: TokenKey, value: &str);

    /// Remove both tokens
    fn clear_all(&self);

    /// Write both tokens after a successful login
    fn store_pair(&self, pair: &TokenPair) {
        self.set(TokenKey::Access, &pair.access);
        self.set(TokenKey::Refresh, &pair.refresh);
    }
}

impl<T: TokenStore + ?Sized> TokenStore for &T {
    fn get(&self, key: TokenKey) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: TokenKey, value: &str) {
        (**self).set(key, value);
    }

    fn clear_all(&self) {
        (**self).clear_all();
    }
}

impl<T: TokenStore + ?Sized> TokenStore for Rc<T> {
    fn get(&self, key: TokenKey) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: TokenKey, value: &str) {
        (**self).set(key, value);
    }

    fn clear_all(&self) {
        (**self).clear_all();
    }
}

/// In-memory token store
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    tokens: RefCell<HashMap<TokenKey, String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store already holding a token pair
    pub fn with_pair(pair: &TokenPair) -> Self {
        let store = Self::new();
        store.store_pair(pair);
        store
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self, key: TokenKey) -> Option<String> {
        self.tokens.borrow().get(&key).cloned()
    }

    fn set(&self, key: TokenKey, value: &str) {
        self.tokens.borrow_mut().insert(key, value.to_string());
    }

    fn clear_all(&self) {
        self.tokens.borrow_mut().clear();
    }
}
