//! PeakFit session core
//!
//! Token storage, advisory claims decoding, role classification and the route
//! guard state machine shared by the browser front-end and its HTTP client.

pub mod claims;
pub mod error;
pub mod guard;
pub mod role;
pub mod token_store;

pub use claims::{Claims, Role, decode_claims};
pub use error::{AuthError, AuthResult, DecodeError};
pub use guard::{
    AccessStatus, Clock, FixedClock, GuardState, MountHandle, RouteGuard, SystemClock,
    TokenRefresher,
};
pub use role::RoleInfo;
pub use token_store::{
    ACCESS_TOKEN, MemoryTokenStore, REFRESH_TOKEN, TokenKey, TokenPair, TokenStore,
};
