//! Browser side of the PeakFit session: localStorage tokens, the API client
//! wiring, route guard hooks and the session service.

pub mod client;
pub mod components;
pub mod config;
pub mod hooks;
pub mod services;
pub mod storage;

pub use client::{create_authenticated_client, create_public_client};
pub use components::Spinner;
pub use config::AuthConfig;
pub use hooks::{use_route_guard, use_user_role};
pub use services::AuthApiService;
pub use storage::BrowserTokenStore;
