//! Frontend configuration

/// Authentication configuration
pub struct AuthConfig;

impl AuthConfig {
    /// localStorage key for the access token
    pub const ACCESS_TOKEN_KEY: &'static str = peakfit_core::ACCESS_TOKEN;

    /// localStorage key for the refresh token
    pub const REFRESH_TOKEN_KEY: &'static str = peakfit_core::REFRESH_TOKEN;

    /// API origin baked in at build time; the page origin is used when unset
    pub const API_URL: Option<&'static str> = option_env!("PEAKFIT_API_URL");

    /// Text shown while the route guard is deciding
    pub const LOADING_TEXT: &'static str = "Loading...";
}
