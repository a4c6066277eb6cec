//! PeakFit HTTP client
//!
//! Typed access to the token endpoints of the PeakFit REST API. The client
//! doubles as the [`peakfit_core::TokenRefresher`] used by the route guard.

pub mod client;
pub mod types;

pub use client::error::ClientError;
pub use client::{PeakfitClient, PeakfitClientBuilder};
