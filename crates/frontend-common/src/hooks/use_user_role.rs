//! Role flags for the signed-in user

use crate::storage::BrowserTokenStore;
use peakfit_core::RoleInfo;
use yew::prelude::*;

/// Classify the stored access token once per mount.
///
/// Display only; expiry is not checked here and the server enforces roles.
#[hook]
pub fn use_user_role() -> RoleInfo {
    *use_memo((), |_| RoleInfo::from_store(&BrowserTokenStore))
}
