//! User account client methods

use super::{ClientError, PeakfitClient};
use crate::types::CurrentUser;
use reqwest::Method;

/// Profile of the token holder
pub const CURRENT_USER_PATH: &str = "/api/users/me/";

impl PeakfitClient {
    /// Fetch the profile of the user the access token belongs to
    pub async fn current_user(&self) -> Result<CurrentUser, ClientError> {
        let request = self.request(Method::GET, CURRENT_USER_PATH);
        self.execute(request).await
    }
}
