//! Advisory decoding of access-token claims
//!
//! The payload is read without checking the signature. The backend validates
//! every request it receives, so claims decoded here only drive client-side
//! routing and display.

use crate::error::DecodeError;
use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt::{self, Display};

/// Claims carried in an access token payload
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Claims {
    /// Expiry, epoch seconds
    #[serde(default)]
    pub exp: Option<f64>,
    /// Non-string values read as absent; the role only drives display
    #[serde(default, deserialize_with = "lenient_role")]
    pub role: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn lenient_role<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| v.as_str().map(str::to_owned)))
}

impl Claims {
    /// Whether the token is still valid at `now_ms` (epoch milliseconds).
    ///
    /// Returns `None` when the token has no expiry claim.
    #[allow(clippy::cast_precision_loss)]
    pub fn is_live_at(&self, now_ms: i64) -> Option<bool> {
        self.exp.map(|exp| exp * 1000.0 > now_ms as f64)
    }

    /// Role classification derived from the `role` claim
    pub fn role(&self) -> Role {
        Role::from_claim(self.role.as_deref())
    }
}

/// Decode the payload segment of a JWT-shaped token
pub fn decode_claims(token: &str) -> Result<Claims, DecodeError> {
    let segments: Vec<&str> = token.split('.').collect();
    if segments.len() != 3 {
        return Err(DecodeError::Segments(segments.len()));
    }

    // Accept padded and standard-alphabet payloads as well as strict base64url
    let payload = segments[1]
        .trim_end_matches('=')
        .replace('+', "-")
        .replace('/', "_");
    let bytes = URL_SAFE_NO_PAD.decode(payload)?;

    Ok(serde_json::from_slice(&bytes)?)
}

/// Role classification used for conditional rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Employee,
    Member,
    Anonymous,
}

impl Role {
    /// Map a `role` claim to a variant.
    ///
    /// A token without a role, or with one the front-end does not know, is
    /// shown the member experience.
    pub fn from_claim(claim: Option<&str>) -> Self {
        match claim {
            Some("admin") => Self::Admin,
            Some("employee") => Self::Employee,
            Some("anonymous") => Self::Anonymous,
            _ => Self::Member,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Employee => "employee",
            Self::Member => "member",
            Self::Anonymous => "anonymous",
        }
    }

    /// Staff roles see management entry points
    pub fn is_staff(self) -> bool {
        matches!(self, Self::Admin | Self::Employee)
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
