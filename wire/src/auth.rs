//! Authentication payloads and bearer-token helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend issues a JWT-shaped bearer token on login and register. The
//! client never validates it; the payload is decoded only so it can be
//! logged after sign-in. Expiry is discovered reactively through 401s.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::time::Duration;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Local-storage key holding the session token.
pub const TOKEN_STORAGE_KEY: &str = "access_token";

/// Delay between a successful login and navigation home.
pub const LOGIN_REDIRECT_DELAY: Duration = Duration::from_millis(1500);

/// Delay between a successful registration and navigation home.
pub const REGISTER_REDIRECT_DELAY: Duration = Duration::from_millis(2000);

/// Form-encoded body of `POST /api/v1/auth/login`.
///
/// The backend follows the OAuth2 password-flow field names, so the email
/// address travels as `username`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    /// Field pairs in submission order.
    #[must_use]
    pub fn pairs(&self) -> [(&'static str, &str); 2] {
        [("username", &self.username), ("password", &self.password)]
    }
}

/// Account role offered on the registration form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[default]
    Admin,
    User,
}

impl Role {
    pub const ALL: [Role; 2] = [Role::Admin, Role::User];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::User => "User",
        }
    }

    /// Parse a form value; unknown values fall back to the default role.
    #[must_use]
    pub fn from_form_value(value: &str) -> Self {
        match value {
            "User" => Self::User,
            _ => Self::Admin,
        }
    }
}

/// JSON body of `POST /api/v1/auth/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub username: String,
    pub password: String,
    pub role: Role,
    pub is_active: bool,
}

/// Token-bearing response of login and register.
///
/// Register echoes extra account fields; they are kept in `extra` so callers
/// can show them without this type having to track the backend schema.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// The signed-in account as returned by `GET /api/v1/users/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub is_active: bool,
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(D::Error::custom(format!("expected string or number id, got {other}"))),
    }
}

/// Failure to decode a token payload for logging.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("token has no payload segment")]
    MissingPayload,
    #[error("token payload is not base64: {0}")]
    Base64(String),
    #[error("token payload is not JSON: {0}")]
    Json(String),
}

/// Decode the middle segment of a JWT-shaped token into JSON.
///
/// Accepts both the URL-safe and the standard alphabet, padded or not. The
/// signature is not checked.
///
/// # Errors
///
/// Returns [`TokenError`] if the token has fewer than two segments or the
/// payload is not base64-encoded JSON.
pub fn decode_token_payload(token: &str) -> Result<Value, TokenError> {
    let payload = token
        .split('.')
        .nth(1)
        .filter(|segment| !segment.is_empty())
        .ok_or(TokenError::MissingPayload)?;
    let normalized: String = payload
        .trim_end_matches('=')
        .chars()
        .map(|c| match c {
            '+' => '-',
            '/' => '_',
            other => other,
        })
        .collect();
    let bytes = URL_SAFE_NO_PAD
        .decode(normalized.as_bytes())
        .map_err(|e| TokenError::Base64(e.to_string()))?;
    serde_json::from_slice(&bytes).map_err(|e| TokenError::Json(e.to_string()))
}
