//! Error taxonomy shared by every backend call.
//!
//! DESIGN
//! ======
//! A 401 is its own variant so callers can clear the session and redirect
//! without string matching. Everything else is terminal for the user action
//! that triggered it; nothing here is retried.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde_json::Value;

/// Failure of a single backend request or of the validation guarding it.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// An authenticated call was attempted with no stored token.
    #[error("User not authenticated.")]
    MissingToken,
    /// The backend answered 401.
    #[error("Session expired. Please login again.")]
    Unauthorized,
    /// Non-2xx response carrying a `detail` message.
    #[error("{detail}")]
    Rejected { status: u16, detail: String },
    /// Non-2xx response without a usable body.
    #[error("request failed with status {0}")]
    Status(u16),
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The response body did not match the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),
    /// Client-side validation rejected the action before any request.
    #[error("{0}")]
    Validation(String),
}

impl ApiError {
    /// Classify a non-success HTTP status and its raw body.
    ///
    /// `body` is inspected for a JSON `{"detail": "..."}` message.
    #[must_use]
    pub fn from_response(status: u16, body: &str) -> Self {
        if status == 401 {
            return Self::Unauthorized;
        }
        match detail_message(body) {
            Some(detail) => Self::Rejected { status, detail },
            None => Self::Status(status),
        }
    }

    /// Classify a failure from an unauthenticated endpoint (login, register).
    ///
    /// There is no session to expire there, so a 401 means rejected
    /// credentials and is reported like any other refusal.
    #[must_use]
    pub fn from_public_response(status: u16, body: &str) -> Self {
        match detail_message(body) {
            Some(detail) => Self::Rejected { status, detail },
            None => Self::Status(status),
        }
    }

    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }

    /// Server-supplied detail, if any.
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Rejected { detail, .. } => Some(detail),
            _ => None,
        }
    }
}

/// Whether a status code is in the 2xx range.
#[must_use]
pub fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Extract a `detail` message from an error body.
///
/// String details are returned as-is. List details (validation errors) are
/// joined from their `msg` fields.
#[must_use]
pub fn detail_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Array(items) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str))
                .collect();
            if messages.is_empty() {
                None
            } else {
                Some(messages.join("; "))
            }
        }
        _ => None,
    }
}
