//! Backend endpoint paths and URL composition.
//!
//! Paths are relative to a base URL (scheme + host, optionally a prefix).
//! Callers join them with [`url`] so a trailing slash on the base never
//! produces `//` in the request path.

#[cfg(test)]
#[path = "endpoints_test.rs"]
mod endpoints_test;

/// Base URL used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

pub const AUTH_LOGIN: &str = "/api/v1/auth/login";
pub const AUTH_REGISTER: &str = "/api/v1/auth/register";
pub const USERS_ME: &str = "/api/v1/users/me";

pub const LEADS_UPLOAD_CSV: &str = "/api/v1/leads/upload-csv";
pub const LEADS_SCORE_ALL: &str = "/api/v1/leads/score-all";
pub const LEADS_DOWNLOAD_SCORED_CSV: &str = "/api/v1/leads/download-scored-csv";

pub const CONTENT_GENERATE: &str = "/api/v1/content/generate";
pub const CONTENT_SAVE: &str = "/api/v1/content/save";

pub const SOCIAL_CAMPAIGNS: &str = "/api/v1/social/campaigns";
pub const SOCIAL_PROCESS_SCHEDULED_POSTS: &str = "/api/v1/social/process-scheduled-posts";

pub const CHATBOT_CHAT: &str = "/api/v1/chatbot/chat";

/// Stateless chat transport.
pub const GENERIC_CHAT: &str = "/api/chat";
/// File attachment transport for the chat widget.
pub const GENERIC_UPLOAD_FILE: &str = "/api/upload-file";

/// Join `base` and an absolute endpoint `path`.
#[must_use]
pub fn url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    }
}

/// Optional query parameters for the scored-CSV download.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DownloadOptions {
    /// Maximum number of rows to return.
    pub limit: Option<u32>,
    /// Whether rows the backend could not score are included.
    pub include_empty_scores: Option<bool>,
}

impl DownloadOptions {
    /// Render as a query string including the leading `?`, or empty.
    #[must_use]
    pub fn query_string(&self) -> String {
        let mut parts = Vec::new();
        if let Some(limit) = self.limit {
            parts.push(format!("limit={limit}"));
        }
        if let Some(include) = self.include_empty_scores {
            parts.push(format!("include_empty_scores={include}"));
        }
        if parts.is_empty() {
            String::new()
        } else {
            format!("?{}", parts.join("&"))
        }
    }
}

/// Path of the scored-CSV download including its query string.
#[must_use]
pub fn download_scored_csv_path(options: DownloadOptions) -> String {
    format!("{LEADS_DOWNLOAD_SCORED_CSV}{}", options.query_string())
}

/// `Authorization` header value for a bearer token.
#[must_use]
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}
