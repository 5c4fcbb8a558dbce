//! Build-time client configuration.
//!
//! The backend base URL is baked in at compile time from `ADPILOT_API_BASE`
//! so the WASM bundle needs no runtime config fetch.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use wire::endpoints;

/// Base URL of the marketing backend.
pub fn api_base() -> &'static str {
    option_env!("ADPILOT_API_BASE").unwrap_or(endpoints::DEFAULT_BASE_URL)
}

/// Absolute URL of a backend endpoint path.
pub fn api_url(path: &str) -> String {
    endpoints::url(api_base(), path)
}
