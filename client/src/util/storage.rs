//! Browser localStorage helpers for the session token and chat session id.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token is read fresh on every request; nothing caches it in memory.
//! These helpers centralize hydrate-only read/write behavior so pages and
//! the REST layer never repeat web-sys glue. On the server they no-op.

use wire::auth::TOKEN_STORAGE_KEY;
use wire::chat::SESSION_STORAGE_KEY;

#[cfg(feature = "hydrate")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Read a raw string for `key`.
pub fn load_string(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        storage()?.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Write a raw string for `key`.
pub fn save_string(key: &str, value: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = storage() {
            let _ = storage.set_item(key, value);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

/// Delete `key`.
pub fn remove(key: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = storage() {
            let _ = storage.remove_item(key);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
    }
}

/// Current session token, if any. Blank values count as absent.
pub fn load_token() -> Option<String> {
    load_string(TOKEN_STORAGE_KEY).filter(|t| !t.trim().is_empty())
}

pub fn save_token(token: &str) {
    save_string(TOKEN_STORAGE_KEY, token);
}

pub fn clear_token() {
    remove(TOKEN_STORAGE_KEY);
}

/// Chat session id persisted across reloads.
pub fn load_chat_session_id() -> Option<String> {
    load_string(SESSION_STORAGE_KEY).filter(|id| !id.trim().is_empty())
}

pub fn save_chat_session_id(id: &str) {
    save_string(SESSION_STORAGE_KEY, id);
}
