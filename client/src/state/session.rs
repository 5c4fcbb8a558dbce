//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mirrors the stored token so the shell can render signed-in chrome. The
//! REST layer still reads the token from storage on every request; this
//! copy is only for rendering and route guards.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use wire::auth::UserProfile;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    pub token: Option<String>,
    pub user: Option<UserProfile>,
    /// True until the stored token has been read on the client.
    pub loading: bool,
    /// Set when a 401 cleared the session; a hard redirect to `/login` is
    /// already under way, so route guards stay quiet.
    pub expired: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            token: None,
            user: None,
            loading: true,
            expired: false,
        }
    }
}

impl SessionState {
    /// State after reading storage.
    pub fn restored(token: Option<String>) -> Self {
        Self {
            token,
            user: None,
            loading: false,
            expired: false,
        }
    }

    pub fn is_signed_in(&self) -> bool {
        self.token.is_some()
    }

    pub fn sign_in(&mut self, token: String) {
        self.token = Some(token);
        self.user = None;
        self.loading = false;
        self.expired = false;
    }

    pub fn sign_out(&mut self) {
        self.token = None;
        self.user = None;
        self.loading = false;
    }

    /// Drop the session after the backend rejected the token.
    pub fn expire(&mut self) {
        self.sign_out();
        self.expired = true;
    }
}
