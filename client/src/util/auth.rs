//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical unauthenticated redirect
//! behavior, and every authenticated call must react to a 401 the same way:
//! clear the stored token and send the user to `/login`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::SessionState;
use crate::util::{browser, storage};

pub const LOGIN_PATH: &str = "/login";
pub const LOGIN_REQUIRED: &str = "You must be logged in to access this page.";

/// Whether a guarded page should bounce to `/login`.
///
/// An expired session is already being redirected by [`handle_unauthorized`].
pub fn should_redirect_unauth(state: &SessionState) -> bool {
    !state.loading && !state.expired && !state.is_signed_in()
}

/// Redirect to `/login` whenever the session has loaded and no token is present.
///
/// The user is told why once per redirect.
pub fn install_unauth_redirect<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&session.get()) {
            browser::alert(LOGIN_REQUIRED);
            navigate(LOGIN_PATH, NavigateOptions::default());
        }
    });
}

/// Persist a freshly issued token and log its payload.
pub fn store_session_token(token: &str) {
    storage::save_token(token);
    log_token_payload(token);
}

fn log_token_payload(token: &str) {
    match wire::auth::decode_token_payload(token) {
        Ok(payload) => {
            #[cfg(feature = "hydrate")]
            log::info!("[User Info] {payload}");
            #[cfg(not(feature = "hydrate"))]
            let _ = payload;
        }
        Err(e) => {
            #[cfg(feature = "hydrate")]
            log::warn!("failed to decode token payload: {e}");
            #[cfg(not(feature = "hydrate"))]
            let _ = e;
        }
    }
}

/// React to a 401 from any authenticated call.
///
/// Clears stored state, tells the user, and forces a full navigation to
/// the login page so every page-local signal is dropped.
pub fn handle_unauthorized() {
    storage::clear_token();
    if let Some(session) = use_context::<RwSignal<SessionState>>() {
        session.update(SessionState::expire);
    }
    browser::alert(&wire::ApiError::Unauthorized.to_string());
    browser::set_href(LOGIN_PATH);
}
