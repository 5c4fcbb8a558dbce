//! Login page: email + password exchanged for a bearer token.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::components::A;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use wire::ApiError;
use wire::auth::{LoginForm, TokenResponse};

use crate::state::session::SessionState;

pub const LOGIN_SUCCESS: &str = "Login successful. Redirecting...";
pub const LOGIN_FAILED: &str = "Login failed";
pub const TRANSPORT_FAILED: &str = "Something went wrong. Please try again later.";

/// Alert text for a failed login or registration.
///
/// Server refusals show their `detail`; transport failures get the generic
/// apology; anything else falls back to `fallback`.
pub fn auth_failure_message(err: &ApiError, fallback: &str) -> String {
    match err {
        ApiError::Rejected { detail, .. } => detail.clone(),
        ApiError::Network(_) => TRANSPORT_FAILED.to_owned(),
        _ => fallback.to_owned(),
    }
}

/// Token from a successful response; blank tokens count as a failure.
pub fn issued_token(resp: &TokenResponse) -> Option<&str> {
    let token = resp.access_token.trim();
    (!token.is_empty()).then_some(token)
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let success = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();
    #[cfg(feature = "hydrate")]
    let alive = {
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let flag = alive.clone();
        on_cleanup(move || flag.store(false, std::sync::atomic::Ordering::Relaxed));
        alive
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let form = LoginForm {
            username: email.get().trim().to_owned(),
            password: password.get(),
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            let alive = alive.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::login(&form).await;
                busy.set(false);
                let token = match &result {
                    Ok(resp) => issued_token(resp).map(str::to_owned),
                    Err(_) => None,
                };
                let Some(token) = token else {
                    let message = match &result {
                        Err(e) => {
                            log::error!("login failed: {e}");
                            auth_failure_message(e, LOGIN_FAILED)
                        }
                        Ok(_) => LOGIN_FAILED.to_owned(),
                    };
                    crate::util::browser::alert(&message);
                    return;
                };
                crate::util::auth::store_session_token(&token);
                session.update(|s| s.sign_in(token));
                success.set(true);
                email.set(String::new());
                password.set(String::new());
                gloo_timers::future::sleep(wire::auth::LOGIN_REDIRECT_DELAY).await;
                if alive.load(std::sync::atomic::Ordering::Relaxed) {
                    navigate("/", NavigateOptions::default());
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (form, session);
        }
    };

    view! {
        <div class="auth-page">
            <Show when=move || success.get()>
                <div class="auth-page__toast">{LOGIN_SUCCESS}</div>
            </Show>
            <div class="auth-card">
                <h2>"Welcome back"</h2>
                <form class="auth-form" on:submit=on_submit>
                    <label>
                        "Email"
                        <input
                            type="email"
                            required
                            placeholder="you@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Password"
                        <input
                            type="password"
                            required
                            placeholder="••••••••"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="button button--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Logging in..." } else { "Login" }}
                    </button>
                </form>
                <p class="auth-card__switch">
                    "No account yet? "
                    <A href="/register">"Register"</A>
                </p>
            </div>
        </div>
    }
}
