//! Registration page.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::components::A;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use wire::auth::{RegisterRequest, Role};

use crate::state::session::SessionState;

pub const REGISTER_SUCCESS: &str = "Registration successful. Redirecting to home...";
pub const REGISTER_FAILED: &str = "Registration failed";

/// Registration body from raw form input.
pub fn register_request(name: &str, email: &str, password: &str, role: Role, is_active: bool) -> RegisterRequest {
    RegisterRequest {
        email: email.trim().to_owned(),
        username: name.trim().to_owned(),
        password: password.to_owned(),
        role,
        is_active,
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let role = RwSignal::new(Role::default());
    let is_active = RwSignal::new(true);
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
        let request = register_request(&name.get(), &email.get(), &password.get(), role.get(), is_active.get());
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            let alive = alive.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::register(&request).await;
                busy.set(false);
                let token = match &result {
                    Ok(resp) => super::login::issued_token(resp).map(str::to_owned),
                    Err(_) => None,
                };
                let Some(token) = token else {
                    let message = match &result {
                        Err(e) => {
                            log::error!("registration failed: {e}");
                            super::login::auth_failure_message(e, REGISTER_FAILED)
                        }
                        Ok(_) => REGISTER_FAILED.to_owned(),
                    };
                    crate::util::browser::alert(&message);
                    return;
                };
                crate::util::auth::store_session_token(&token);
                session.update(|s| s.sign_in(token));
                success.set(true);
                gloo_timers::future::sleep(wire::auth::REGISTER_REDIRECT_DELAY).await;
                if alive.load(std::sync::atomic::Ordering::Relaxed) {
                    navigate("/", NavigateOptions::default());
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (request, session);
        }
    };

    view! {
        <div class="auth-page">
            <Show when=move || success.get()>
                <div class="auth-page__toast">{REGISTER_SUCCESS}</div>
            </Show>
            <div class="auth-card">
                <h2>"Create account"</h2>
                <form class="auth-form" on:submit=on_submit>
                    <label>
                        "Name"
                        <input
                            type="text"
                            required
                            placeholder="Your name"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </label>
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
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Role"
                        <select
                            prop:value=move || role.get().as_str()
                            on:change=move |ev| role.set(Role::from_form_value(&event_target_value(&ev)))
                        >
                            {Role::ALL
                                .into_iter()
                                .map(|r| view! { <option value=r.as_str()>{r.as_str()}</option> })
                                .collect_view()}
                        </select>
                    </label>
                    <label class="auth-form__checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || is_active.get()
                            on:change=move |ev| is_active.set(event_target_checked(&ev))
                        />
                        "Active"
                    </label>
                    <button class="button button--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Registering..." } else { "Register" }}
                    </button>
                </form>
                <p class="auth-card__switch">
                    "Already registered? "
                    <A href="/login">"Login"</A>
                </p>
            </div>
        </div>
    }
}
