//! Profile viewer for the signed-in account.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use wire::ApiError;
use wire::auth::UserProfile;

use crate::state::session::SessionState;

pub const NOT_LOGGED_IN: &str = "You are not logged in.";
pub const LOADING: &str = "Loading profile...";
pub const NO_DATA: &str = "No user data found.";
pub const FETCH_FAILED: &str = "Failed to fetch profile";
pub const UNEXPECTED: &str = "Something went wrong.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProfileView {
    NotLoggedIn,
    Loading,
    Loaded(UserProfile),
    Empty,
}

/// Alert text for a failed profile fetch.
pub fn profile_failure_message(err: &ApiError) -> String {
    match err {
        ApiError::Rejected { detail, .. } => detail.clone(),
        ApiError::Status(_) | ApiError::Unauthorized => FETCH_FAILED.to_owned(),
        _ => UNEXPECTED.to_owned(),
    }
}

pub fn active_label(is_active: bool) -> &'static str {
    if is_active { "Yes" } else { "No" }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let view_state = RwSignal::new(ProfileView::Loading);

    #[cfg(feature = "hydrate")]
    {
        if crate::util::storage::load_token().is_none() {
            crate::util::browser::alert(NOT_LOGGED_IN);
            view_state.set(ProfileView::NotLoggedIn);
        } else {
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_current_user().await {
                    Ok(user) => {
                        session.update(|s| s.user = Some(user.clone()));
                        view_state.set(ProfileView::Loaded(user));
                    }
                    Err(e) => {
                        log::error!("profile fetch failed: {e}");
                        if !e.is_unauthorized() {
                            crate::util::browser::alert(&profile_failure_message(&e));
                        }
                        view_state.set(ProfileView::Empty);
                    }
                }
            });
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
    }

    view! {
        <div class="profile-page">
            {move || match view_state.get() {
                ProfileView::NotLoggedIn => view! { <p class="profile-page__notice">{NOT_LOGGED_IN}</p> }.into_any(),
                ProfileView::Loading => view! { <p class="profile-page__notice">{LOADING}</p> }.into_any(),
                ProfileView::Empty => view! { <p class="profile-page__notice">{NO_DATA}</p> }.into_any(),
                ProfileView::Loaded(user) => {
                    view! {
                        <div class="profile-card">
                            <h2>"Your profile"</h2>
                            <dl>
                                <dt>"Username"</dt>
                                <dd>{user.username}</dd>
                                <dt>"Email"</dt>
                                <dd>{user.email}</dd>
                                <dt>"Role"</dt>
                                <dd>{user.role}</dd>
                                <dt>"Active"</dt>
                                <dd>{active_label(user.is_active)}</dd>
                                <dt>"User ID"</dt>
                                <dd>{user.id}</dd>
                            </dl>
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
