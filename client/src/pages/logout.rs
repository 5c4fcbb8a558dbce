//! Logout page: timed sign-out, then back to the landing page.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::state::logout::LogoutPhase;
use crate::state::session::SessionState;

#[component]
pub fn LogoutPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let phase = RwSignal::new(LogoutPhase::default());

    #[cfg(feature = "hydrate")]
    {
        let navigate = use_navigate();
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            let mut current = phase.get_untracked();
            while let Some(delay) = current.delay() {
                gloo_timers::future::sleep(delay).await;
                if !alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    return;
                }
                current = current.next();
                if current.clears_token() {
                    crate::util::storage::clear_token();
                    session.update(SessionState::sign_out);
                    log::info!("session token cleared");
                }
                phase.set(current);
            }
            navigate("/", NavigateOptions::default());
        });
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
    }

    view! {
        <div class="logout-page">
            <div class="logout-card">
                <h2>{move || phase.get().title()}</h2>
                <p>{move || phase.get().subtitle()}</p>
            </div>
        </div>
    }
}
