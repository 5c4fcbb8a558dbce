//! Listing of campaigns the backend has scheduled.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::hooks::use_navigate;
use wire::campaign;

use crate::state::campaigns::{LIST_EMPTY, ScheduledCampaignsState};
use crate::state::session::SessionState;
use crate::util::auth::install_unauth_redirect;

#[component]
pub fn ScheduledCampaignsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    install_unauth_redirect(session, use_navigate());

    let state = RwSignal::new(ScheduledCampaignsState::default());

    #[cfg(feature = "hydrate")]
    {
        if crate::util::storage::load_token().is_some() {
            leptos::task::spawn_local(async move {
                let result = crate::net::api::fetch_scheduled_campaigns().await;
                if let Err(e) = &result {
                    log::error!("scheduled campaigns fetch failed: {e}");
                }
                state.set(ScheduledCampaignsState::from_result(result));
            });
        }
    }

    view! {
        <div class="scheduled-page">
            <h1>"Scheduled campaigns"</h1>
            {move || match state.get() {
                ScheduledCampaignsState::Loading => view! { <p>"Loading..."</p> }.into_any(),
                ScheduledCampaignsState::Failed(message) => view! { <p class="form-error">{message}</p> }.into_any(),
                ScheduledCampaignsState::Loaded(campaigns) if campaigns.is_empty() => {
                    view! { <p>{LIST_EMPTY}</p> }.into_any()
                }
                ScheduledCampaignsState::Loaded(campaigns) => {
                    view! {
                        <table class="campaign-table">
                            <thead>
                                <tr>
                                    <th>"Name"</th>
                                    <th>"Start Date"</th>
                                    <th>"End Date"</th>
                                    <th>"Status"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {campaigns
                                    .into_iter()
                                    .map(|c| {
                                        view! {
                                            <tr>
                                                <td>{c.name}</td>
                                                <td>{campaign::format_timestamp(&c.start_date)}</td>
                                                <td>{campaign::format_timestamp(&c.end_date)}</td>
                                                <td class="campaign-table__status">{c.status}</td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()}
                            </tbody>
                        </table>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
