//! Campaign scheduler: validated form, backend create, local draft table.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use wire::campaign::{self, Audience};

use crate::state::campaigns::CampaignSchedulerState;
use crate::state::session::SessionState;
use crate::util::auth::install_unauth_redirect;
use crate::util::browser;

#[component]
pub fn CampaignSchedulerPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    install_unauth_redirect(session, use_navigate());

    let state = RwSignal::new(CampaignSchedulerState::new(browser::today()));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(campaign) = state.try_update(CampaignSchedulerState::begin_save).flatten() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::create_campaign(&campaign).await;
            match &result {
                Ok(saved) => log::info!("campaign scheduled: {}", saved.name),
                Err(e) => log::error!("campaign create failed: {e}"),
            }
            state.update(|s| s.finish_save(result));
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = campaign;
    };

    view! {
        <div class="campaign-page">
            <h1>"Campaign scheduler"</h1>
            <form class="campaign-form" on:submit=on_submit>
                <label>
                    "Campaign name"
                    <input
                        type="text"
                        prop:value=move || state.get().form.name
                        on:input=move |ev| state.update(|s| s.form.name = event_target_value(&ev))
                    />
                </label>
                <label>
                    "Description"
                    <textarea
                        prop:value=move || state.get().form.description
                        on:input=move |ev| state.update(|s| s.form.description = event_target_value(&ev))
                    ></textarea>
                </label>
                <div class="campaign-form__row">
                    <label>
                        "Start date"
                        <input
                            type="date"
                            prop:value=move || state.get().form.start_date
                            on:change=move |ev| state.update(|s| s.form.start_date = event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Start time"
                        <input
                            type="time"
                            prop:value=move || state.get().form.start_time
                            on:change=move |ev| state.update(|s| s.form.start_time = event_target_value(&ev))
                        />
                    </label>
                </div>
                <div class="campaign-form__row">
                    <label>
                        "End date"
                        <input
                            type="date"
                            prop:value=move || state.get().form.end_date
                            on:change=move |ev| state.update(|s| s.form.end_date = event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "End time"
                        <input
                            type="time"
                            prop:value=move || state.get().form.end_time
                            on:change=move |ev| state.update(|s| s.form.end_time = event_target_value(&ev))
                        />
                    </label>
                </div>
                <div class="campaign-form__row">
                    <label>
                        "Target audience"
                        <select
                            prop:value=move || state.get().form.audience.as_str()
                            on:change=move |ev| {
                                if let Some(audience) = Audience::parse(&event_target_value(&ev)) {
                                    state.update(|s| s.form.audience = audience);
                                }
                            }
                        >
                            {Audience::ALL
                                .into_iter()
                                .map(|a| view! { <option value=a.as_str()>{a.label()}</option> })
                                .collect_view()}
                        </select>
                    </label>
                    <label>
                        "Budget ($)"
                        <input
                            type="number"
                            min="0"
                            step="0.01"
                            prop:value=move || state.get().form.budget
                            on:input=move |ev| state.update(|s| s.form.budget = event_target_value(&ev))
                        />
                    </label>
                </div>
                <div class="campaign-form__actions">
                    <button class="button button--primary" type="submit" disabled=move || state.get().saving>
                        {move || state.get().submit_label()}
                    </button>
                    <Show when=move || state.get().drafts.is_editing()>
                        <button type="button" class="button" on:click=move |_| state.update(CampaignSchedulerState::cancel_edit)>
                            "Cancel"
                        </button>
                    </Show>
                </div>
            </form>
            <Show when=move || state.get().error.is_some()>
                <p class="form-error">{move || state.get().error.unwrap_or_default()}</p>
            </Show>
            <Show when=move || state.get().notice.is_some()>
                <p class="form-notice">{move || state.get().notice.unwrap_or_default()}</p>
            </Show>
            <Show when=move || !state.get().drafts.is_empty()>
                <table class="campaign-table">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Start"</th>
                            <th>"End"</th>
                            <th>"Audience"</th>
                            <th>"Budget"</th>
                            <th>"Status"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            state
                                .get()
                                .drafts
                                .items()
                                .iter()
                                .enumerate()
                                .map(|(idx, c)| {
                                    view! {
                                        <tr>
                                            <td>{c.name.clone()}</td>
                                            <td>{campaign::format_timestamp(&c.start_date)}</td>
                                            <td>{campaign::format_timestamp(&c.end_date)}</td>
                                            <td>{c.target_audience.label()}</td>
                                            <td>{format!("${}", campaign::format_budget(c.budget))}</td>
                                            <td class="campaign-table__status">{c.status.clone()}</td>
                                            <td>
                                                <button on:click=move |_| state.update(|s| s.edit(idx))>"Edit"</button>
                                                <button on:click=move |_| state.update(|s| s.delete(idx))>"Delete"</button>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>
            </Show>
        </div>
    }
}
