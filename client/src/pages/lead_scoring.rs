//! Lead-scoring dashboard: upload a CSV, score it, chart and tabulate.
//!
//! SYSTEM CONTEXT
//! ==============
//! The chain (upload, optional score-all, fetch scored CSV) lives in
//! `net::api::run_lead_scoring`; this page validates the selection, reads the
//! `File` handle out of the input at upload time and renders the result.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use wire::leads;

use crate::components::lead_chart::LeadChart;
use crate::components::lead_table::LeadTable;
use crate::state::leads::LeadScoringState;

#[component]
pub fn LeadScoringPage() -> impl IntoView {
    let state = RwSignal::new(LeadScoringState::default());
    let file_input = NodeRef::<leptos::html::Input>::new();
    let downloading = RwSignal::new(false);

    let on_file_change = move |_ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let Some(input) = file_input.get() else {
                return;
            };
            let meta = input
                .files()
                .and_then(|files| files.get(0))
                .map(|file| (file.name(), file.type_()));
            let selection = meta.as_ref().map(|(name, mime)| (name.as_str(), mime.as_str()));
            let accepted = state.try_update(|s| s.select_file(selection)).unwrap_or(false);
            if !accepted {
                input.set_value("");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = file_input;
        }
    };

    let on_upload = move |_| {
        let has_token = crate::util::storage::load_token().is_some();
        if !state.try_update(|s| s.begin_upload(has_token)).unwrap_or(false) {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let file = file_input.get().and_then(|input| input.files()).and_then(|files| files.get(0));
            let Some(file) = file else {
                state.update(|s| s.finish_upload(Err(wire::ApiError::Validation(leads::NO_FILE_SELECTED.to_owned()))));
                return;
            };
            let mode = state.get_untracked().mode;
            leptos::task::spawn_local(async move {
                let result = crate::net::api::run_lead_scoring(&file, mode).await;
                if let Ok(scored) = &result {
                    log::info!("scored {} leads", scored.leads.len());
                }
                state.update(|s| s.finish_upload(result.map(|scored| scored.leads)));
            });
        }
    };

    let on_download = move |_| {
        if downloading.get() {
            return;
        }
        downloading.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if let Err(e) = crate::net::api::download_scored_csv().await {
                log::error!("scored CSV download failed: {e}");
                if !e.is_unauthorized() {
                    crate::util::browser::alert(leads::DOWNLOAD_FAILED);
                }
            }
            downloading.set(false);
        });
    };

    let scored = Signal::derive(move || state.get().leads);

    view! {
        <div class="lead-scoring-page">
            <h1>"Lead scoring"</h1>
            <div class="lead-scoring-page__upload">
                <input
                    node_ref=file_input
                    type="file"
                    accept=".csv,text/csv"
                    on:change=on_file_change
                />
                <button
                    class="button button--primary"
                    on:click=on_upload
                    disabled=move || state.get().loading
                >
                    {move || if state.get().loading { "Processing..." } else { "Upload & score" }}
                </button>
            </div>
            <Show when=move || state.get().error.is_some()>
                <p class="form-error">{move || state.get().error.unwrap_or_default()}</p>
            </Show>
            <Show when=move || state.get().has_results()>
                <section class="lead-scoring-page__results">
                    <LeadChart leads=scored/>
                    <LeadTable leads=scored/>
                    <button
                        class="button button--secondary"
                        on:click=on_download
                        disabled=move || downloading.get()
                    >
                        "Download scored CSV"
                    </button>
                </section>
            </Show>
        </div>
    }
}
