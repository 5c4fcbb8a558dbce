//! Content editor: Markdown drafting, AI generation and a saved list.

use leptos::prelude::*;
use wire::content::{self, ContentType, Tone};

use crate::components::markdown_preview::MarkdownPreview;
use crate::state::content::ContentEditorState;

#[component]
pub fn ContentEditorPage() -> impl IntoView {
    let state = RwSignal::new(ContentEditorState::default());
    let textarea = NodeRef::<leptos::html::Textarea>::new();

    let sync_cursor = move || {
        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = textarea.get_untracked() {
                if let Ok(Some(pos)) = el.selection_start() {
                    state.update(|s| s.cursor = pos as usize);
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = textarea;
        }
    };

    let on_generate = move |_| {
        if state.get().busy {
            return;
        }
        let request = state.get().generate_request();
        state.update(|s| s.busy = true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::generate_content(&request).await;
            if let Err(e) = &result {
                log::error!("AI generation failed: {e}");
            }
            state.update(|s| s.finish_generate(result));
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = request;
    };

    let on_save = move |_| {
        let Some(draft) = state.try_update(ContentEditorState::begin_save).flatten() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::save_content(&draft).await;
            if let Err(e) = &result {
                log::error!("content save failed: {e}");
            }
            state.update(|s| s.finish_save(draft, result));
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = draft;
    };

    let preview_source = Signal::derive(move || state.get().content);

    view! {
        <div class="content-editor-page">
            <h1>"Content editor"</h1>
            <div class="content-editor-page__options">
                <label>
                    "Tone"
                    <select
                        prop:value=move || state.get().tone.as_str()
                        on:change=move |ev| {
                            if let Some(tone) = Tone::parse(&event_target_value(&ev)) {
                                state.update(|s| s.tone = tone);
                            }
                        }
                    >
                        {Tone::ALL
                            .into_iter()
                            .map(|t| view! { <option value=t.as_str()>{t.label()}</option> })
                            .collect_view()}
                    </select>
                </label>
                <label>
                    "Content type"
                    <select
                        prop:value=move || state.get().content_type.as_str()
                        on:change=move |ev| {
                            if let Some(kind) = ContentType::parse(&event_target_value(&ev)) {
                                state.update(|s| s.content_type = kind);
                            }
                        }
                    >
                        {ContentType::ALL
                            .into_iter()
                            .map(|c| view! { <option value=c.as_str()>{c.label()}</option> })
                            .collect_view()}
                    </select>
                </label>
                <label>
                    "Industry"
                    <input
                        type="text"
                        placeholder="e.g. retail"
                        prop:value=move || state.get().industry
                        on:input=move |ev| state.update(|s| s.industry = event_target_value(&ev))
                    />
                </label>
                <label>
                    "Keywords"
                    <input
                        type="text"
                        placeholder="comma, separated"
                        prop:value=move || state.get().keywords
                        on:input=move |ev| state.update(|s| s.keywords = event_target_value(&ev))
                    />
                </label>
                <label>
                    "Schedule date"
                    <input
                        type="date"
                        prop:value=move || {
                            state.get().scheduled_date.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default()
                        }
                        on:change=move |ev| {
                            let raw = event_target_value(&ev);
                            let date = chrono::NaiveDate::parse_from_str(&raw, "%Y-%m-%d").ok();
                            state.update(|s| s.scheduled_date = date);
                        }
                    />
                </label>
            </div>
            <label class="content-editor-page__prompt">
                "Prompt (optional)"
                <input
                    type="text"
                    prop:value=move || state.get().prompt
                    on:input=move |ev| state.update(|s| s.prompt = event_target_value(&ev))
                />
            </label>
            <div class="content-editor-page__workspace">
                <textarea
                    node_ref=textarea
                    class="content-editor-page__textarea"
                    maxlength=content::CHARACTER_LIMIT
                    prop:value=move || state.get().content
                    on:input=move |ev| {
                        state.update(|s| s.set_content(&event_target_value(&ev)));
                        sync_cursor();
                    }
                    on:keyup=move |_| sync_cursor()
                    on:click=move |_| sync_cursor()
                ></textarea>
                <MarkdownPreview source=preview_source/>
            </div>
            <div class="content-editor-page__actions">
                <button class="button button--primary" on:click=on_generate disabled=move || state.get().busy>
                    "Generate with AI"
                </button>
                <button class="button button--secondary" on:click=on_save disabled=move || state.get().busy>
                    {move || state.get().save_label()}
                </button>
            </div>
            <p class="content-editor-page__stats">
                {move || {
                    let stats = state.get().stats();
                    format!(
                        "Words: {} | Characters: {}/{}",
                        stats.words,
                        stats.characters,
                        content::CHARACTER_LIMIT,
                    )
                }}
            </p>
            <Show when=move || state.get().error.is_some()>
                <p class="form-error">{move || state.get().error.unwrap_or_default()}</p>
            </Show>
            <Show when=move || state.get().notice.is_some()>
                <p class="form-notice">{move || state.get().notice.unwrap_or_default()}</p>
            </Show>
            <Show when=move || !state.get().drafts.is_empty()>
                <section class="content-editor-page__saved">
                    <h2>"Saved content"</h2>
                    <table>
                        <thead>
                            <tr>
                                <th>"Preview"</th>
                                <th>"Scheduled date"</th>
                                <th>"Tone"</th>
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
                                    .map(|(idx, draft)| {
                                        let date = draft
                                            .scheduled_date
                                            .map_or_else(|| "Not scheduled".to_owned(), |d| d.format("%b %-d, %Y").to_string());
                                        view! {
                                            <tr>
                                                <td>{draft.preview()}</td>
                                                <td>{date}</td>
                                                <td>{draft.tone.label()}</td>
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
                </section>
            </Show>
        </div>
    }
}
