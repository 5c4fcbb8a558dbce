//! Chat widget page.
//!
//! Text goes to the session-aware chatbot endpoint; an attached file goes to
//! the upload endpoint instead. Either way the reply is held back for the
//! typing delay before it is appended.

use leptos::prelude::*;
use wire::chat::Sender;
#[cfg(feature = "hydrate")]
use wire::chat::Outgoing;

use crate::state::chat::ChatState;

#[component]
pub fn ChatbotPage() -> impl IntoView {
    let state = RwSignal::new(ChatState::default());
    let file_input = NodeRef::<leptos::html::Input>::new();
    let transcript = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    let alive = {
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let flag = alive.clone();
        on_cleanup(move || flag.store(false, std::sync::atomic::Ordering::Relaxed));
        alive
    };

    Effect::new(move || {
        let _ = state.get().messages.len();
        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = transcript.get() {
                el.set_scroll_top(el.scroll_height());
            }
        }
    });

    let on_file_change = move |_ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let name = file_input
                .get()
                .and_then(|input| input.files())
                .and_then(|files| files.get(0))
                .map(|file| file.name());
            state.update(|s| s.attach(name));
        }
    };

    let send = move || {
        let Some(out) = state.try_update(ChatState::begin_send).flatten() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            let file = file_input.get().and_then(|input| {
                let file = input.files().and_then(|files| files.get(0));
                input.set_value("");
                file
            });
            let alive = alive.clone();
            leptos::task::spawn_local(async move {
                let result = match out {
                    Outgoing::Text(text) => {
                        let session_id = crate::state::chat::chat_session_id();
                        crate::net::api::send_chat(&session_id, &text).await
                    }
                    Outgoing::File(_) => match file {
                        Some(file) => crate::net::api::upload_chat_file(&file).await,
                        None => Err(wire::ApiError::Validation("attachment is no longer available".to_owned())),
                    },
                };
                if let Err(e) = &result {
                    log::error!("chat send failed: {e}");
                }
                if let Some(delay) = crate::state::chat::reply_delay(&result) {
                    gloo_timers::future::sleep(delay).await;
                }
                if alive.load(std::sync::atomic::Ordering::Relaxed) {
                    state.update(|s| s.finish(result));
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = out;
    };
    let send_click = send.clone();

    view! {
        <div class="chat-page">
            <h1>"Chat bot"</h1>
            <div class="chat-page__transcript" node_ref=transcript>
                {move || {
                    state
                        .get()
                        .messages
                        .into_iter()
                        .map(|msg| {
                            let class = match msg.sender {
                                Sender::User => "chat-bubble chat-bubble--user",
                                Sender::Bot => "chat-bubble chat-bubble--bot",
                            };
                            view! { <div class=class>{msg.text}</div> }
                        })
                        .collect_view()
                }}
                <Show when=move || state.get().typing>
                    <div class="chat-bubble chat-bubble--bot chat-bubble--typing">"Bot is typing..."</div>
                </Show>
            </div>
            <div class="chat-page__composer">
                <input
                    class="chat-page__input"
                    type="text"
                    placeholder="Type a message..."
                    prop:value=move || state.get().input
                    disabled=move || state.get().input_disabled()
                    on:input=move |ev| state.update(|s| s.input = event_target_value(&ev))
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            send();
                        }
                    }
                />
                <input node_ref=file_input type="file" on:change=on_file_change/>
                <button class="button button--primary" on:click=move |_| send_click()>
                    "Send"
                </button>
            </div>
        </div>
    }
}
