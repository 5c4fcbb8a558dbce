//! Top navbar with destination search and the user menu.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::sidebar::filter_nav;
use crate::state::session::SessionState;
use crate::state::ui::UiState;

#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let suggestions = move || filter_nav(&ui.get().search_query);

    view! {
        <header class="navbar">
            <button class="navbar__menu-toggle" on:click=move |_| ui.update(UiState::toggle_sidebar)>
                "☰"
            </button>
            <div class="navbar__search">
                <input
                    class="navbar__search-input"
                    type="search"
                    placeholder="Search..."
                    prop:value=move || ui.get().search_query
                    on:input=move |ev| ui.update(|u| u.search_query = event_target_value(&ev))
                />
                <Show when=move || !suggestions().is_empty()>
                    <ul class="navbar__suggestions">
                        {move || {
                            suggestions()
                                .into_iter()
                                .map(|item| {
                                    view! {
                                        <li class="navbar__suggestion">
                                            <A href=item.path on:click=move |_| ui.update(UiState::after_navigate)>
                                                {item.label}
                                            </A>
                                        </li>
                                    }
                                })
                                .collect_view()
                        }}
                    </ul>
                </Show>
            </div>
            <div class="navbar__user">
                <Show
                    when=move || session.get().is_signed_in()
                    fallback=|| {
                        view! {
                            <A href="/login" attr:class="navbar__link">"Login"</A>
                            <A href="/register" attr:class="navbar__link">"Register"</A>
                        }
                    }
                >
                    <button class="navbar__avatar" on:click=move |_| ui.update(UiState::toggle_user_menu)>
                        {move || {
                            session
                                .get()
                                .user
                                .and_then(|u| u.username.chars().next())
                                .map_or_else(|| "●".to_owned(), |c| c.to_uppercase().to_string())
                        }}
                    </button>
                    <Show when=move || ui.get().user_menu_open>
                        <ul class="navbar__user-menu" on:click=move |_| ui.update(UiState::after_navigate)>
                            <li>
                                <A href="/profile">"Profile"</A>
                            </li>
                            <li class="navbar__user-menu-item--inert">"Settings"</li>
                            <li>
                                <A href="/logout">"Log Out"</A>
                            </li>
                        </ul>
                    </Show>
                </Show>
            </div>
        </header>
    }
}
