//! Sidebar navigation and the destination list shared with navbar search.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::ui::UiState;

/// One sidebar destination.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub path: &'static str,
}

pub const NAV_ITEMS: [NavItem; 7] = [
    NavItem { label: "Home", path: "/" },
    NavItem { label: "About us", path: "/about" },
    NavItem { label: "Lead scoring", path: "/lead-scoring" },
    NavItem { label: "Content editing", path: "/content-editor" },
    NavItem { label: "Campaign schedule", path: "/campaign-scheduler" },
    NavItem { label: "Scheduled campaigns", path: "/scheduled-campaigns" },
    NavItem { label: "Chat bot", path: "/chatbot" },
];

/// Destinations whose label contains `query`, ignoring case.
///
/// A blank query matches nothing so the suggestion list stays hidden.
pub fn filter_nav(query: &str) -> Vec<NavItem> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    NAV_ITEMS
        .into_iter()
        .filter(|item| item.label.to_lowercase().contains(&needle))
        .collect()
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let class = move || {
        if ui.get().sidebar_open {
            "sidebar sidebar--open"
        } else {
            "sidebar"
        }
    };

    view! {
        <aside class=class>
            <div class="sidebar__brand">"AdPilot"</div>
            <nav class="sidebar__nav">
                {NAV_ITEMS
                    .into_iter()
                    .map(|item| {
                        view! {
                            <A href=item.path attr:class="sidebar__link">
                                {item.label}
                            </A>
                        }
                    })
                    .collect_view()}
            </nav>
        </aside>
    }
}
