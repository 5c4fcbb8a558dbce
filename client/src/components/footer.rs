//! Page footer.

use leptos::prelude::*;

use crate::util::browser;

#[component]
pub fn Footer() -> impl IntoView {
    let year = browser::current_year();
    view! {
        <footer class="footer">
            <p>{format!("© {year} AdPilot. All rights reserved.")}</p>
        </footer>
    }
}
