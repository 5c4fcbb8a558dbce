//! Marketing landing page.

use leptos::prelude::*;
use leptos_router::components::A;

const TOOLS: [(&str, &str, &str); 4] = [
    (
        "Lead scoring",
        "/lead-scoring",
        "Upload a lead list and see which contacts are worth a call today.",
    ),
    (
        "Content editor",
        "/content-editor",
        "Draft posts and emails, or let the assistant write a first version.",
    ),
    (
        "Chat bot",
        "/chatbot",
        "Answer visitor questions around the clock and capture new leads.",
    ),
    (
        "Campaign scheduler",
        "/campaign-scheduler",
        "Plan start and end dates, budgets and audiences in one place.",
    ),
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <section class="hero">
                <h1>"AdPilot"</h1>
                <p class="hero__tagline">"Marketing tools that do the busywork for you."</p>
                <div class="hero__actions">
                    <A href="/login" attr:class="button button--primary">"Login"</A>
                    <A href="/register" attr:class="button button--secondary">"Register"</A>
                </div>
            </section>
            <section class="home-page__intro">
                <h2>"Why AdPilot?"</h2>
                <p>
                    "Score leads, write copy and schedule campaigns from one dashboard, "
                    "with the heavy lifting done by the AdPilot backend."
                </p>
            </section>
            <section class="home-page__tools">
                <h2>"Core tools"</h2>
                <div class="tool-grid">
                    {TOOLS
                        .into_iter()
                        .map(|(title, href, blurb)| {
                            view! {
                                <A href=href attr:class="tool-card">
                                    <h3>{title}</h3>
                                    <p>{blurb}</p>
                                </A>
                            }
                        })
                        .collect_view()}
                </div>
            </section>
        </div>
    }
}
