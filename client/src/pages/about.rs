//! About page.

use leptos::prelude::*;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="about-page">
            <h1>"About us"</h1>
            <section>
                <h2>"Mission"</h2>
                <p>
                    "We build practical tools that let small marketing teams spend their time on "
                    "ideas instead of spreadsheets."
                </p>
            </section>
            <section>
                <h2>"What we offer"</h2>
                <ul>
                    <li>"Lead scoring from a plain CSV export"</li>
                    <li>"AI-assisted copywriting in your brand's tone"</li>
                    <li>"Campaign planning with budgets and audiences"</li>
                    <li>"A chat assistant for your visitors"</li>
                </ul>
            </section>
            <section>
                <h2>"Get in touch"</h2>
                <p>"hello@adpilot.example"</p>
            </section>
        </div>
    }
}
