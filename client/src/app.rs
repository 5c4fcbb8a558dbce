//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{footer::Footer, navbar::Navbar, sidebar::Sidebar};
use crate::pages::{
    about::AboutPage, campaign_scheduler::CampaignSchedulerPage, chatbot::ChatbotPage,
    content_editor::ContentEditorPage, home::HomePage, lead_scoring::LeadScoringPage, login::LoginPage,
    logout::LogoutPage, profile::ProfilePage, register::RegisterPage, scheduled_campaigns::ScheduledCampaignsPage,
};
use crate::state::{session::SessionState, ui::UiState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session and chrome contexts, restores the stored token once
/// on the client, and lays out the navigation shell around the routes.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    let ui = RwSignal::new(UiState::default());
    provide_context(session);
    provide_context(ui);

    // Effects only run in the browser, so SSR keeps `loading = true`.
    Effect::new(move || {
        session.set(SessionState::restored(crate::util::storage::load_token()));
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/adpilot.css"/>
        <Title text="AdPilot"/>

        <Router>
            <div class="app-shell">
                <Sidebar/>
                <div class="app-shell__main">
                    <Navbar/>
                    <main class="app-shell__content">
                        <Routes fallback=|| "Page not found.".into_view()>
                            <Route path=StaticSegment("") view=HomePage/>
                            <Route path=StaticSegment("about") view=AboutPage/>
                            <Route path=StaticSegment("login") view=LoginPage/>
                            <Route path=StaticSegment("register") view=RegisterPage/>
                            <Route path=StaticSegment("logout") view=LogoutPage/>
                            <Route path=StaticSegment("profile") view=ProfilePage/>
                            <Route path=StaticSegment("lead-scoring") view=LeadScoringPage/>
                            <Route path=StaticSegment("content-editor") view=ContentEditorPage/>
                            <Route path=StaticSegment("campaign-scheduler") view=CampaignSchedulerPage/>
                            <Route path=StaticSegment("scheduled-campaigns") view=ScheduledCampaignsPage/>
                            <Route path=StaticSegment("chatbot") view=ChatbotPage/>
                        </Routes>
                    </main>
                    <Footer/>
                </div>
            </div>
        </Router>
    }
}
