//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::pages::{dashboard::DashboardPage, home::HomePage, login::LoginPage, signup::SignupPage};
use crate::state::auth::AuthState;
use crate::state::nav::NavState;

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
/// Provides the auth and navbar contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::pending());
    let nav = RwSignal::new(NavState::default());

    provide_context(auth);
    provide_context(nav);

    // Seed identity from the cached session once we are in the browser.
    Effect::new(move || {
        let user = crate::util::session::load_user();
        auth.set(AuthState { user, loading: false });
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/find-your-vibe.css"/>
        <Title text="Find Your Vibe"/>

        <Router>
            <Navbar/>
            <main class="page">
                <Routes fallback=|| view! { <p class="page__missing">"Page not found."</p> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("signup") view=SignupPage/>
                </Routes>
            </main>
        </Router>
    }
}
