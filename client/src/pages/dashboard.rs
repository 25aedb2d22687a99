//! Dashboard page with a greeting, tab strip, and mock statistics.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reachable signed in or not; the greeting falls back to a generic name and
//! the counters are fixed mock data.

use leptos::prelude::*;

use crate::components::stat_card::StatCard;
use crate::components::tab_bar::TabBar;
use crate::state::auth::AuthState;
use crate::state::dashboard::{DashboardTab, stats_for};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let tab = RwSignal::new(DashboardTab::default());

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"Hey " {move || auth.get().display_name()} "!"</h1>
                <p class="dashboard-page__subtitle">"Here's how your vibe is doing this week."</p>
            </header>

            <TabBar selected=tab/>

            <section class="dashboard-page__grid" role="tabpanel">
                {move || {
                    stats_for(tab.get())
                        .into_iter()
                        .map(|stat| view! { <StatCard stat=stat/> })
                        .collect::<Vec<_>>()
                }}
            </section>
        </div>
    }
}
