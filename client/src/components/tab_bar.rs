//! Dashboard tab strip.
//!
//! DESIGN
//! ======
//! Selection lives in the caller's signal so the page decides what each tab
//! renders; the strip only reflects and updates it.

use leptos::prelude::*;

use crate::state::dashboard::DashboardTab;
use crate::util::nav::link_class;

/// Horizontal tab list with one selected tab.
#[component]
pub fn TabBar(selected: RwSignal<DashboardTab>) -> impl IntoView {
    view! {
        <div class="tab-bar" role="tablist">
            {DashboardTab::ALL
                .into_iter()
                .map(|tab| {
                    let is_selected = move || selected.get() == tab;
                    view! {
                        <button
                            type="button"
                            role="tab"
                            class=move || link_class("tab-bar__tab", is_selected())
                            aria-selected=move || is_selected().to_string()
                            on:click=move |_| selected.set(tab)
                        >
                            {tab.label()}
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
