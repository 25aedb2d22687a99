//! Dashboard statistic tile.

use leptos::prelude::*;

use crate::state::dashboard::{Stat, delta_class, format_delta};

/// A counter with its label and week-over-week change.
#[component]
pub fn StatCard(stat: Stat) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-card__label">{stat.label}</span>
            <span class="stat-card__value">{stat.value}</span>
            <span class=delta_class(stat.delta) title="Change since last week">
                {format_delta(stat.delta)}
            </span>
        </div>
    }
}
