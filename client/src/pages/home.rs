//! Marketing landing page.
//!
//! Section ids match the fragment links in the navbar dropdowns.

use leptos::prelude::*;

struct Feature {
    id: &'static str,
    title: &'static str,
    blurb: &'static str,
}

const FEATURES: &[Feature] = &[
    Feature {
        id: "events",
        title: "Events",
        blurb: "Find meetups, shows, and hangouts that match your energy.",
    },
    Feature {
        id: "communities",
        title: "Communities",
        blurb: "Join circles of people who are into the same things you are.",
    },
    Feature {
        id: "quizzes",
        title: "Vibe quizzes",
        blurb: "A few quick questions and we'll point you at your people.",
    },
];

const COMPANY: &[Feature] = &[
    Feature { id: "about", title: "About", blurb: "We think finding your people should feel easy." },
    Feature { id: "careers", title: "Careers", blurb: "We're a small team and we're hiring." },
    Feature { id: "contact", title: "Contact", blurb: "Say hi at hello@findyourvibe.app." },
];

fn feature_cards(features: &'static [Feature]) -> impl IntoView {
    features
        .iter()
        .map(|f| {
            view! {
                <article id=f.id class="home-page__card">
                    <h3>{f.title}</h3>
                    <p>{f.blurb}</p>
                </article>
            }
        })
        .collect::<Vec<_>>()
}

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <section class="home-page__hero">
                <h1>"Find Your Vibe"</h1>
                <p class="home-page__tagline">
                    "Discover people, places, and plans that feel like you."
                </p>
                <div class="home-page__cta">
                    <a href="/signup" class="btn btn--primary">"Get started"</a>
                    <a href="/login" class="btn">"I already have an account"</a>
                </div>
            </section>
            <section class="home-page__features">{feature_cards(FEATURES)}</section>
            <section class="home-page__company">{feature_cards(COMPANY)}</section>
        </div>
    }
}
