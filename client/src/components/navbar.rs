//! Marketing navbar: brand, route-aware links, dropdowns, auth area, and the
//! collapsible mobile menu.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered once above the router outlet. Owns the only two window event
//! subscriptions in the app: `scroll` (mirrored into `NavState::scrolled`)
//! and `click` (closes an open dropdown when the click lands outside it).

use leptos::prelude::*;
use leptos_router::hooks::use_location;
#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast as _;

use crate::state::auth::AuthState;
use crate::state::nav::{DropdownId, NavState};
use crate::util::nav::{NAV_GROUPS, NavGroup, PRIMARY_LINKS, group_is_active, is_active, link_class};

/// Whether a click target sits inside any navbar dropdown.
#[cfg(feature = "hydrate")]
fn is_inside_dropdown(target: Option<web_sys::EventTarget>) -> bool {
    target
        .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        .and_then(|el| el.closest(".navbar__dropdown").ok().flatten())
        .is_some()
}

/// Top navigation bar shared by every page.
#[component]
pub fn Navbar() -> impl IntoView {
    let nav = expect_context::<RwSignal<NavState>>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let location = use_location();
    let pathname = location.pathname;

    // Collapse menus whenever the route changes.
    Effect::new(move || {
        pathname.track();
        nav.update(NavState::on_route_change);
    });

    #[cfg(feature = "hydrate")]
    {
        Effect::new(move || {
            let offset = crate::util::scroll::current_offset();
            nav.update(|n| n.set_scroll_offset(offset));
        });

        let scroll_handle = window_event_listener(leptos::ev::scroll, move |_| {
            let offset = crate::util::scroll::current_offset();
            if nav.with_untracked(|n| n.scrolled) != crate::state::nav::is_scrolled(offset) {
                nav.update(|n| n.set_scroll_offset(offset));
            }
        });

        let click_handle = window_event_listener(leptos::ev::click, move |ev| {
            if nav.with_untracked(|n| n.open_dropdown.is_none()) {
                return;
            }
            let inside = is_inside_dropdown(ev.target());
            nav.update(|n| n.on_window_click(inside));
        });

        on_cleanup(move || {
            scroll_handle.remove();
            click_handle.remove();
        });
    }

    let nav_class = move || {
        if nav.get().scrolled { "navbar navbar--scrolled" } else { "navbar" }
    };

    let primary_links = move |base: &'static str| {
        PRIMARY_LINKS
            .iter()
            .map(|link| {
                let active = move || is_active(&pathname.get(), link.href);
                view! {
                    <a
                        href=link.href
                        class=move || link_class(base, active())
                        aria-current=move || active().then_some("page")
                    >
                        {link.label}
                    </a>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <nav class=nav_class>
            <div class="navbar__inner">
                <a href="/" class="navbar__brand">
                    "Find Your "<span class="navbar__brand-accent">"Vibe"</span>
                </a>

                <div class="navbar__links">
                    {primary_links("navbar__link")}
                    {NAV_GROUPS.iter().map(|group| view! { <NavDropdown group=group/> }).collect::<Vec<_>>()}
                </div>

                <span class="navbar__spacer"></span>

                <Show when=move || !auth.get().loading>
                    <Show when=move || auth.get().is_signed_in() fallback=|| view! { <AuthLinks/> }>
                        <AccountMenu/>
                    </Show>
                </Show>

                <button
                    type="button"
                    class="navbar__menu-button"
                    aria-label="Toggle navigation menu"
                    aria-controls="navbar-mobile-menu"
                    aria-expanded=move || nav.get().menu_open.to_string()
                    on:click=move |_| nav.update(NavState::toggle_menu)
                >
                    {move || if nav.get().menu_open { "✕" } else { "☰" }}
                </button>
            </div>

            <Show when=move || nav.get().menu_open>
                <div id="navbar-mobile-menu" class="navbar__mobile">
                    {primary_links("navbar__mobile-link")}
                    {NAV_GROUPS
                        .iter()
                        .map(|group| {
                            view! {
                                <p class="navbar__mobile-heading">{group.label}</p>
                                {group
                                    .links
                                    .iter()
                                    .map(|link| {
                                        view! {
                                            <a
                                                href=link.href
                                                class="navbar__mobile-link"
                                                on:click=move |_| nav.update(NavState::close_menu)
                                            >
                                                {link.label}
                                            </a>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            }
                        })
                        .collect::<Vec<_>>()}
                    <Show when=move || !auth.get().loading && !auth.get().is_signed_in()>
                        <AuthLinks/>
                    </Show>
                </div>
            </Show>
        </nav>
    }
}

/// A labelled dropdown of links. Opening one closes any other.
#[component]
fn NavDropdown(group: &'static NavGroup) -> impl IntoView {
    let nav = expect_context::<RwSignal<NavState>>();
    let pathname = use_location().pathname;
    let id = group.id;

    view! {
        <div class="navbar__dropdown">
            <button
                type="button"
                class=move || link_class("navbar__link", group_is_active(&pathname.get(), group))
                aria-haspopup="true"
                aria-controls=id.dom_id()
                aria-expanded=move || nav.get().is_open(id).to_string()
                on:click=move |_| nav.update(|n| n.toggle_dropdown(id))
            >
                {group.label}
                <span class="navbar__caret" aria-hidden="true">"▾"</span>
            </button>
            <Show when=move || nav.get().is_open(id)>
                <ul id=id.dom_id() class="navbar__dropdown-panel">
                    {group
                        .links
                        .iter()
                        .map(|link| {
                            view! {
                                <li>
                                    <a
                                        href=link.href
                                        class="navbar__dropdown-link"
                                        on:click=move |_| nav.update(NavState::close_menu)
                                    >
                                        {link.label}
                                    </a>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ul>
            </Show>
        </div>
    }
}

/// Log in / sign up calls to action for signed-out visitors.
#[component]
fn AuthLinks() -> impl IntoView {
    let pathname = use_location().pathname;

    view! {
        <div class="navbar__auth">
            <a
                href="/login"
                class=move || link_class("navbar__link", is_active(&pathname.get(), "/login"))
            >
                "Log in"
            </a>
            <a href="/signup" class="btn btn--primary navbar__signup">
                "Sign up"
            </a>
        </div>
    }
}

/// Avatar + display name with a dropdown holding dashboard and sign-out.
#[component]
fn AccountMenu() -> impl IntoView {
    let nav = expect_context::<RwSignal<NavState>>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let id = DropdownId::Account;

    let avatar = move || {
        let user = auth.get().user?;
        Some(match user.photo_url.clone() {
            Some(url) => view! {
                <img class="navbar__avatar" src=url alt=user.display_name.clone()/>
            }
            .into_any(),
            None => view! {
                <span class="navbar__avatar navbar__avatar--initials">{user.initials()}</span>
            }
            .into_any(),
        })
    };

    let on_sign_out = move |_| {
        crate::util::session::clear_user();
        auth.update(|a| a.user = None);
        nav.update(NavState::close_menu);
    };

    view! {
        <div class="navbar__dropdown navbar__account">
            <button
                type="button"
                class="navbar__account-button"
                aria-haspopup="true"
                aria-controls=id.dom_id()
                aria-expanded=move || nav.get().is_open(id).to_string()
                on:click=move |_| nav.update(|n| n.toggle_dropdown(id))
            >
                {avatar}
                <span class="navbar__account-name">{move || auth.get().display_name()}</span>
            </button>
            <Show when=move || nav.get().is_open(id)>
                <ul id=id.dom_id() class="navbar__dropdown-panel navbar__dropdown-panel--right">
                    <li>
                        <a
                            href="/dashboard"
                            class="navbar__dropdown-link"
                            on:click=move |_| nav.update(NavState::close_menu)
                        >
                            "Dashboard"
                        </a>
                    </li>
                    <li>
                        <a href="/" class="navbar__dropdown-link" on:click=on_sign_out>
                            "Sign out"
                        </a>
                    </li>
                </ul>
            </Show>
        </div>
    }
}
