//! Navbar link table and route-aware active matching.
//!
//! DESIGN
//! ======
//! Links are static data so the desktop bar and the mobile list render the
//! same entries. Fragment links point at sections of the home page and are
//! never highlighted as the active route.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::state::nav::DropdownId;

/// A single navigable entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

/// A labelled dropdown of links.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavGroup {
    pub id: DropdownId,
    pub label: &'static str,
    pub links: &'static [NavLink],
}

pub const PRIMARY_LINKS: &[NavLink] = &[
    NavLink { label: "Home", href: "/" },
    NavLink { label: "Dashboard", href: "/dashboard" },
];

pub const NAV_GROUPS: &[NavGroup] = &[
    NavGroup {
        id: DropdownId::Discover,
        label: "Discover",
        links: &[
            NavLink { label: "Events", href: "/#events" },
            NavLink { label: "Communities", href: "/#communities" },
            NavLink { label: "Vibe quizzes", href: "/#quizzes" },
        ],
    },
    NavGroup {
        id: DropdownId::Company,
        label: "Company",
        links: &[
            NavLink { label: "About", href: "/#about" },
            NavLink { label: "Careers", href: "/#careers" },
            NavLink { label: "Contact", href: "/#contact" },
        ],
    },
];

fn normalize(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}

/// Whether `href` should be highlighted while the router is at `current_path`.
pub fn is_active(current_path: &str, href: &str) -> bool {
    if href.contains('#') {
        return false;
    }
    let current = normalize(current_path);
    let target = normalize(href);
    if target == "/" {
        return current == "/";
    }
    current == target
        || current
            .strip_prefix(target)
            .is_some_and(|rest| rest.starts_with('/'))
}

/// Whether any link of `group` is the active route.
pub fn group_is_active(current_path: &str, group: &NavGroup) -> bool {
    group.links.iter().any(|link| is_active(current_path, link.href))
}

/// BEM class list for a link, adding the `--active` modifier when needed.
pub fn link_class(base: &str, active: bool) -> String {
    if active { format!("{base} {base}--active") } else { base.to_owned() }
}
