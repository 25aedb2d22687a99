//! Navbar chrome state (mobile menu, dropdowns, scroll shadow).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns in one small model with pure
//! transitions so the navbar's event wiring stays trivial and the rules
//! (one dropdown at a time, scroll mirroring) are unit-testable.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Scroll offset in pixels past which the navbar switches to its solid style.
pub const SCROLL_THRESHOLD: f64 = 10.0;

/// Dropdown menus hosted by the navbar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DropdownId {
    Discover,
    Company,
    Account,
}

impl DropdownId {
    /// Stable DOM id suffix for the dropdown panel.
    pub fn dom_id(self) -> &'static str {
        match self {
            Self::Discover => "nav-dropdown-discover",
            Self::Company => "nav-dropdown-company",
            Self::Account => "nav-dropdown-account",
        }
    }
}

/// Navbar view-state provided via context.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub menu_open: bool,
    pub scrolled: bool,
    pub open_dropdown: Option<DropdownId>,
}

impl NavState {
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
        if !self.menu_open {
            self.open_dropdown = None;
        }
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
        self.open_dropdown = None;
    }

    /// Open `id`, replacing any other open dropdown, or close it if it is
    /// already the open one.
    pub fn toggle_dropdown(&mut self, id: DropdownId) {
        self.open_dropdown = if self.open_dropdown == Some(id) { None } else { Some(id) };
    }

    pub fn close_dropdowns(&mut self) {
        self.open_dropdown = None;
    }

    /// A click anywhere in the window closes the open dropdown unless it
    /// landed inside one.
    pub fn on_window_click(&mut self, inside_dropdown: bool) {
        if !inside_dropdown {
            self.close_dropdowns();
        }
    }

    pub fn is_open(&self, id: DropdownId) -> bool {
        self.open_dropdown == Some(id)
    }

    /// Mirror the window's vertical scroll offset.
    pub fn set_scroll_offset(&mut self, offset: f64) {
        self.scrolled = is_scrolled(offset);
    }

    /// Navigation always lands with the menus collapsed.
    pub fn on_route_change(&mut self) {
        self.close_menu();
    }
}

/// Whether `offset` is far enough down the page to count as scrolled.
pub fn is_scrolled(offset: f64) -> bool {
    offset > SCROLL_THRESHOLD
}
