//! Window scroll offset lookup.
//!
//! Requires a browser environment; SSR and tests report the top of the page.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Current vertical scroll offset of the window in CSS pixels.
pub fn current_offset() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}
