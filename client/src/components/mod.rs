//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site chrome and small presentational pieces while
//! reading/writing shared state from Leptos context providers.

pub mod navbar;
pub mod password_toggle;
pub mod stat_card;
pub mod tab_bar;
