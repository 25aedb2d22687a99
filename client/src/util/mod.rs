//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and pure rules from
//! page and component logic to improve reuse and testability.

pub mod nav;
pub mod scroll;
pub mod session;
pub mod validation;
