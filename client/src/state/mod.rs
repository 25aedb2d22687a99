//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `nav`, `dashboard`) so individual
//! components can depend on small focused models.

pub mod auth;
pub mod dashboard;
pub mod nav;
