//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped state and delegates shared rendering details
//! to `components`.

pub mod dashboard;
pub mod home;
pub mod login;
pub mod signup;
