//! Cached session identity in browser `localStorage`.
//!
//! SYSTEM CONTEXT
//! ==============
//! The auth provider writes the signed-in user here; the app root reads it
//! after hydration to seed `AuthState`, and sign-out removes it.
//!
//! TRADE-OFFS
//! ==========
//! Storage access is best-effort browser-only behavior. A missing window,
//! blocked storage, or unparsable entry all read as "signed out", and SSR
//! paths no-op to keep server rendering deterministic.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::state::auth::User;

/// `localStorage` key holding the JSON-encoded [`User`].
pub const STORAGE_KEY: &str = "find_your_vibe_session";

/// Decode a stored session entry. Blank or malformed entries yield `None`.
pub fn decode_user(raw: &str) -> Option<User> {
    if raw.trim().is_empty() {
        return None;
    }
    serde_json::from_str(raw).ok()
}

/// Read the cached user, if any.
pub fn load_user() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        let raw = storage.get_item(STORAGE_KEY).ok().flatten()?;
        decode_user(&raw)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Forget the cached user.
pub fn clear_user() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.remove_item(STORAGE_KEY);
        }
    }
}
