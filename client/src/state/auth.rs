//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided at the app root and read by the navbar and dashboard for
//! identity-dependent rendering. SSR always renders the signed-out view; the
//! browser seeds the user from the cached session after hydration.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use serde::{Deserialize, Serialize};

/// Greeting used when nobody is signed in.
pub const ANONYMOUS_NAME: &str = "there";

/// Identity exposed by the authentication provider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub display_name: String,
    pub email: String,
    #[serde(default)]
    pub photo_url: Option<String>,
}

impl User {
    /// Up to two uppercase initials taken from the display name, falling back
    /// to the first letter of the email.
    pub fn initials(&self) -> String {
        let from_name: String = self
            .display_name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .take(2)
            .collect();
        if !from_name.is_empty() {
            return from_name;
        }
        self.email
            .chars()
            .next()
            .map(|c| c.to_uppercase().take(2).collect())
            .unwrap_or_else(|| "?".to_owned())
    }
}

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl AuthState {
    /// State used before the browser has resolved the cached session.
    pub fn pending() -> Self {
        Self { user: None, loading: true }
    }

    /// Name to greet the user with.
    pub fn display_name(&self) -> String {
        self.user
            .as_ref()
            .map(|u| u.display_name.trim())
            .filter(|name| !name.is_empty())
            .map_or_else(|| ANONYMOUS_NAME.to_owned(), str::to_owned)
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }
}
