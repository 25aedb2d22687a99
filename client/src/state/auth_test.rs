use super::*;

fn user(name: &str, email: &str) -> User {
    User {
        id: "u1".to_owned(),
        display_name: name.to_owned(),
        email: email.to_owned(),
        photo_url: None,
    }
}

// =============================================================
// AuthState
// =============================================================

#[test]
fn auth_state_default_no_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(!state.loading);
    assert!(!state.is_signed_in());
}

#[test]
fn auth_state_pending_is_loading() {
    let state = AuthState::pending();
    assert!(state.loading);
    assert!(state.user.is_none());
}

#[test]
fn display_name_falls_back_when_signed_out() {
    assert_eq!(AuthState::default().display_name(), "there");
}

#[test]
fn display_name_falls_back_when_name_blank() {
    let state = AuthState { user: Some(user("   ", "a@b.com")), loading: false };
    assert_eq!(state.display_name(), "there");
}

#[test]
fn display_name_uses_trimmed_user_name() {
    let state = AuthState { user: Some(user(" Ada Lovelace ", "a@b.com")), loading: false };
    assert_eq!(state.display_name(), "Ada Lovelace");
    assert!(state.is_signed_in());
}

// =============================================================
// User::initials
// =============================================================

#[test]
fn initials_take_first_two_words() {
    assert_eq!(user("ada byron lovelace", "a@b.com").initials(), "AB");
}

#[test]
fn initials_single_word() {
    assert_eq!(user("Zed", "z@b.com").initials(), "Z");
}

#[test]
fn initials_fall_back_to_email() {
    assert_eq!(user("", "mia@example.com").initials(), "M");
}

#[test]
fn initials_placeholder_when_nothing_available() {
    assert_eq!(user("", "").initials(), "?");
}

#[test]
fn user_deserializes_without_photo() {
    let json = r#"{"id":"1","display_name":"Kai","email":"k@x.io"}"#;
    let parsed: User = serde_json::from_str(json).unwrap();
    assert_eq!(parsed.photo_url, None);
    assert_eq!(parsed.display_name, "Kai");
}

#[test]
fn initials_capped_after_uppercasing() {
    // 'ß' uppercases to "SS".
    let initials = user("ßen ßo", "s@b.com").initials();
    assert_eq!(initials, "SS");
    assert_eq!(user("", "ßo@b.com").initials(), "SS");
}
