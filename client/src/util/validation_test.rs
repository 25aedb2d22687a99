use super::*;

// =============================================================
// Login
// =============================================================

#[test]
fn login_with_empty_fields_asks_to_fill_all() {
    let err = validate_login("", "").unwrap_err();
    assert_eq!(err, FormError::MissingFields);
    assert_eq!(err.to_string(), "Please fill in all fields.");
}

#[test]
fn login_requires_both_fields() {
    assert_eq!(validate_login("a@b.com", ""), Err(FormError::MissingFields));
    assert_eq!(validate_login("", "hunter2"), Err(FormError::MissingFields));
    assert_eq!(validate_login("   ", "hunter2"), Err(FormError::MissingFields));
    assert_eq!(validate_login("a@b.com", "  "), Err(FormError::MissingFields));
}

#[test]
fn login_trims_email_but_keeps_password_verbatim() {
    let ok = validate_login("  a@b.com ", " pw ").unwrap();
    assert_eq!(ok, LoginSubmission { email: "a@b.com".to_owned(), password: " pw ".to_owned() });
}

// =============================================================
// Signup
// =============================================================

#[test]
fn signup_mismatched_passwords_reported() {
    let err = validate_signup("kai", "k@x.io", "secret1", "secret2").unwrap_err();
    assert_eq!(err, FormError::PasswordMismatch);
    assert_eq!(err.to_string(), "Passwords do not match.");
}

#[test]
fn signup_missing_field_wins_over_mismatch() {
    assert_eq!(validate_signup("", "k@x.io", "a", "b"), Err(FormError::MissingFields));
    assert_eq!(validate_signup("kai", "k@x.io", "a", ""), Err(FormError::MissingFields));
}

#[test]
fn signup_each_field_is_required() {
    let full = ["kai", "k@x.io", "pw", "pw"];
    for blank in 0..full.len() {
        let mut fields = full;
        fields[blank] = " ";
        assert_eq!(
            validate_signup(fields[0], fields[1], fields[2], fields[3]),
            Err(FormError::MissingFields),
            "field {blank} left blank"
        );
    }
}

#[test]
fn signup_passwords_compared_exactly() {
    assert_eq!(validate_signup("kai", "k@x.io", "pw", "pw "), Err(FormError::PasswordMismatch));
    assert_eq!(validate_signup("kai", "k@x.io", "Pw", "pw"), Err(FormError::PasswordMismatch));
}

#[test]
fn signup_success_trims_identity_fields() {
    let ok = validate_signup(" kai ", " k@x.io ", "pw", "pw").unwrap();
    assert_eq!(
        ok,
        SignupSubmission { username: "kai".to_owned(), email: "k@x.io".to_owned(), password: "pw".to_owned() }
    );
}

// =============================================================
// Password visibility
// =============================================================

#[test]
fn show_password_switches_input_masking() {
    assert_eq!(password_input_type(false), "password");
    assert_eq!(password_input_type(true), "text");
}
