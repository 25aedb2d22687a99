//! Client-side form validation for the login and signup pages.
//!
//! ERROR HANDLING
//! ==============
//! Validation is the only failure path in the UI. Each failure maps to a
//! single inline message, so `FormError`'s `Display` text is exactly what the
//! page shows.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

/// Why a form submission was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Please fill in all fields.")]
    MissingFields,
    #[error("Passwords do not match.")]
    PasswordMismatch,
}

/// A login submission that passed validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginSubmission {
    pub email: String,
    pub password: String,
}

/// A signup submission that passed validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignupSubmission {
    pub username: String,
    pub email: String,
    pub password: String,
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Validate the login form.
///
/// # Errors
///
/// Returns [`FormError::MissingFields`] when either field is blank.
pub fn validate_login(email: &str, password: &str) -> Result<LoginSubmission, FormError> {
    if is_blank(email) || is_blank(password) {
        return Err(FormError::MissingFields);
    }
    Ok(LoginSubmission { email: email.trim().to_owned(), password: password.to_owned() })
}

/// Validate the signup form. Missing fields are reported before a mismatch.
///
/// # Errors
///
/// Returns [`FormError::MissingFields`] when any field is blank, or
/// [`FormError::PasswordMismatch`] when the confirmation differs.
pub fn validate_signup(
    username: &str,
    email: &str,
    password: &str,
    confirm_password: &str,
) -> Result<SignupSubmission, FormError> {
    if [username, email, password, confirm_password].into_iter().any(is_blank) {
        return Err(FormError::MissingFields);
    }
    if password != confirm_password {
        return Err(FormError::PasswordMismatch);
    }
    Ok(SignupSubmission {
        username: username.trim().to_owned(),
        email: email.trim().to_owned(),
        password: password.to_owned(),
    })
}

/// `type` attribute for a password input given the show-password toggle.
pub fn password_input_type(show_password: bool) -> &'static str {
    if show_password { "text" } else { "password" }
}
