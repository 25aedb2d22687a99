//! Signup page with username, email, password, and confirmation.
//!
//! Like the login form, an accepted submission is only logged.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;

use crate::components::password_toggle::PasswordToggle;
use crate::util::validation::{FormError, SignupSubmission, password_input_type, validate_signup};

/// Log line for an accepted submission. Never includes the password.
fn submission_log_line(submission: &SignupSubmission) -> String {
    format!("signup submitted for {} <{}>", submission.username, submission.email)
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);
    let error = RwSignal::new(None::<FormError>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let result = validate_signup(
            &username.get_untracked(),
            &email.get_untracked(),
            &password.get_untracked(),
            &confirm_password.get_untracked(),
        );
        match result {
            Err(e) => error.set(Some(e)),
            Ok(submission) => {
                error.set(None);
                let line = submission_log_line(&submission);
                #[cfg(feature = "hydrate")]
                log::info!("{line}");
                #[cfg(not(feature = "hydrate"))]
                let _ = line;
            }
        }
    };

    let input_type = move || password_input_type(show_password.get());

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create your account"</h1>
                <p class="auth-card__subtitle">"Join and start finding your vibe."</p>
                <form class="auth-form" on:submit=on_submit novalidate=true>
                    <label class="auth-form__label" for="signup-username">"Username"</label>
                    <input
                        id="signup-username"
                        class="auth-form__input"
                        type="text"
                        autocomplete="username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <label class="auth-form__label" for="signup-email">"Email"</label>
                    <input
                        id="signup-email"
                        class="auth-form__input"
                        type="email"
                        autocomplete="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <label class="auth-form__label" for="signup-password">"Password"</label>
                    <input
                        id="signup-password"
                        class="auth-form__input"
                        type=input_type
                        autocomplete="new-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <label class="auth-form__label" for="signup-confirm">"Confirm password"</label>
                    <input
                        id="signup-confirm"
                        class="auth-form__input"
                        type=input_type
                        autocomplete="new-password"
                        prop:value=move || confirm_password.get()
                        on:input=move |ev| confirm_password.set(event_target_value(&ev))
                    />
                    <PasswordToggle show=show_password id="signup-show-password"/>
                    <Show when=move || error.get().is_some()>
                        <p class="auth-form__error" role="alert">
                            {move || error.get().map(|e| e.to_string()).unwrap_or_default()}
                        </p>
                    </Show>
                    <button class="btn btn--primary auth-form__submit" type="submit">
                        "Sign up"
                    </button>
                </form>
                <p class="auth-card__switch">
                    "Already have an account? " <a href="/login">"Log in"</a>
                </p>
            </div>
        </div>
    }
}
