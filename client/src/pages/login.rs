//! Login page with email + password form.
//!
//! There is no auth backend behind this form: a valid submission is logged
//! and the form stays put.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::components::password_toggle::PasswordToggle;
use crate::util::validation::{FormError, LoginSubmission, password_input_type, validate_login};

/// Log line for an accepted submission. Never includes the password.
fn submission_log_line(submission: &LoginSubmission) -> String {
    format!("login submitted for {}", submission.email)
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);
    let error = RwSignal::new(None::<FormError>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match validate_login(&email.get_untracked(), &password.get_untracked()) {
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

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Welcome back"</h1>
                <p class="auth-card__subtitle">"Log in to find your vibe."</p>
                <form class="auth-form" on:submit=on_submit novalidate=true>
                    <label class="auth-form__label" for="login-email">"Email"</label>
                    <input
                        id="login-email"
                        class="auth-form__input"
                        type="email"
                        autocomplete="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <label class="auth-form__label" for="login-password">"Password"</label>
                    <input
                        id="login-password"
                        class="auth-form__input"
                        type=move || password_input_type(show_password.get())
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <PasswordToggle show=show_password id="login-show-password"/>
                    <Show when=move || error.get().is_some()>
                        <p class="auth-form__error" role="alert">
                            {move || error.get().map(|e| e.to_string()).unwrap_or_default()}
                        </p>
                    </Show>
                    <button class="btn btn--primary auth-form__submit" type="submit">
                        "Log in"
                    </button>
                </form>
                <p class="auth-card__switch">
                    "New here? " <a href="/signup">"Create an account"</a>
                </p>
            </div>
        </div>
    }
}
