//! "Show password" checkbox shared by the auth forms.

use leptos::prelude::*;

/// Checkbox bound to a show-password flag.
#[component]
pub fn PasswordToggle(show: RwSignal<bool>, #[prop(optional)] id: Option<&'static str>) -> impl IntoView {
    let id = id.unwrap_or("show-password");
    view! {
        <label class="auth-form__toggle" for=id>
            <input
                id=id
                type="checkbox"
                prop:checked=move || show.get()
                on:change=move |ev| show.set(event_target_checked(&ev))
            />
            "Show password"
        </label>
    }
}
