//! Username + password form used by the login and register screens.

use leptos::prelude::*;

use crate::net::types::Credentials;

#[component]
pub fn AuthForm(
    title: &'static str,
    submit_label: &'static str,
    busy: RwSignal<bool>,
    /// Server or session failure to display under the form.
    message: RwSignal<Option<String>>,
    on_submit: Callback<Credentials>,
    children: Children,
) -> impl IntoView {
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        match Credentials::from_input(&username.get_untracked(), &password.get_untracked()) {
            Ok(credentials) => {
                message.set(None);
                on_submit.run(credentials);
            }
            Err(reason) => message.set(Some(reason.to_owned())),
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>{title}</h1>
                <form class="login-form" on:submit=submit>
                    <input
                        class="login-input"
                        type="text"
                        autocomplete="username"
                        placeholder="Username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Working..." } else { submit_label }}
                    </button>
                </form>
                <Show when=move || message.with(Option::is_some)>
                    <p class="login-message">{move || message.get().unwrap_or_default()}</p>
                </Show>
                {children()}
            </div>
        </div>
    }
}
