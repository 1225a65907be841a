//! Registration page.
//!
//! The API answers either with a token (the new user is signed in directly)
//! or with a plain confirmation message, shown with a link to the login page.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::app::Session;
use crate::components::auth_form::AuthForm;
use crate::components::layout::GuardPlaceholder;
use crate::net::fetch::ApiClient;
use crate::net::types::{Credentials, RegisterResponse};
use crate::state::guard::{GuardDecision, GuardMode};
use crate::util::route_guard::install_view_guard;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let api = expect_context::<ApiClient>();
    let decision = install_view_guard(session, GuardMode::AuthScreen, use_navigate());

    let busy = RwSignal::new(false);
    let message = RwSignal::new(None::<String>);
    let registered = RwSignal::new(None::<String>);

    let on_submit = Callback::new(move |credentials: Credentials| {
        busy.set(true);
        registered.set(None);
        let api = api.clone();
        spawn_local(async move {
            match api.register(&credentials).await {
                Ok(RegisterResponse::Token(response)) => {
                    let failure = session
                        .try_update(|s| s.login(&response.token).map(|_| ()).map_err(|e| e.to_string()))
                        .and_then(Result::err);
                    if let Some(reason) = failure {
                        message.try_set(Some(format!("Registration succeeded but sign-in failed: {reason}")));
                    }
                }
                Ok(RegisterResponse::Message(text)) => {
                    log::info!("registered {}", credentials.username);
                    registered.try_set(Some(text));
                }
                Err(e) => {
                    message.try_set(Some(format!("Registration failed: {e}")));
                }
            }
            busy.try_set(false);
        });
    });

    view! {
        <Show
            when=move || decision.get() == GuardDecision::Render
            fallback=move || view! { <GuardPlaceholder decision=decision/> }
        >
            <AuthForm title="Create Account" submit_label="Register" busy=busy message=message on_submit=on_submit>
                <Show when=move || registered.with(Option::is_some)>
                    <p class="banner banner--notice" role="status">
                        {move || registered.get().unwrap_or_default()}
                        " "
                        <a href="/login">"Sign in"</a>
                    </p>
                </Show>
                <p class="login-card__subtitle">
                    "Already registered? "
                    <a href="/login">"Sign in"</a>
                </p>
            </AuthForm>
        </Show>
    }
}
