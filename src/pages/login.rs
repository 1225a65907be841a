//! Login page: username + password exchanged for a bearer token.
//!
//! On success the token goes into the session store; the view guard sees the
//! transition to signed-in and moves on to the default screen.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::app::Session;
use crate::components::auth_form::AuthForm;
use crate::components::layout::GuardPlaceholder;
use crate::net::fetch::ApiClient;
use crate::net::types::Credentials;
use crate::state::guard::{GuardDecision, GuardMode};
use crate::util::route_guard::install_view_guard;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let api = expect_context::<ApiClient>();
    let decision = install_view_guard(session, GuardMode::AuthScreen, use_navigate());

    let busy = RwSignal::new(false);
    let message = RwSignal::new(None::<String>);

    let on_submit = Callback::new(move |credentials: Credentials| {
        busy.set(true);
        let api = api.clone();
        spawn_local(async move {
            let failure = match api.login(&credentials).await {
                Ok(response) => session
                    .try_update(|s| s.login(&response.token).map(|_| ()).map_err(|e| e.to_string()))
                    .and_then(Result::err),
                Err(e) => Some(e.to_string()),
            };
            if let Some(reason) = failure {
                message.try_set(Some(format!("Login failed: {reason}")));
            }
            busy.try_set(false);
        });
    });

    view! {
        <Show
            when=move || decision.get() == GuardDecision::Render
            fallback=move || view! { <GuardPlaceholder decision=decision/> }
        >
            <AuthForm title="Sign In" submit_label="Sign In" busy=busy message=message on_submit=on_submit>
                <p class="login-card__subtitle">
                    "No account? "
                    <a href="/register">"Register"</a>
                </p>
            </AuthForm>
        </Show>
    }
}
