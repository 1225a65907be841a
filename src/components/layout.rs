//! Screen frame shared by guarded routes.

use leptos::prelude::*;

use super::sidebar::Sidebar;
use crate::state::guard::GuardDecision;

/// Neutral content shown while the session is unresolved or a redirect is
/// pending.
#[component]
pub fn GuardPlaceholder(decision: Signal<GuardDecision>) -> impl IntoView {
    view! {
        <div class="screen screen--placeholder">
            <p class="screen__status">
                {move || match decision.get() {
                    GuardDecision::Redirecting => "Redirecting...",
                    GuardDecision::Placeholder | GuardDecision::Render => "Loading...",
                }}
            </p>
        </div>
    }
}

/// Sidebar + titled main area, rendered only when the guard allows it.
#[component]
pub fn ScreenLayout(decision: Signal<GuardDecision>, title: &'static str, children: ChildrenFn) -> impl IntoView {
    view! {
        <Show
            when=move || decision.get() == GuardDecision::Render
            fallback=move || view! { <GuardPlaceholder decision=decision/> }
        >
            <div class="screen">
                <Sidebar/>
                <main class="screen__main">
                    <h1 class="screen__title">{title}</h1>
                    {children()}
                </main>
            </div>
        </Show>
    }
}
