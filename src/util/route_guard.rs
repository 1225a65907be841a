//! Route-level wiring for the view guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every screen applies identical redirect behavior, so pages call
//! `install_view_guard` once and render from the decision it returns.

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::app::Session;
use crate::state::guard::{GuardDecision, GuardMode, GuardState, ViewGuard, decision};

/// Redirect on session transitions the screen cannot show, and report what
/// the screen should render meanwhile.
pub fn install_view_guard<F>(session: Session, mode: GuardMode, navigate: F) -> Signal<GuardDecision>
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let guard = StoredValue::new(ViewGuard::new(mode));
    Effect::new(move || {
        let snapshot = session.with(|s| s.state().clone());
        let redirect = guard.try_update_value(|g| g.observe(&snapshot)).flatten();
        if let Some(target) = redirect {
            log::debug!("view guard redirecting to {target}");
            navigate(target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    Signal::derive(move || session.with(|s| decision(mode, GuardState::of(s.state()))))
}
