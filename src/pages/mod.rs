//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its screen state signal, installs the view guard, and
//! delegates chrome to `components`. The helpers below carry the load and
//! action plumbing every list screen shares.
//!
//! Screen signals are disposed on unmount; late responses reach them through
//! `try_update` and are dropped there.

pub mod group_companies;
pub mod login;
pub mod project_detail;
pub mod projects;
pub mod register;
pub mod shared_products;
pub mod todos;

use leptos::prelude::*;

use crate::app::Session;
use crate::config::NOTICE_TIMEOUT_MS;
use crate::state::listing::{ActionKey, ListScreen};
use crate::util::notice::after_delay;

pub(crate) const NOT_SIGNED_IN: &str = "You are not signed in.";

/// Bearer token of the current session, read without subscribing.
pub(crate) fn current_token(session: Session) -> Option<String> {
    session.with_untracked(|s| s.token().map(str::to_owned))
}

/// Run `load` whenever a token is present and either the token or `key`
/// differs from the previous run.
pub(crate) fn load_on_change<K>(session: Session, key: impl Fn() -> K + 'static, load: Callback<()>)
where
    K: Clone + PartialEq + 'static,
{
    Effect::new(move |previous: Option<Option<(String, K)>>| {
        let current = session.with(|s| s.token().map(str::to_owned)).map(|token| (token, key()));
        if current.is_some() && previous.flatten() != current {
            load.run(());
        }
        current
    });
}

/// Settle an action on `key` and schedule the success banner's dismissal.
/// Returns `false` if the screen is gone.
pub(crate) fn settle<S>(state: RwSignal<S>, key: ActionKey, result: Result<String, String>) -> bool
where
    S: ListScreen + Send + Sync + 'static,
{
    let notice = result.as_ref().ok().cloned();
    if state.try_update(|s| s.listing_mut().finish_action(key, result)).is_none() {
        return false;
    }
    if let Some(notice) = notice {
        after_delay(NOTICE_TIMEOUT_MS, move || {
            state.try_update(|s| s.listing_mut().dismiss_notice(&notice));
        });
    }
    true
}

/// Record a local precondition failure.
pub(crate) fn reject<S>(state: RwSignal<S>, message: &str)
where
    S: ListScreen + Send + Sync + 'static,
{
    state.update(|s| s.listing_mut().reject(message));
}
