//! Per-screen view guard.
//!
//! DESIGN
//! ======
//! Rendering never decides navigation. The guard classifies the session into
//! `Unresolved` / `Authenticated` / `Unauthenticated` and emits a redirect
//! only on a transition into a state the screen cannot show, so a screen that
//! stays in that state re-renders without re-navigating.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use super::session::SessionState;

pub const LOGIN_ROUTE: &str = "/login";
pub const DEFAULT_ROUTE: &str = "/";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardState {
    Unresolved,
    Authenticated,
    Unauthenticated,
}

impl GuardState {
    pub fn of(session: &SessionState) -> Self {
        if !session.initialized {
            Self::Unresolved
        } else if session.identity.is_some() {
            Self::Authenticated
        } else {
            Self::Unauthenticated
        }
    }
}

/// Which side of the login wall a screen lives on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardMode {
    /// Data screens: require a session.
    Protected,
    /// Login and register: bounce signed-in users to the default screen.
    AuthScreen,
}

/// What a screen should render for the current guard state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session not resolved yet.
    Placeholder,
    /// Content may be shown.
    Render,
    /// A redirect is pending; show a neutral placeholder meanwhile.
    Redirecting,
}

pub fn decision(mode: GuardMode, state: GuardState) -> GuardDecision {
    match (mode, state) {
        (_, GuardState::Unresolved) => GuardDecision::Placeholder,
        (GuardMode::Protected, GuardState::Authenticated) | (GuardMode::AuthScreen, GuardState::Unauthenticated) => {
            GuardDecision::Render
        }
        (GuardMode::Protected, GuardState::Unauthenticated) | (GuardMode::AuthScreen, GuardState::Authenticated) => {
            GuardDecision::Redirecting
        }
    }
}

/// Redirect target for a transition from `previous` to `current`, if any.
///
/// `previous` is `None` on the first observation, which counts as a
/// transition.
pub fn redirect_for(mode: GuardMode, previous: Option<GuardState>, current: GuardState) -> Option<&'static str> {
    if previous == Some(current) {
        return None;
    }
    match (mode, current) {
        (GuardMode::Protected, GuardState::Unauthenticated) => Some(LOGIN_ROUTE),
        (GuardMode::AuthScreen, GuardState::Authenticated) => Some(DEFAULT_ROUTE),
        _ => None,
    }
}

/// Stateful wrapper around [`redirect_for`] for callers that observe the
/// session repeatedly.
#[derive(Clone, Debug)]
pub struct ViewGuard {
    mode: GuardMode,
    last: Option<GuardState>,
}

impl ViewGuard {
    pub fn new(mode: GuardMode) -> Self {
        Self { mode, last: None }
    }

    /// Record the latest session snapshot; returns a redirect to perform now.
    pub fn observe(&mut self, session: &SessionState) -> Option<&'static str> {
        let current = GuardState::of(session);
        let redirect = redirect_for(self.mode, self.last, current);
        self.last = Some(current);
        redirect
    }

    pub fn decision(&self) -> GuardDecision {
        decision(self.mode, self.last.unwrap_or(GuardState::Unresolved))
    }
}
