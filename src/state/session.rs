//! Session store: the bearer token and the identity decoded from it.
//!
//! SYSTEM CONTEXT
//! ==============
//! One store is created at application start and provided through context.
//! Screens read it through `state()` / `token()` / `identity()` and only the
//! three lifecycle methods mutate it.
//!
//! ERROR HANDLING
//! ==============
//! A bad persisted token is cleared and logged during `initialize`; it never
//! reaches the user. `login` reports decode failures to its caller and leaves
//! the current session untouched.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::util::clock;
use crate::util::jwt::{self, Identity, TokenError};
use crate::util::storage::TokenStorage;

/// Read-only projection of the session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub token: Option<String>,
    pub identity: Option<Identity>,
    /// `false` until `initialize` (or `login`) has run; distinguishes
    /// "not known yet" from "known to be logged out".
    pub initialized: bool,
}

#[derive(Clone, Debug)]
pub struct SessionStore<S> {
    storage: S,
    state: SessionState,
    clock: fn() -> u64,
}

impl<S: TokenStorage> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            state: SessionState::default(),
            clock: clock::now_secs,
        }
    }

    /// Replace the expiry clock (seconds since the Unix epoch).
    #[must_use]
    pub fn with_clock(mut self, clock: fn() -> u64) -> Self {
        self.clock = clock;
        self
    }

    /// Restore the session from storage. Returns whether one was restored.
    pub fn initialize(&mut self) -> bool {
        self.state.token = None;
        self.state.identity = None;

        if let Some(token) = self.storage.load() {
            match jwt::decode_identity(&token, (self.clock)()) {
                Ok(identity) => {
                    log::info!("restored session for {}", identity.username);
                    warn_if_unscoped(&identity);
                    self.state.token = Some(token);
                    self.state.identity = Some(identity);
                }
                Err(e) => {
                    log::warn!("discarding stored session token: {e}");
                    self.storage.clear();
                }
            }
        }

        self.state.initialized = true;
        self.state.identity.is_some()
    }

    /// Install `token` as the active session.
    ///
    /// # Errors
    ///
    /// Returns `TokenError` if the token cannot be decoded or has expired; the
    /// previous session (if any) stays in place.
    pub fn login(&mut self, token: &str) -> Result<&Identity, TokenError> {
        let identity = jwt::decode_identity(token, (self.clock)()).inspect_err(|e| {
            log::warn!("rejecting login token: {e}");
        })?;
        log::info!("signed in as {}", identity.username);
        warn_if_unscoped(&identity);

        self.storage.save(token);
        self.state.token = Some(token.to_owned());
        self.state.initialized = true;
        Ok(self.state.identity.insert(identity))
    }

    /// Drop the session from memory and storage.
    pub fn logout(&mut self) {
        if let Some(identity) = &self.state.identity {
            log::info!("signing out {}", identity.username);
        }
        self.storage.clear();
        self.state.token = None;
        self.state.identity = None;
        self.state.initialized = true;
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn token(&self) -> Option<&str> {
        self.state.token.as_deref()
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.state.identity.as_ref()
    }

    pub fn is_initialized(&self) -> bool {
        self.state.initialized
    }

    /// Organization that scopes shared-data queries: the token's claim when
    /// present, otherwise `fallback`.
    pub fn organization_id(&self, fallback: u64) -> u64 {
        self.identity().and_then(|i| i.organization_id).unwrap_or(fallback)
    }
}

fn warn_if_unscoped(identity: &Identity) {
    if identity.organization_id.is_none() {
        log::warn!("token for {} carries no organization_id; using the configured fallback", identity.username);
    }
}
