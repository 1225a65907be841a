//! Generic list-screen state: load lifecycle, per-item actions, banners.
//!
//! DESIGN
//! ======
//! Every list screen runs the same cycle (load, render, act, reload), so the
//! bookkeeping lives here once and the per-screen modules only add their own
//! filters and preconditions.
//!
//! Each load hands out a `LoadTicket`. Only the response for the newest
//! ticket is applied; anything older is dropped, so a slow response can never
//! overwrite a fresher one.

#[cfg(test)]
#[path = "listing_test.rs"]
mod listing_test;

/// Identifies one load request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// Target of a mutating action: a specific row, or the list's create form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionKey {
    Create,
    Item(u64),
}

impl From<u64> for ActionKey {
    fn from(id: u64) -> Self {
        Self::Item(id)
    }
}

/// Which of the four list renderings applies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListView {
    Loading,
    Error,
    Empty,
    Populated,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Listing<T> {
    pub items: Vec<T>,
    pub loading: bool,
    /// Failure of the most recent load.
    pub load_error: Option<String>,
    /// Failure of the most recent action or local validation.
    pub error: Option<String>,
    /// Actions awaiting a response.
    pub in_flight: Vec<ActionKey>,
    /// Transient success banner.
    pub notice: Option<String>,
    generation: u64,
}

impl<T> Default for Listing<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: true,
            load_error: None,
            error: None,
            in_flight: Vec::new(),
            notice: None,
            generation: 0,
        }
    }
}

impl<T> Listing<T> {
    pub fn view(&self) -> ListView {
        if self.loading {
            ListView::Loading
        } else if self.load_error.is_some() {
            ListView::Error
        } else if self.items.is_empty() {
            ListView::Empty
        } else {
            ListView::Populated
        }
    }

    /// Start a load; any response for an earlier ticket becomes stale.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.generation += 1;
        self.loading = true;
        self.load_error = None;
        LoadTicket(self.generation)
    }

    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        ticket.0 == self.generation
    }

    /// Apply a load result. Returns `false` if the ticket was stale.
    pub fn finish_load(&mut self, ticket: LoadTicket, result: Result<Vec<T>, String>) -> bool {
        if !self.is_current(ticket) {
            log::debug!("dropping stale list response");
            return false;
        }
        self.loading = false;
        match result {
            Ok(items) => self.items = items,
            Err(message) => self.load_error = Some(message),
        }
        true
    }

    /// Record a local validation failure without touching the network.
    pub fn reject(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.notice = None;
    }

    /// Mark `key` as busy. Returns `false` if it already is.
    pub fn begin_action(&mut self, key: impl Into<ActionKey>) -> bool {
        let key = key.into();
        if self.in_flight.contains(&key) {
            return false;
        }
        self.in_flight.push(key);
        self.error = None;
        self.notice = None;
        true
    }

    /// Settle the action on `key` with a success banner or an error message.
    pub fn finish_action(&mut self, key: impl Into<ActionKey>, result: Result<String, String>) {
        let key = key.into();
        self.in_flight.retain(|k| *k != key);
        match result {
            Ok(notice) => self.notice = Some(notice),
            Err(message) => self.error = Some(message),
        }
    }

    pub fn is_in_flight(&self, key: impl Into<ActionKey>) -> bool {
        self.in_flight.contains(&key.into())
    }

    /// Clear the banner only if it is still the one being dismissed.
    pub fn dismiss_notice(&mut self, notice: &str) {
        if self.notice.as_deref() == Some(notice) {
            self.notice = None;
        }
    }
}

/// Screen state whose main rows live in a [`Listing`].
pub trait ListScreen {
    type Item;

    fn listing_mut(&mut self) -> &mut Listing<Self::Item>;
}

impl<T> ListScreen for Listing<T> {
    type Item = T;

    fn listing_mut(&mut self) -> &mut Listing<T> {
        self
    }
}
