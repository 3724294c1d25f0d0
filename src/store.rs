//! Session store - win counter and captured opt-in leads
//!
//! Owned by the app root and handed to screens through context: one
//! explicit provider, no module-level globals. Everything here lives and
//! dies with the page; there is no persistence.

use dioxus::prelude::*;

/// One submitted opt-in entry
#[derive(Debug, Clone, PartialEq)]
pub struct Lead {
    pub name: String,
    pub email: String,
    pub newsletter: bool,
    /// Milliseconds since the epoch, from the browser clock
    pub submitted_at_ms: f64,
}

/// Copyable handle to the session state
#[derive(Clone, Copy)]
pub struct GameStore {
    games_won: Signal<u32>,
    leads: Signal<Vec<Lead>>,
}

impl GameStore {
    /// Install the store at the app root. Call once, before the router.
    pub fn provide() -> Self {
        use_context_provider(|| Self {
            games_won: Signal::new(0),
            leads: Signal::new(Vec::new()),
        })
    }

    pub fn games_won(&self) -> u32 {
        *self.games_won.read()
    }

    pub fn record_win(&mut self) {
        self.games_won += 1;
    }

    /// Entry-route reset: the player session restarts, the operator's
    /// collected leads do not.
    pub fn reset_session(&mut self) {
        let won = *self.games_won.read();
        if won != 0 {
            self.games_won.set(0);
        }
    }

    pub fn add_lead(&mut self, lead: Lead) {
        self.leads.write().push(lead);
    }

    pub fn leads(&self) -> Vec<Lead> {
        self.leads.read().clone()
    }

    pub fn lead_count(&self) -> usize {
        self.leads.read().len()
    }
}

/// Grab the store from context inside any screen
pub fn use_store() -> GameStore {
    use_context()
}
