use tango_types::{SearchOutcome, SearchPhase};
use tokio::sync::watch;

/// What the UI layer sees. Replaced as a whole on every accepted change.
#[derive(Debug, Clone, Default)]
pub struct SearchSnapshot {
    /// Newest ticket handed out; 0 before the first search
    pub ticket: u64,
    /// Ticket whose outcome is installed; 0 before the first one
    pub last_accepted: u64,
    pub query: Option<String>,
    pub phase: SearchPhase,
    pub outcome: Option<SearchOutcome>,
}

impl SearchSnapshot {
    /// The newest search has not produced an outcome yet
    pub fn in_flight(&self) -> bool {
        self.ticket > self.last_accepted
    }
}

/// Shared search state keyed by monotonic tickets.
///
/// An outcome is installed only if no later ticket has installed one already,
/// so a slow earlier search finishing last cannot overwrite a newer result.
/// Searches that complete in start order are all accepted.
pub struct SearchState {
    tx: watch::Sender<SearchSnapshot>,
}

impl SearchState {
    pub fn new() -> Self {
        Self {
            tx: watch::Sender::new(SearchSnapshot::default()),
        }
    }

    /// Start a search and return its ticket
    pub fn begin(&self, query: &str) -> u64 {
        let mut ticket = 0;
        self.tx.send_modify(|snapshot| {
            snapshot.ticket += 1;
            snapshot.query = Some(query.to_string());
            snapshot.phase = SearchPhase::Resolving;
            ticket = snapshot.ticket;
        });
        ticket
    }

    /// Move the phase of the newest search. Returns false for any older ticket.
    pub fn advance(&self, ticket: u64, phase: SearchPhase) -> bool {
        self.tx.send_if_modified(|snapshot| {
            if snapshot.ticket != ticket || snapshot.last_accepted >= ticket {
                return false;
            }
            snapshot.phase = phase;
            true
        })
    }

    /// Install `outcome` unless a later ticket already installed its own.
    /// Stale outcomes are dropped.
    pub fn finish(&self, ticket: u64, outcome: SearchOutcome) -> bool {
        let accepted = self.tx.send_if_modified(|snapshot| {
            if ticket <= snapshot.last_accepted {
                return false;
            }
            snapshot.last_accepted = ticket;
            // A newer search still running keeps its busy phase
            if ticket == snapshot.ticket {
                snapshot.phase = if outcome.is_success() {
                    SearchPhase::Done
                } else {
                    SearchPhase::Failed
                };
            }
            snapshot.outcome = Some(outcome);
            true
        });

        if !accepted {
            tracing::debug!(ticket, "discarding stale search outcome");
        }
        accepted
    }

    pub fn in_flight(&self) -> bool {
        self.tx.borrow().in_flight()
    }

    pub fn snapshot(&self) -> SearchSnapshot {
        self.tx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<SearchSnapshot> {
        self.tx.subscribe()
    }
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new()
    }
}
