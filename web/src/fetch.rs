//! Fetch bookkeeping shared by the listing screens.

/// The lifecycle of one screen's data.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Loading,
    Loaded(T),
    Error(String),
}

/// Monotonic ticket counter guarding against stale commits.
///
/// Every fetch takes a ticket from [`FetchGate::issue`] before it starts;
/// a resolution may commit only while its ticket is still the newest one.
/// A response that lost the race, or that lands after the screen moved on,
/// is ignored rather than cancelled.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FetchGate {
    seq: u64,
}

impl FetchGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request, superseding every earlier ticket.
    pub fn issue(&mut self) -> u64 {
        self.seq += 1;
        self.seq
    }

    /// Whether a resolution holding `ticket` may still commit.
    pub fn admits(&self, ticket: u64) -> bool {
        self.seq == ticket
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn the_latest_ticket_is_admitted() {
        let mut gate = FetchGate::new();
        let ticket = gate.issue();
        assert!(gate.admits(ticket));
    }

    #[test]
    fn a_superseded_fetch_cannot_commit_even_if_it_resolves_last() {
        let mut gate = FetchGate::new();
        let first = gate.issue(); // fetch A, state S1
        let second = gate.issue(); // fetch B, state S2

        // B resolves first and commits
        assert!(gate.admits(second));
        // A resolves afterwards and must be dropped
        assert!(!gate.admits(first));
    }

    #[test]
    fn tickets_never_repeat() {
        let mut gate = FetchGate::new();
        let a = gate.issue();
        let b = gate.issue();
        assert_ne!(a, b);
        assert!(!gate.admits(a));
    }
}
