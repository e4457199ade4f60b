use erpview_types::Principal;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::OpenError;
use crate::opener::{OpenedView, ViewOpener};

/// Proof of which navigation a result belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Result of a navigation, or `Stale` if a newer one started meanwhile.
#[derive(Debug, Clone, PartialEq)]
pub enum Navigation<T> {
    Current(T),
    Stale,
}

impl<T> Navigation<T> {
    pub fn is_stale(&self) -> bool {
        matches!(self, Navigation::Stale)
    }

    pub fn current(self) -> Option<T> {
        match self {
            Navigation::Current(value) => Some(value),
            Navigation::Stale => None,
        }
    }
}

/// Guards the caller's state against results of superseded navigations.
/// Clones share one generation counter.
#[derive(Debug, Clone, Default)]
pub struct Navigator {
    generation: Arc<AtomicU64>,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a navigation; every earlier ticket becomes stale.
    pub fn begin(&self) -> Ticket {
        Ticket(self.generation.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.generation.load(Ordering::SeqCst) == ticket.0
    }

    pub fn settle<T>(&self, ticket: Ticket, value: T) -> Navigation<T> {
        if self.is_current(ticket) {
            Navigation::Current(value)
        } else {
            tracing::debug!(ticket = ticket.0, "dropping stale navigation result");
            Navigation::Stale
        }
    }

    /// Open `alias`; the result is `Stale` if another navigation began
    /// before it finished.
    pub async fn navigate(
        &self,
        opener: &ViewOpener,
        alias: &str,
        principal: &Principal,
    ) -> Navigation<Result<OpenedView, OpenError>> {
        let ticket = self.begin();
        let result = opener.open(alias, principal).await;
        self.settle(ticket, result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newer_ticket_makes_older_stale() {
        let navigator = Navigator::new();
        let first = navigator.begin();
        let second = navigator.begin();

        assert!(navigator.settle(first, "old").is_stale());
        assert_eq!(navigator.settle(second, "new"), Navigation::Current("new"));
    }

    #[test]
    fn test_clones_share_generation() {
        let navigator = Navigator::new();
        let ticket = navigator.begin();
        navigator.clone().begin();
        assert!(!navigator.is_current(ticket));
    }
}
