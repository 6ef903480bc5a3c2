//! Request generation counter for discarding stale search responses.
//!
//! Every fired search takes a ticket. When responses arrive out of order,
//! only the holder of the latest ticket may publish.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Shared, monotonically increasing request counter.
///
/// Clones share state: a ticket issued through one clone makes tickets from
/// every other clone stale.
#[derive(Debug, Clone, Default)]
pub struct SearchGeneration {
    latest: Arc<AtomicU64>,
}

impl SearchGeneration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next ticket. Tickets start at 1.
    pub fn advance(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// The most recently issued ticket, `0` if none yet.
    pub fn latest(&self) -> u64 {
        self.latest.load(Ordering::SeqCst)
    }

    /// Whether `ticket` is still the most recent request.
    pub fn is_current(&self, ticket: u64) -> bool {
        self.latest() == ticket
    }
}
