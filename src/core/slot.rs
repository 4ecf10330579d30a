//! Holder for the currently published aggregation index.

use crate::core::aggregator::AggregationIndex;
use parking_lot::RwLock;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

/// Identifies a fetch started through `IndexSlot::begin_fetch`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FetchTicket(u64);

struct Published<R> {
    generation: u64,
    index: Arc<AggregationIndex<R>>,
}

/// Single reference to the live index, swapped whole on every refresh.
///
/// Readers take an `Arc` snapshot and keep it as long as they like; a
/// concurrent `replace` never changes what they see.
pub struct IndexSlot<R> {
    next_ticket: AtomicU64,
    current: RwLock<Published<R>>,
}

impl<R> IndexSlot<R> {
    pub fn new(initial: AggregationIndex<R>) -> Self {
        Self {
            next_ticket: AtomicU64::new(1),
            current: RwLock::new(Published {
                generation: 0,
                index: Arc::new(initial),
            }),
        }
    }

    pub fn current(&self) -> Arc<AggregationIndex<R>> {
        Arc::clone(&self.current.read().index)
    }

    /// Reserve a ticket before fetching; later tickets supersede earlier ones.
    pub fn begin_fetch(&self) -> FetchTicket {
        FetchTicket(self.next_ticket.fetch_add(1, Ordering::SeqCst))
    }

    /// Unconditional swap. Returns the index that was live before.
    pub fn replace(&self, index: AggregationIndex<R>) -> Arc<AggregationIndex<R>> {
        let ticket = self.begin_fetch();
        let mut guard = self.current.write();
        let previous = std::mem::replace(
            &mut *guard,
            Published {
                generation: ticket.0,
                index: Arc::new(index),
            },
        );
        previous.index
    }

    /// Install `index` unless a fetch started later has already been
    /// published. Returns whether it was installed.
    pub fn publish(&self, ticket: FetchTicket, index: AggregationIndex<R>) -> bool {
        let mut guard = self.current.write();
        if ticket.0 < guard.generation {
            debug!(
                ticket = ticket.0,
                live = guard.generation,
                "stale fetch result discarded"
            );
            return false;
        }
        *guard = Published {
            generation: ticket.0,
            index: Arc::new(index),
        };
        true
    }
}
