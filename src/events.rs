//! Observer registries for pool notifications
//!
//! The pool keeps three independent registries (`created`, `reused`,
//! `returned`). Observers run synchronously on the thread that triggered the
//! transition, in subscription order. An observer must not subscribe or
//! unsubscribe from inside its own callback: the registry lock is held while
//! observers run.

use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;

/// Handle identifying a subscribed observer, used to unsubscribe it again.
///
/// Ids are unique within their pool, across all three registries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

type Callback<T> = Box<dyn Fn(&T) + Send + Sync>;

pub(crate) struct ObserverSet<T> {
    entries: RwLock<Vec<(ObserverId, Callback<T>)>>,
}

impl<T> ObserverSet<T> {
    pub(crate) fn new() -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
        }
    }

    pub(crate) fn subscribe<F>(&self, ids: &AtomicU64, f: F) -> ObserverId
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let id = ObserverId(ids.fetch_add(1, Ordering::Relaxed));
        self.entries.write().push((id, Box::new(f)));
        id
    }

    pub(crate) fn unsubscribe(&self, id: ObserverId) -> bool {
        let mut entries = self.entries.write();
        let before = entries.len();
        entries.retain(|(entry_id, _)| *entry_id != id);
        entries.len() != before
    }

    pub(crate) fn emit(&self, item: &T) {
        for (_, callback) in self.entries.read().iter() {
            callback(item);
        }
    }

    pub(crate) fn clear(&self) {
        self.entries.write().clear();
    }
}

/// The three notification registries owned by a pool.
pub(crate) struct PoolObservers<T> {
    pub(crate) created: ObserverSet<T>,
    pub(crate) reused: ObserverSet<T>,
    pub(crate) returned: ObserverSet<T>,
    pub(crate) next_id: AtomicU64,
}

impl<T> PoolObservers<T> {
    pub(crate) fn new() -> Self {
        Self {
            created: ObserverSet::new(),
            reused: ObserverSet::new(),
            returned: ObserverSet::new(),
            next_id: AtomicU64::new(0),
        }
    }

    /// Removes the observer from whichever registry holds it.
    pub(crate) fn unsubscribe(&self, id: ObserverId) -> bool {
        self.created.unsubscribe(id) || self.reused.unsubscribe(id) || self.returned.unsubscribe(id)
    }

    /// Drops every observer in all three registries.
    pub(crate) fn clear(&self) {
        self.created.clear();
        self.reused.clear();
        self.returned.clear();
    }
}
