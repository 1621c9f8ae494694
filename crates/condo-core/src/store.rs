//! Store — the current unit collection, replaced wholesale on every load.
//!
//! The store is the single source of truth; the front end reads from it,
//! never from the source directly. Readers hold an `Arc<Snapshot>` and keep
//! seeing a consistent (possibly stale) collection while a new one is swapped
//! in.

use crate::search::{self, QuerySpec};
use crate::stats::{compute_stats, Stats};
use crate::types::Unit;
use chrono::{DateTime, Utc};
use std::sync::{Arc, RwLock};

/// One loaded collection with its counters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    pub units: Vec<Unit>,
    pub stats: Stats,
    /// When this collection was swapped in. `None` for the startup snapshot.
    pub loaded_at: Option<DateTime<Utc>>,
}

impl Snapshot {
    pub fn new(units: Vec<Unit>) -> Self {
        let stats = compute_stats(&units);
        Self {
            units,
            stats,
            loaded_at: Some(Utc::now()),
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded_at.is_some()
    }
}

#[derive(Debug, Default)]
pub struct UnitStore {
    current: RwLock<Arc<Snapshot>>,
}

impl UnitStore {
    /// An empty, not-yet-loaded store.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> Arc<Snapshot> {
        // A poisoned lock still holds a whole snapshot; the swap is a single
        // pointer write.
        match self.current.read() {
            Ok(guard) => Arc::clone(&*guard),
            Err(poisoned) => Arc::clone(&*poisoned.into_inner()),
        }
    }

    /// Swap in a new collection and return the snapshot built for it.
    pub fn replace(&self, units: Vec<Unit>) -> Arc<Snapshot> {
        let next = Arc::new(Snapshot::new(units));
        tracing::debug!(
            total = next.stats.total,
            vehicles = next.stats.with_vehicle,
            "store: snapshot replaced"
        );
        let mut guard = match self.current.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        *guard = Arc::clone(&next);
        next
    }

    /// Evaluate `spec` against the current snapshot.
    pub fn search(&self, spec: &QuerySpec) -> Vec<Unit> {
        search::evaluate(&self.snapshot().units, spec)
    }

    pub fn stats(&self) -> Stats {
        self.snapshot().stats
    }
}
