//! Loader — fetch, normalise, and swap the result into the store.
//!
//! A load either replaces the whole collection or leaves it untouched; there
//! is no partial success. Refreshes are serialised so at most one fetch is
//! outstanding at a time.

use crate::{FetchError, Source};
use condo_core::{normalize_payload, Snapshot, UnitStore};
use std::sync::Arc;
use tokio::sync::Mutex;

pub struct Loader {
    source: Box<dyn Source>,
    store: Arc<UnitStore>,
    gate: Mutex<()>,
}

impl Loader {
    pub fn new(source: impl Source + 'static, store: Arc<UnitStore>) -> Self {
        Self::from_boxed(Box::new(source), store)
    }

    pub fn from_boxed(source: Box<dyn Source>, store: Arc<UnitStore>) -> Self {
        Self {
            source,
            store,
            gate: Mutex::new(()),
        }
    }

    pub fn store(&self) -> &Arc<UnitStore> {
        &self.store
    }

    pub fn source(&self) -> &dyn Source {
        self.source.as_ref()
    }

    /// Fetch the payload and replace the store's collection with it.
    ///
    /// On failure the store keeps its previous snapshot (empty if nothing was
    /// ever loaded) and the error is returned to the caller.
    pub async fn refresh(&self) -> Result<Arc<Snapshot>, FetchError> {
        let _gate = self.gate.lock().await;

        let payload = match self.source.fetch().await {
            Ok(payload) => payload,
            Err(err) => {
                tracing::warn!(source = %self.source.describe(), error = %err, "loader: fetch failed");
                return Err(err);
            }
        };

        let units = normalize_payload(&payload);
        let snapshot = self.store.replace(units);
        tracing::info!(
            source = %self.source.describe(),
            units = snapshot.stats.total,
            "loader: collection loaded"
        );
        Ok(snapshot)
    }
}
