//! condo-core — core library for the condominium records dashboard.
//!
//! This crate exposes the pipeline layers as public modules, plus the shared
//! types used across all layers.
//!
//! # Architecture
//!
//! ```text
//! Source ──► Normalizer ──► Store ──► Search
//!                             │
//!                             └─────► Stats
//! ```
//!
//! The normalizer and the query engine are pure functions. The store is the
//! only shared state and is replaced wholesale on every load.

pub mod config;
pub mod normalizer;
pub mod search;
pub mod stats;
pub mod store;
pub mod types;

pub use normalizer::{normalize, normalize_payload};
pub use search::{evaluate, QuerySpec};
pub use stats::{compute_stats, Stats};
pub use store::{Snapshot, UnitStore};
pub use types::{Category, RawRecord, Unit};
