//! condo — read-only dashboard over condominium resident and vehicle records.
//!
//! The binary is a thin front end: it loads the collection once through
//! [`condo_feeds::Loader`], then prints either the dashboard counters or the
//! result of one search. All normalisation and matching lives in
//! [`condo_core`].
//!
//! # Architecture
//!
//! ```text
//! Source ──► Normalizer ──► Store ──► Search ──► report
//!                             │
//!                             └─────► Stats ───► report
//! ```

pub mod cli;
pub mod report;

pub use cli::{run, Cli};
