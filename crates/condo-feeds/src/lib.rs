//! condo-feeds — unit record sources for condo.
//!
//! Each source retrieves the raw payload (a JSON array of spreadsheet rows,
//! or a `{ "data": [...] }` envelope) from somewhere. The [`Loader`] feeds the
//! payload through the normalizer and swaps the result into a
//! [`condo_core::UnitStore`].

pub mod file;
pub mod http;
pub mod loader;

pub use file::FileSource;
pub use http::HttpSource;
pub use loader::Loader;

use async_trait::async_trait;

/// Why a fetch produced no payload. Any variant leaves the store as it was.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("source unreachable: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("source rejected the request: HTTP {status} {reason}")]
    Status { status: u16, reason: String },
    #[error("source returned an unreadable payload: {0}")]
    Body(#[from] serde_json::Error),
    #[error("could not read source file: {0}")]
    Io(#[from] std::io::Error),
}

/// Trait implemented by each unit record source.
#[async_trait]
pub trait Source: Send + Sync {
    /// Human-readable location, for logs and error messages.
    fn describe(&self) -> String;

    /// Retrieve the raw payload. No retry and no timeout of its own.
    async fn fetch(&self) -> Result<serde_json::Value, FetchError>;
}
