//! Shared test utilities for condo integration harnesses.
//!
//! Import everything you need via `mod common; use common::*;` at the top of
//! each harness file.

pub mod builders;
pub mod fake_api;
pub mod fixtures;

pub use assertions::*;
pub use builders::*;
pub use fixtures::*;
