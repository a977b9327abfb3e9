//! Base error type.
//!
//! Sub-crates define their own error enums (`CabinError`, `RouteError`, …)
//! and keep them separate; `CoreError` covers only what this crate itself
//! can reject.

use thiserror::Error;

/// The error type for `bus-core`.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `bus-core` operations.
pub type CoreResult<T> = Result<T, CoreError>;
