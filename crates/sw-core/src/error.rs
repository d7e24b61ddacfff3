//! Core error type.
//!
//! Sub-crates define their own error enums and convert into their callers'
//! errors via `From` impls where a boundary needs it.

use thiserror::Error;

/// Validation errors for the core value types and configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("unknown light level {0:?} (expected high, medium or low)")]
    UnknownLightLevel(String),
}

/// Shorthand result type for `sw-core`.
pub type CoreResult<T> = Result<T, CoreError>;
