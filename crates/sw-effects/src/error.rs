//! Rejected operator commands.
//!
//! Every variant leaves state untouched: parsing fails before any mutation
//! is attempted.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EffectError {
    #[error("unknown weather {0:?} (expected sunny, cloudy or rainy)")]
    UnknownWeather(String),

    #[error("unknown hazard {0:?} (expected high_dust, high_temp, high_humidity or strong_light)")]
    UnknownHazard(String),

    #[error("unknown window state {0:?} (expected open, closed or toggle)")]
    UnknownWindowState(String),

    #[error("invalid command {0:?}")]
    InvalidCommand(String),
}

pub type EffectResult<T> = Result<T, EffectError>;
