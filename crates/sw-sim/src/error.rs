use sw_core::CoreError;
use sw_effects::EffectError;
use sw_telemetry::TelemetryError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] CoreError),

    #[error("telemetry setup error: {0}")]
    Telemetry(#[from] TelemetryError),

    #[error("rejected command: {0}")]
    Command(#[from] EffectError),
}

pub type SimResult<T> = Result<T, SimError>;

/// A single observer's failure to handle one tick.
///
/// Reported once and dropped; it never stops the tick loop.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ObserverError {
    #[error("{0}")]
    Failed(String),

    #[error("observer panicked: {0}")]
    Panicked(String),

    #[error("subscriber disconnected")]
    Disconnected,
}

impl ObserverError {
    pub fn failed(msg: impl Into<String>) -> Self {
        ObserverError::Failed(msg.into())
    }
}
