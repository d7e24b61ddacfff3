use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum TelemetryError {
    #[error("{field} range is empty ({start} > {end})")]
    EmptyRange {
        field: &'static str,
        start: i64,
        end:   i64,
    },

    #[error("rain probability {0} is outside [0, 1]")]
    RainProbability(f64),

    #[error("scripted generator needs at least one reading")]
    EmptyScript,

    #[error("history capacity must be at least 1")]
    ZeroCapacity,
}

pub type TelemetryResult<T> = Result<T, TelemetryError>;
