//! `sw-telemetry`: the sensor side of the panel simulation.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                     |
//! |---------------|--------------------------------------------------------------|
//! | [`generator`] | `ReadingGenerator` trait, `UniformGenerator`, `ScriptedGenerator` |
//! | [`history`]   | `HistoryBuffer`: bounded FIFO of chart entries               |
//! | [`alert`]     | `classify`, `Classification`, `DustTier`, `WarningReason`    |
//! | [`error`]     | `TelemetryError`, `TelemetryResult<T>`                       |
//!
//! Everything here is synchronous and free of I/O.  Generation and
//! classification are total functions; only construction-time validation
//! can fail.

pub mod alert;
pub mod error;
pub mod generator;
pub mod history;

#[cfg(test)]
mod tests;

pub use alert::{Classification, DustTier, WarningReason, classify};
pub use error::{TelemetryError, TelemetryResult};
pub use generator::{ReadingGenerator, ReadingRanges, ScriptedGenerator, UniformGenerator};
pub use history::HistoryBuffer;
