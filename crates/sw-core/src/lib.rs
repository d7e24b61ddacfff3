//! `sw-core`: foundational types for the smart-window panel simulation.
//!
//! This crate is a dependency of every other `sw-*` crate.  It has no `sw-*`
//! dependencies and only a handful of external ones (`chrono`, `rand`,
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`reading`]     | `Reading`, `LightLevel`, `HistoryEntry`               |
//! | [`time`]        | `Tick`, `SimClock`, `SimConfig`                       |
//! | [`rng`]         | `SimRng` (seeded `RngCore`)                           |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod reading;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use reading::{HistoryEntry, LightLevel, Reading};
pub use rng::SimRng;
pub use time::{SimClock, SimConfig, Tick};
