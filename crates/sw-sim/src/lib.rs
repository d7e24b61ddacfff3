//! `sw-sim`: tick controller for the smart-window panel simulation.
//!
//! # Tick loop
//!
//! ```text
//! while running, every config.period_ticks time-units:
//!   ① Generate : ReadingGenerator::next_reading(clock instant)
//!   ② Classify : dust tier + warning flag
//!   ③ Record   : replace the current reading, append to HistoryBuffer
//!   ④ Publish  : TickObserver::on_tick for every subscriber, in order;
//!                a failing observer is logged and skipped
//! ```
//!
//! Time only moves when the owner calls [`SimulationController::advance`],
//! so there is exactly one tick in flight at any moment and `stop()` takes
//! effect before the next call returns.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use sw_core::SimConfig;
//! use sw_sim::ControllerBuilder;
//!
//! let mut panel = ControllerBuilder::seeded(SimConfig::default()).build()?;
//! let (_id, rx) = panel.subscribe();
//! panel.start();
//! panel.advance(30);                  // six ticks at the default period
//! assert_eq!(panel.history_snapshot().len(), 6);
//! ```

pub mod builder;
pub mod controller;
pub mod error;
pub mod observer;


pub use builder::ControllerBuilder;
pub use controller::{ObserverId, RunState, SimulationController};
pub use error::{ObserverError, SimError, SimResult};
pub use observer::{ChannelObserver, NoopObserver, TickEvent, TickObserver};
