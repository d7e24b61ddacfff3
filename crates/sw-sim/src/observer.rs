//! Tick observer trait for the presentation layer and other subscribers.

use std::sync::mpsc::Sender;

use sw_core::{Reading, Tick};
use sw_telemetry::Classification;

use crate::ObserverError;

/// Everything published for one tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TickEvent {
    /// Clock position at which the tick fired.
    pub tick: Tick,
    /// 1-based count of ticks fired by this controller.
    pub sequence: u64,
    pub reading: Reading,
    pub classification: Classification,
}

/// Callback invoked by [`SimulationController`][crate::SimulationController]
/// once per tick, after the current reading and history have been updated.
///
/// Observers are notified sequentially in subscription order.  Returning an
/// error (or panicking) affects only this observer's delivery for this tick:
/// the controller logs it and carries on with the next observer.
///
/// # Example: warning printer
///
/// ```rust,ignore
/// struct WarningPrinter;
///
/// impl TickObserver for WarningPrinter {
///     fn on_tick(&mut self, event: &TickEvent) -> Result<(), ObserverError> {
///         if event.classification.warning {
///             println!("{}: close the window", event.reading.timestamp);
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait TickObserver {
    /// Short name used in log events.
    fn name(&self) -> &str {
        "observer"
    }

    fn on_tick(&mut self, _event: &TickEvent) -> Result<(), ObserverError> {
        Ok(())
    }
}

/// A [`TickObserver`] that does nothing.
pub struct NoopObserver;

impl TickObserver for NoopObserver {}

/// Forwards every tick into an `mpsc` channel.
///
/// Once the receiving end is dropped each delivery fails with
/// [`ObserverError::Disconnected`]; unsubscribe to silence it.
pub struct ChannelObserver {
    tx: Sender<TickEvent>,
}

impl ChannelObserver {
    pub fn new(tx: Sender<TickEvent>) -> Self {
        Self { tx }
    }
}

impl TickObserver for ChannelObserver {
    fn name(&self) -> &str {
        "channel"
    }

    fn on_tick(&mut self, event: &TickEvent) -> Result<(), ObserverError> {
        self.tx
            .send(event.clone())
            .map_err(|_| ObserverError::Disconnected)
    }
}
