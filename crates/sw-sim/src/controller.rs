//! The `SimulationController` and its tick loop.

use std::any::Any;
use std::fmt;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::mpsc::{self, Receiver};

use sw_core::{HistoryEntry, Reading, SimClock, SimConfig, Tick};
use sw_effects::{Command, EffectSnapshot, EffectState, Hazard, Weather, WindowCommand, WindowState};
use sw_telemetry::{Classification, HistoryBuffer, ReadingGenerator, classify};

use crate::{ChannelObserver, ObserverError, SimResult, TickEvent, TickObserver};

/// Whether the tick source is armed.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum RunState {
    Stopped,
    Running,
}

/// Handle returned when subscribing, used to unsubscribe later.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct ObserverId(pub u64);

impl fmt::Display for ObserverId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObserverId({})", self.0)
    }
}

/// Owns the whole panel state and drives the periodic reading tick.
///
/// | Surface      | Methods                                                        |
/// |--------------|----------------------------------------------------------------|
/// | Read         | `current_reading`, `current_classification`, `history_snapshot`, `window_state`, `effect_snapshot` |
/// | Command      | `start`, `stop`, `set_window_open`, `set_weather`, `toggle_hazard`, `execute` |
/// | Subscription | `subscribe`, `add_observer`, `unsubscribe`                     |
///
/// Every read returns a detached copy.  Every command takes `&mut self`, so
/// mutations and reads can never interleave.
///
/// Create via [`ControllerBuilder`][crate::ControllerBuilder].
pub struct SimulationController<G: ReadingGenerator> {
    pub(crate) config: SimConfig,
    pub(crate) clock: SimClock,
    pub(crate) generator: G,

    pub(crate) state: RunState,
    /// Clock position of the next tick; `None` while stopped.
    pub(crate) next_due: Option<Tick>,

    pub(crate) current: Reading,
    pub(crate) classification: Classification,
    pub(crate) history: HistoryBuffer,

    pub(crate) window: WindowState,
    pub(crate) effects: EffectState,

    pub(crate) observers: Vec<(ObserverId, Box<dyn TickObserver>)>,
    pub(crate) next_observer_id: u64,

    pub(crate) ticks_fired: u64,
    pub(crate) notification_failures: u64,
}

impl<G: ReadingGenerator> SimulationController<G> {
    // ── Lifecycle ─────────────────────────────────────────────────────────

    /// Arm the tick source.  The first tick fires one period from now.
    ///
    /// Calling `start` while already running changes nothing: the existing
    /// schedule is kept and no second tick source is created.
    pub fn start(&mut self) {
        if self.state == RunState::Running {
            tracing::debug!(tick = %self.clock.current_tick, "start ignored: already running");
            return;
        }
        let due = self.clock.current_tick + self.config.period_ticks;
        self.state = RunState::Running;
        self.next_due = Some(due);
        tracing::info!(
            tick = %self.clock.current_tick,
            next_due = %due,
            period = self.config.period_ticks,
            "simulation started"
        );
    }

    /// Disarm the tick source.  No tick fires after this returns.
    pub fn stop(&mut self) {
        if self.state == RunState::Stopped {
            return;
        }
        self.state = RunState::Stopped;
        self.next_due = None;
        tracing::info!(
            tick = %self.clock.current_tick,
            ticks_fired = self.ticks_fired,
            "simulation stopped"
        );
    }

    pub fn run_state(&self) -> RunState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    // ── Time ──────────────────────────────────────────────────────────────

    /// Move the clock forward `units` time-units, firing every tick that
    /// falls due on the way.  Returns how many ticks fired.
    pub fn advance(&mut self, units: u64) -> usize {
        let mut fired = 0;
        for _ in 0..units {
            self.clock.advance();
            let now = self.clock.current_tick;
            let Some(due) = self.next_due else { continue };
            if now >= due {
                self.fire_tick(now);
                self.next_due = Some(due + self.config.period_ticks);
                fired += 1;
            }
        }
        fired
    }

    /// Advance until the clock reads `target`.  A target in the past is a
    /// no-op.
    pub fn advance_to(&mut self, target: Tick) -> usize {
        let units = target.since(self.clock.current_tick);
        self.advance(units)
    }

    pub fn now(&self) -> Tick {
        self.clock.current_tick
    }

    pub fn clock(&self) -> &SimClock {
        &self.clock
    }

    /// Clock position of the next tick, or `None` while stopped.
    pub fn next_due(&self) -> Option<Tick> {
        self.next_due
    }

    // ── Read surface ──────────────────────────────────────────────────────

    pub fn current_reading(&self) -> Reading {
        self.current.clone()
    }

    pub fn current_classification(&self) -> Classification {
        self.classification
    }

    /// Chart entries, oldest first.
    pub fn history_snapshot(&self) -> Vec<HistoryEntry> {
        self.history.snapshot()
    }

    pub fn window_state(&self) -> WindowState {
        self.window
    }

    pub fn effect_snapshot(&self) -> EffectSnapshot {
        self.effects.snapshot()
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn ticks_fired(&self) -> u64 {
        self.ticks_fired
    }

    /// Total observer deliveries that failed since construction.
    pub fn notification_failures(&self) -> u64 {
        self.notification_failures
    }

    // ── Command surface ───────────────────────────────────────────────────

    pub fn set_window_open(&mut self, open: bool) {
        self.window.set_open(open);
    }

    /// Flip the window and return the new open state.
    pub fn toggle_window(&mut self) -> bool {
        self.window.toggle()
    }

    pub fn set_weather(&mut self, weather: Weather) {
        self.effects.set_weather(weather);
    }

    /// Flip one hazard flag and return its new state.
    pub fn toggle_hazard(&mut self, hazard: Hazard) -> bool {
        self.effects.toggle_hazard(hazard)
    }

    /// Apply an already-parsed command.
    pub fn execute(&mut self, command: Command) {
        tracing::debug!(%command, "executing command");
        match command {
            Command::Start                         => self.start(),
            Command::Stop                          => self.stop(),
            Command::Window(WindowCommand::Open)   => self.set_window_open(true),
            Command::Window(WindowCommand::Close)  => self.set_window_open(false),
            Command::Window(WindowCommand::Toggle) => {
                self.toggle_window();
            }
            Command::Weather(weather)              => self.set_weather(weather),
            Command::Hazard(hazard)                => {
                self.toggle_hazard(hazard);
            }
        }
    }

    /// Parse and apply a textual command.  A rejected command leaves every
    /// piece of state untouched.
    pub fn execute_str(&mut self, text: &str) -> SimResult<()> {
        match text.parse::<Command>() {
            Ok(command) => {
                self.execute(command);
                Ok(())
            }
            Err(e) => {
                tracing::warn!(command = text, error = %e, "command rejected");
                Err(e.into())
            }
        }
    }

    // ── Subscription ──────────────────────────────────────────────────────

    /// Register an observer.  It receives every tick from the next one on.
    pub fn add_observer<O: TickObserver + 'static>(&mut self, observer: O) -> ObserverId {
        let id = ObserverId(self.next_observer_id);
        self.next_observer_id += 1;
        tracing::debug!(%id, name = observer.name(), "observer subscribed");
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Subscribe through a channel instead of a callback.
    pub fn subscribe(&mut self) -> (ObserverId, Receiver<TickEvent>) {
        let (tx, rx) = mpsc::channel();
        let id = self.add_observer(ChannelObserver::new(tx));
        (id, rx)
    }

    /// Remove an observer.  Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(oid, _)| *oid != id);
        self.observers.len() != before
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn fire_tick(&mut self, now: Tick) {
        let reading = self.generator.next_reading(self.clock.now_utc());
        let classification = classify(&reading);
        self.ticks_fired += 1;

        tracing::debug!(
            tick = %now,
            sequence = self.ticks_fired,
            dust = reading.dust,
            rain = reading.rain,
            temperature = reading.temperature,
            humidity = reading.humidity,
            light = %reading.light_level,
            tier = %classification.dust_tier,
            warning = classification.warning,
            "tick"
        );

        self.history.append(reading.to_history_entry());
        self.current = reading.clone();
        self.classification = classification;

        let event = TickEvent {
            tick: now,
            sequence: self.ticks_fired,
            reading,
            classification,
        };
        self.notify(&event);
    }

    /// Deliver `event` to every observer in order, isolating failures.
    fn notify(&mut self, event: &TickEvent) {
        for (id, observer) in self.observers.iter_mut() {
            let outcome = catch_unwind(AssertUnwindSafe(|| observer.on_tick(event)));
            let error = match outcome {
                Ok(Ok(()))   => continue,
                Ok(Err(e))   => e,
                Err(payload) => ObserverError::Panicked(panic_message(payload.as_ref())),
            };
            self.notification_failures += 1;
            tracing::warn!(
                %id,
                observer = observer.name(),
                tick = %event.tick,
                error = %error,
                "observer notification failed"
            );
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_owned()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_owned()
    }
}
