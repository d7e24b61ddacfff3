//! Fluent builder for constructing a [`SimulationController`].

use sw_core::{HistoryEntry, Reading, SimConfig, SimRng};
use sw_effects::{EffectState, WindowState};
use sw_telemetry::{HistoryBuffer, ReadingGenerator, UniformGenerator, classify};

use crate::{RunState, SimResult, SimulationController};

/// Fluent builder for [`SimulationController<G>`].
///
/// # Required inputs
///
/// - [`SimConfig`]: period, history capacity, clock origin, seed
/// - `G: ReadingGenerator`: the reading source
///
/// # Optional inputs (have defaults)
///
/// | Method                   | Default                                  |
/// |--------------------------|------------------------------------------|
/// | `.initial_reading(r)`    | `Reading::baseline` at the clock origin  |
/// | `.initial_history(v)`    | Empty history                            |
/// | `.window_open(b)`        | Closed                                   |
/// | `.effects(e)`            | Sunny, no hazards                        |
/// | `.autostart(b)`          | `false` (controller starts stopped)      |
///
/// # Example
///
/// ```rust,ignore
/// let mut panel = ControllerBuilder::new(config, ScriptedGenerator::new(script)?)
///     .initial_history(seed_points)
///     .autostart(true)
///     .build()?;
/// panel.advance(10);
/// ```
pub struct ControllerBuilder<G: ReadingGenerator> {
    config:          SimConfig,
    generator:       G,
    initial_reading: Option<Reading>,
    initial_history: Vec<HistoryEntry>,
    window_open:     bool,
    effects:         EffectState,
    autostart:       bool,
}

impl ControllerBuilder<UniformGenerator<SimRng>> {
    /// Uniform generator seeded from `config.seed`.
    pub fn seeded(config: SimConfig) -> Self {
        let generator = UniformGenerator::seeded(config.seed);
        Self::new(config, generator)
    }
}

impl<G: ReadingGenerator> ControllerBuilder<G> {
    pub fn new(config: SimConfig, generator: G) -> Self {
        Self {
            config,
            generator,
            initial_reading: None,
            initial_history: Vec::new(),
            window_open:     false,
            effects:         EffectState::default(),
            autostart:       false,
        }
    }

    /// Reading shown before the first tick.
    pub fn initial_reading(mut self, reading: Reading) -> Self {
        self.initial_reading = Some(reading);
        self
    }

    /// Preload chart entries, oldest first.  Only the newest
    /// `config.history_capacity` entries are kept.
    pub fn initial_history(mut self, entries: Vec<HistoryEntry>) -> Self {
        self.initial_history = entries;
        self
    }

    pub fn window_open(mut self, open: bool) -> Self {
        self.window_open = open;
        self
    }

    pub fn effects(mut self, effects: EffectState) -> Self {
        self.effects = effects;
        self
    }

    /// Start the tick source as part of `build`.
    pub fn autostart(mut self, autostart: bool) -> Self {
        self.autostart = autostart;
        self
    }

    /// Validate inputs and return a ready controller.
    pub fn build(self) -> SimResult<SimulationController<G>> {
        self.config.validate()?;

        let mut history = HistoryBuffer::new(self.config.history_capacity)?;
        history.extend(self.initial_history);

        let clock = self.config.make_clock();
        let current = self
            .initial_reading
            .unwrap_or_else(|| Reading::baseline(clock.now_utc()));
        let classification = classify(&current);

        let mut controller = SimulationController {
            config: self.config,
            clock,
            generator: self.generator,
            state: RunState::Stopped,
            next_due: None,
            current,
            classification,
            history,
            window: WindowState::new(self.window_open),
            effects: self.effects,
            observers: Vec::new(),
            next_observer_id: 0,
            ticks_fired: 0,
            notification_failures: 0,
        };

        if self.autostart {
            controller.start();
        }
        Ok(controller)
    }
}
