//! console: headless consumer of the smart-window panel core.
//!
//! Loads `config/panel.toml` (or the path given as the first argument),
//! seeds the chart with the dashboard's placeholder points, applies the
//! configured commands, then drives the controller in real time and logs
//! every reading with its alert state.

mod config;


use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;
use chrono::Utc;
use tracing_subscriber::EnvFilter;

use sw_core::{HistoryEntry, SimRng};
use sw_effects::{Hazard, HazardSet};
use sw_sim::{ControllerBuilder, ObserverError, TickEvent, TickObserver};
use sw_telemetry::UniformGenerator;

use config::{DEFAULT_PATH, PanelConfig};

// ── Placeholder history ───────────────────────────────────────────────────────

// (label, dust, temperature, humidity) shown before the first tick.
const PLACEHOLDER_HISTORY: [(&str, u32, i32, u32); 6] = [
    ("10:00", 25, 20, 50),
    ("11:00", 30, 21, 52),
    ("12:00", 28, 22, 54),
    ("13:00", 35, 23, 55),
    ("14:00", 40, 24, 53),
    ("15:00", 35, 22, 55),
];

fn placeholder_history() -> Vec<HistoryEntry> {
    PLACEHOLDER_HISTORY
        .iter()
        .map(|&(label, dust, temperature, humidity)| HistoryEntry::new(label, dust, temperature, humidity))
        .collect()
}

// ── Console observer ──────────────────────────────────────────────────────────

struct ConsoleObserver;

impl TickObserver for ConsoleObserver {
    fn name(&self) -> &str {
        "console"
    }

    fn on_tick(&mut self, event: &TickEvent) -> Result<(), ObserverError> {
        let r = &event.reading;
        let class = &event.classification;
        tracing::info!(
            tick = %event.tick,
            time = %r.to_history_entry().time_label,
            dust = r.dust,
            tier = %class.dust_tier,
            rain = r.rain,
            temperature = r.temperature,
            humidity = r.humidity,
            light = %r.light_level,
            "reading"
        );
        if class.recommends_closing() {
            let reasons: Vec<String> = class.reasons().iter().map(ToString::to_string).collect();
            tracing::warn!(reasons = %reasons.join(", "), "close the window");
        }
        Ok(())
    }
}

/// Comma-separated hazard names, `none` when the set is empty.
fn hazard_summary(hazards: HazardSet) -> String {
    if hazards.is_empty() {
        return "none".to_owned();
    }
    hazards.iter().map(Hazard::as_str).collect::<Vec<_>>().join(", ")
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_PATH));
    let PanelConfig { mut simulation, generator, logging, run } = PanelConfig::load(&path)?;
    init_logging(&logging.level);

    if simulation.start_unix_secs == 0 {
        simulation.start_unix_secs = Utc::now().timestamp();
    }
    let tick = Duration::from_secs(u64::from(simulation.tick_duration_secs));
    let generator = UniformGenerator::with_ranges(SimRng::new(simulation.seed), generator)?;

    let mut panel = ControllerBuilder::new(simulation, generator)
        .initial_history(placeholder_history())
        .build()?;
    let console = panel.add_observer(ConsoleObserver);
    let (_feed, rx) = panel.subscribe();

    tracing::info!(
        config = %path.display(),
        period = panel.config().period_ticks,
        duration = run.duration_units,
        %console,
        "panel ready"
    );

    let mut rejected = 0usize;
    for command in &run.commands {
        if panel.execute_str(command).is_err() {
            rejected += 1;
        }
    }
    panel.start();

    let t0 = Instant::now();
    for _ in 0..run.duration_units {
        if run.realtime {
            thread::sleep(tick);
        }
        panel.advance(1);
    }
    panel.stop();

    let delivered = rx.try_iter().count();
    let effects = panel.effect_snapshot();

    println!();
    println!("Run complete in {:.1} s", t0.elapsed().as_secs_f64());
    println!("  ticks fired        : {}", panel.ticks_fired());
    println!("  events on channel  : {delivered}");
    println!("  failed deliveries  : {}", panel.notification_failures());
    println!("  rejected commands  : {rejected}");
    println!("  window             : {}", panel.window_state());
    println!("  weather            : {}", effects.weather);
    println!("  hazards            : {}", hazard_summary(effects.hazards));
    println!();
    println!("{:<8} {:>6} {:>6} {:>6}", "Time", "Dust", "Temp", "Hum");
    println!("{}", "-".repeat(29));
    for entry in panel.history_snapshot() {
        println!(
            "{:<8} {:>6} {:>6} {:>6}",
            entry.time_label, entry.dust, entry.temperature, entry.humidity,
        );
    }

    Ok(())
}
