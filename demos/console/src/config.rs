//! TOML configuration for the console demo.

use std::fs;
use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use sw_core::SimConfig;
use sw_telemetry::ReadingRanges;

pub const DEFAULT_PATH: &str = "config/panel.toml";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    pub simulation: SimConfig,
    pub generator:  ReadingRanges,
    pub logging:    LoggingConfig,
    pub run:        RunConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".into() }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Time-units to simulate before exiting.
    pub duration_units: u64,
    /// Sleep one tick duration between time-units.
    pub realtime: bool,
    /// Text commands applied before the tick source starts.
    pub commands: Vec<String>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            duration_units: 60,
            realtime:       true,
            commands:       Vec::new(),
        }
    }
}

impl PanelConfig {
    /// Parse and validate a TOML document.
    pub fn parse(raw: &str) -> Result<Self> {
        let config: PanelConfig = toml::from_str(raw)?;
        config.simulation.validate()?;
        config.generator.validate()?;
        Ok(config)
    }

    /// Load `path`, or fall back to defaults when the file does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(raw) => Self::parse(&raw).with_context(|| format!("invalid config {}", path.display())),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e).with_context(|| format!("cannot read {}", path.display())),
        }
    }
}
