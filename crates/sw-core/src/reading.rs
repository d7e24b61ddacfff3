//! Sensor reading value types.
//!
//! A [`Reading`] is produced once per tick and never mutated afterwards.
//! Only its [`HistoryEntry`] projection outlives the tick that produced it.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};

use crate::CoreError;

/// Display format for [`HistoryEntry::time_label`] (hour and minute).
///
/// Applied to the UTC instant, so labels carry no local offset.  A
/// presentation layer that wants local time formats `Reading::timestamp`
/// itself.
pub const TIME_LABEL_FORMAT: &str = "%H:%M";

// ── LightLevel ────────────────────────────────────────────────────────────────

/// Coarse ambient light level reported by the light sensor.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LightLevel {
    High,
    Medium,
    Low,
}

impl LightLevel {
    /// Every variant, in sensor order.  Uniform sampling picks from this.
    pub const ALL: [LightLevel; 3] = [LightLevel::High, LightLevel::Medium, LightLevel::Low];

    pub fn as_str(self) -> &'static str {
        match self {
            LightLevel::High   => "high",
            LightLevel::Medium => "medium",
            LightLevel::Low    => "low",
        }
    }
}

impl fmt::Display for LightLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LightLevel {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "high"   => Ok(LightLevel::High),
            "medium" => Ok(LightLevel::Medium),
            "low"    => Ok(LightLevel::Low),
            _        => Err(CoreError::UnknownLightLevel(s.to_owned())),
        }
    }
}

// ── Reading ───────────────────────────────────────────────────────────────────

/// One synthetic snapshot of every sensor value at a point in time.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Reading {
    /// Particulate concentration (µg/m³).
    pub dust: u32,
    /// `true` when the rain sensor is wet.
    pub rain: bool,
    /// Indoor temperature in °C.
    pub temperature: i32,
    /// Relative humidity in percent.
    pub humidity: u32,
    pub light_level: LightLevel,
    /// Wall-clock instant the reading was produced.
    pub timestamp: DateTime<Utc>,
}

impl Reading {
    /// The reading shown before the first tick fires.
    pub fn baseline(timestamp: DateTime<Utc>) -> Self {
        Self {
            dust:        35,
            rain:        false,
            temperature: 22,
            humidity:    55,
            light_level: LightLevel::Medium,
            timestamp,
        }
    }

    /// Project onto the chart-only fields.
    pub fn to_history_entry(&self) -> HistoryEntry {
        HistoryEntry {
            time_label:  self.timestamp.format(TIME_LABEL_FORMAT).to_string(),
            dust:        self.dust,
            temperature: self.temperature,
            humidity:    self.humidity,
        }
    }
}

// ── HistoryEntry ──────────────────────────────────────────────────────────────

/// Chart point retained in the rolling history.
///
/// `time_label` is a short display string (`HH:MM`), not the full instant.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HistoryEntry {
    pub time_label:  String,
    pub dust:        u32,
    pub temperature: i32,
    pub humidity:    u32,
}

impl HistoryEntry {
    pub fn new(time_label: impl Into<String>, dust: u32, temperature: i32, humidity: u32) -> Self {
        Self { time_label: time_label.into(), dust, temperature, humidity }
    }
}

impl From<&Reading> for HistoryEntry {
    fn from(reading: &Reading) -> Self {
        reading.to_history_entry()
    }
}
