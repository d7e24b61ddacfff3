//! Weather selection and hazard flags.
//!
//! Weather is a single value (last write wins).  Hazards are four independent
//! flags: toggling one never touches the others.

use std::fmt;
use std::str::FromStr;

use crate::EffectError;

/// Lowercase and strip separators so `high_dust`, `high-dust` and `HighDust`
/// all parse alike.
fn normalize(s: &str) -> String {
    s.trim()
        .chars()
        .filter(|c| *c != '_' && *c != '-' && *c != ' ')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

// ── Weather ───────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Weather {
    #[default]
    Sunny,
    Cloudy,
    Rainy,
}

impl Weather {
    pub const ALL: [Weather; 3] = [Weather::Sunny, Weather::Cloudy, Weather::Rainy];

    pub fn as_str(self) -> &'static str {
        match self {
            Weather::Sunny  => "sunny",
            Weather::Cloudy => "cloudy",
            Weather::Rainy  => "rainy",
        }
    }
}

impl fmt::Display for Weather {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Weather {
    type Err = EffectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        Weather::ALL
            .into_iter()
            .find(|w| w.as_str() == wanted)
            .ok_or_else(|| EffectError::UnknownWeather(s.to_owned()))
    }
}

// ── Hazard ────────────────────────────────────────────────────────────────────

/// A simulated environmental condition shown as an overlay effect.
///
/// Hazards are purely visual: they do not influence generated readings.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Hazard {
    HighDust,
    HighTemp,
    HighHumidity,
    StrongLight,
}

impl Hazard {
    pub const ALL: [Hazard; 4] = [
        Hazard::HighDust,
        Hazard::HighTemp,
        Hazard::HighHumidity,
        Hazard::StrongLight,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Hazard::HighDust     => "high_dust",
            Hazard::HighTemp     => "high_temp",
            Hazard::HighHumidity => "high_humidity",
            Hazard::StrongLight  => "strong_light",
        }
    }

    #[inline]
    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl fmt::Display for Hazard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Hazard {
    type Err = EffectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        Hazard::ALL
            .into_iter()
            .find(|h| normalize(h.as_str()) == wanted)
            .ok_or_else(|| EffectError::UnknownHazard(s.to_owned()))
    }
}

// ── HazardSet ─────────────────────────────────────────────────────────────────

/// Set of active hazards, one bit per [`Hazard`].
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct HazardSet(u8);

impl HazardSet {
    pub const EMPTY: HazardSet = HazardSet(0);

    #[inline]
    pub fn contains(self, hazard: Hazard) -> bool {
        self.0 & hazard.bit() != 0
    }

    pub fn set(&mut self, hazard: Hazard, active: bool) {
        if active {
            self.0 |= hazard.bit();
        } else {
            self.0 &= !hazard.bit();
        }
    }

    /// Flip `hazard` and return its new state.
    pub fn toggle(&mut self, hazard: Hazard) -> bool {
        self.0 ^= hazard.bit();
        self.contains(hazard)
    }

    /// Active hazards in declaration order.
    pub fn iter(self) -> impl Iterator<Item = Hazard> {
        Hazard::ALL.into_iter().filter(move |h| self.contains(*h))
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl FromIterator<Hazard> for HazardSet {
    fn from_iter<I: IntoIterator<Item = Hazard>>(iter: I) -> Self {
        let mut set = HazardSet::EMPTY;
        for hazard in iter {
            set.set(hazard, true);
        }
        set
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for HazardSet {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for HazardSet {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let hazards = Vec::<Hazard>::deserialize(deserializer)?;
        Ok(hazards.into_iter().collect())
    }
}

// ── EffectState ───────────────────────────────────────────────────────────────

/// Immutable copy of the effect state handed to readers.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EffectSnapshot {
    pub weather: Weather,
    pub hazards: HazardSet,
}

/// Operator-selected weather backdrop and hazard overlays.
#[derive(Clone, Debug, Default)]
pub struct EffectState {
    weather: Weather,
    hazards: HazardSet,
}

impl EffectState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite the active weather unconditionally.
    pub fn set_weather(&mut self, weather: Weather) {
        tracing::debug!(%weather, previous = %self.weather, "weather selected");
        self.weather = weather;
    }

    /// Flip exactly one hazard flag and return its new state.
    pub fn toggle_hazard(&mut self, hazard: Hazard) -> bool {
        let active = self.hazards.toggle(hazard);
        tracing::debug!(%hazard, active, "hazard toggled");
        active
    }

    pub fn weather(&self) -> Weather {
        self.weather
    }

    pub fn hazards(&self) -> HazardSet {
        self.hazards
    }

    pub fn snapshot(&self) -> EffectSnapshot {
        EffectSnapshot {
            weather: self.weather,
            hazards: self.hazards,
        }
    }
}
