//! The `ReadingGenerator` trait: the pluggable source of sensor readings.

use std::ops::RangeInclusive;

use chrono::{DateTime, Utc};
use rand::{Rng, RngCore};
use sw_core::{LightLevel, Reading, SimRng};

use crate::{TelemetryError, TelemetryResult};

/// Produces one reading per tick.
///
/// The controller passes the wall-clock instant of the tick so generators
/// never read the system clock themselves.  Implementations must be total:
/// every call returns a reading.
///
/// Any `FnMut(DateTime<Utc>) -> Reading` closure is a generator, which is the
/// quickest way to stub a fixed sequence in a test.
pub trait ReadingGenerator {
    fn next_reading(&mut self, at: DateTime<Utc>) -> Reading;
}

impl<F> ReadingGenerator for F
where
    F: FnMut(DateTime<Utc>) -> Reading,
{
    fn next_reading(&mut self, at: DateTime<Utc>) -> Reading {
        self(at)
    }
}

// ── ReadingRanges ─────────────────────────────────────────────────────────────

/// Inclusive sampling domains for [`UniformGenerator`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ReadingRanges {
    pub dust:             RangeInclusive<u32>,
    pub temperature:      RangeInclusive<i32>,
    pub humidity:         RangeInclusive<u32>,
    /// Probability that a tick reports rain.
    pub rain_probability: f64,
}

impl Default for ReadingRanges {
    fn default() -> Self {
        Self {
            dust:             20..=69,
            temperature:      18..=27,
            humidity:         40..=69,
            rain_probability: 0.2,
        }
    }
}

impl ReadingRanges {
    pub fn validate(&self) -> TelemetryResult<()> {
        check_range("dust", (*self.dust.start()).into(), (*self.dust.end()).into())?;
        check_range(
            "temperature",
            (*self.temperature.start()).into(),
            (*self.temperature.end()).into(),
        )?;
        check_range("humidity", (*self.humidity.start()).into(), (*self.humidity.end()).into())?;
        if !(0.0..=1.0).contains(&self.rain_probability) {
            return Err(TelemetryError::RainProbability(self.rain_probability));
        }
        Ok(())
    }
}

fn check_range(field: &'static str, start: i64, end: i64) -> TelemetryResult<()> {
    if start > end {
        return Err(TelemetryError::EmptyRange { field, start, end });
    }
    Ok(())
}

// ── UniformGenerator ──────────────────────────────────────────────────────────

/// Draws every field independently and uniformly from its range.
///
/// No cross-field correlation is modelled: rain does not raise humidity and
/// the light level does not move the temperature.
pub struct UniformGenerator<R: RngCore = SimRng> {
    rng:    R,
    ranges: ReadingRanges,
}

impl UniformGenerator<SimRng> {
    /// Default ranges over a `SimRng` seeded with `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::new(SimRng::new(seed))
    }
}

impl<R: RngCore> UniformGenerator<R> {
    /// Default ranges over an injected random source.
    pub fn new(rng: R) -> Self {
        Self { rng, ranges: ReadingRanges::default() }
    }

    pub fn with_ranges(rng: R, ranges: ReadingRanges) -> TelemetryResult<Self> {
        ranges.validate()?;
        Ok(Self { rng, ranges })
    }

    pub fn ranges(&self) -> &ReadingRanges {
        &self.ranges
    }
}

impl<R: RngCore> ReadingGenerator for UniformGenerator<R> {
    fn next_reading(&mut self, at: DateTime<Utc>) -> Reading {
        let ranges = &self.ranges;
        let rng = &mut self.rng;
        Reading {
            dust:        rng.gen_range(ranges.dust.clone()),
            rain:        rng.gen_bool(ranges.rain_probability),
            temperature: rng.gen_range(ranges.temperature.clone()),
            humidity:    rng.gen_range(ranges.humidity.clone()),
            light_level: LightLevel::ALL[rng.gen_range(0..LightLevel::ALL.len())],
            timestamp:   at,
        }
    }
}

// ── ScriptedGenerator ─────────────────────────────────────────────────────────

/// Replays a fixed list of readings, cycling back to the start when
/// exhausted.  Each replayed reading is re-stamped with the tick instant.
pub struct ScriptedGenerator {
    script: Vec<Reading>,
    cursor: usize,
}

impl ScriptedGenerator {
    pub fn new(script: Vec<Reading>) -> TelemetryResult<Self> {
        if script.is_empty() {
            return Err(TelemetryError::EmptyScript);
        }
        Ok(Self { script, cursor: 0 })
    }

    /// How many readings have been produced so far.
    pub fn produced(&self) -> usize {
        self.cursor
    }
}

impl ReadingGenerator for ScriptedGenerator {
    fn next_reading(&mut self, at: DateTime<Utc>) -> Reading {
        let mut reading = self.script[self.cursor % self.script.len()].clone();
        self.cursor += 1;
        reading.timestamp = at;
        reading
    }
}
