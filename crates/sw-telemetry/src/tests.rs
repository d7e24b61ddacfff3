//! Unit tests for sw-telemetry.

use chrono::{DateTime, Utc};
use sw_core::{HistoryEntry, LightLevel, Reading, SimRng};

fn at(secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(secs, 0).unwrap()
}

fn reading(dust: u32, rain: bool) -> Reading {
    Reading {
        dust,
        rain,
        temperature: 22,
        humidity:    55,
        light_level: LightLevel::Medium,
        timestamp:   at(0),
    }
}

fn entry(i: u32) -> HistoryEntry {
    HistoryEntry::new(format!("{:02}:00", i % 24), 20 + i, 18, 40 + i)
}

// ── Generator ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod generator_tests {
    use super::*;
    use crate::{ReadingGenerator, ReadingRanges, ScriptedGenerator, TelemetryError, UniformGenerator};

    #[test]
    fn uniform_fields_stay_in_domain() {
        let mut generator = UniformGenerator::seeded(42);
        for i in 0..5_000 {
            let r = generator.next_reading(at(i));
            assert!((20..=69).contains(&r.dust), "dust {}", r.dust);
            assert!((18..=27).contains(&r.temperature), "temperature {}", r.temperature);
            assert!((40..=69).contains(&r.humidity), "humidity {}", r.humidity);
            assert!(LightLevel::ALL.contains(&r.light_level));
            assert_eq!(r.timestamp, at(i));
        }
    }

    #[test]
    fn uniform_covers_domain_edges() {
        let mut generator = UniformGenerator::seeded(7);
        let readings: Vec<Reading> = (0..5_000).map(|i| generator.next_reading(at(i))).collect();
        assert!(readings.iter().any(|r| r.dust == 20));
        assert!(readings.iter().any(|r| r.dust == 69));
        assert!(readings.iter().any(|r| r.temperature == 18));
        assert!(readings.iter().any(|r| r.temperature == 27));
        assert!(readings.iter().any(|r| r.rain));
        assert!(readings.iter().any(|r| !r.rain));
        for level in LightLevel::ALL {
            assert!(readings.iter().any(|r| r.light_level == level));
        }
    }

    #[test]
    fn rain_rate_is_about_one_in_five() {
        let mut generator = UniformGenerator::seeded(3);
        let wet = (0..10_000).filter(|&i| generator.next_reading(at(i)).rain).count();
        assert!((1_600..=2_400).contains(&wet), "wet ticks: {wet}");
    }

    #[test]
    fn same_seed_same_readings() {
        let mut a = UniformGenerator::new(SimRng::new(9));
        let mut b = UniformGenerator::seeded(9);
        for i in 0..32 {
            assert_eq!(a.next_reading(at(i)), b.next_reading(at(i)));
        }
    }

    #[test]
    fn custom_ranges_are_respected() {
        let ranges = ReadingRanges {
            dust:             55..=55,
            temperature:      -3..=-3,
            humidity:         90..=90,
            rain_probability: 1.0,
        };
        let mut generator = UniformGenerator::with_ranges(SimRng::new(1), ranges).unwrap();
        let r = generator.next_reading(at(0));
        assert_eq!((r.dust, r.temperature, r.humidity, r.rain), (55, -3, 90, true));
    }

    #[test]
    fn inverted_range_rejected() {
        let ranges = ReadingRanges { dust: 50..=20, ..ReadingRanges::default() };
        let err = UniformGenerator::with_ranges(SimRng::new(1), ranges).err().unwrap();
        assert_eq!(err, TelemetryError::EmptyRange { field: "dust", start: 50, end: 20 });
    }

    #[test]
    fn bad_rain_probability_rejected() {
        let ranges = ReadingRanges { rain_probability: 1.5, ..ReadingRanges::default() };
        assert!(ranges.validate().is_err());
    }

    #[test]
    fn scripted_replays_and_cycles() {
        let mut generator = ScriptedGenerator::new(vec![reading(10, false), reading(60, true)]).unwrap();
        let dusts: Vec<u32> = (0..5).map(|i| generator.next_reading(at(i)).dust).collect();
        assert_eq!(dusts, vec![10, 60, 10, 60, 10]);
        assert_eq!(generator.produced(), 5);
    }

    #[test]
    fn scripted_restamps_timestamp() {
        let mut generator = ScriptedGenerator::new(vec![reading(10, false)]).unwrap();
        assert_eq!(generator.next_reading(at(500)).timestamp, at(500));
    }

    #[test]
    fn scripted_empty_rejected() {
        assert_eq!(ScriptedGenerator::new(vec![]).err(), Some(TelemetryError::EmptyScript));
    }

    #[test]
    fn closures_are_generators() {
        let mut n = 0;
        let mut generator = |t: DateTime<Utc>| {
            n += 1;
            Reading { dust: n, ..Reading::baseline(t) }
        };
        assert_eq!(generator.next_reading(at(0)).dust, 1);
        assert_eq!(generator.next_reading(at(0)).dust, 2);
    }
}

// ── History ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod history_tests {
    use super::*;
    use crate::{HistoryBuffer, TelemetryError};

    #[test]
    fn huge_capacity_constructs_lazily() {
        for capacity in [usize::MAX, usize::MAX / 2] {
            let mut buffer = HistoryBuffer::new(capacity).unwrap();
            assert_eq!(buffer.capacity(), capacity);
            buffer.extend((0..10).map(entry));
            assert_eq!(buffer.len(), 10);
            assert_eq!(buffer.latest(), Some(&entry(9)));
        }
    }

    #[test]
    fn length_is_min_of_appends_and_capacity() {
        for n in 0..20u32 {
            let mut buffer = HistoryBuffer::default();
            let appended: Vec<HistoryEntry> = (0..n).map(entry).collect();
            buffer.extend(appended.iter().cloned());

            let keep = (n as usize).min(6);
            assert_eq!(buffer.len(), keep);
            assert_eq!(buffer.snapshot(), appended[appended.len() - keep..].to_vec());
        }
    }

    #[test]
    fn oldest_evicted_first() {
        let mut buffer = HistoryBuffer::new(3).unwrap();
        for i in 0..4 {
            buffer.append(entry(i));
        }
        assert_eq!(buffer.snapshot(), vec![entry(1), entry(2), entry(3)]);
        assert_eq!(buffer.latest(), Some(&entry(3)));
    }

    #[test]
    fn identical_entries_are_not_deduplicated() {
        let mut buffer = HistoryBuffer::default();
        buffer.append(entry(1));
        buffer.append(entry(1));
        assert_eq!(buffer.len(), 2);
    }

    #[test]
    fn snapshot_is_a_copy() {
        let mut buffer = HistoryBuffer::default();
        buffer.append(entry(1));
        let before = buffer.snapshot();
        buffer.append(entry(2));
        assert_eq!(before.len(), 1);
        assert_eq!(buffer.iter().count(), 2);
    }

    #[test]
    fn zero_capacity_rejected() {
        assert_eq!(HistoryBuffer::new(0).err(), Some(TelemetryError::ZeroCapacity));
    }

    #[test]
    fn default_capacity_is_six() {
        let buffer = HistoryBuffer::default();
        assert_eq!(buffer.capacity(), 6);
        assert!(buffer.is_empty());
    }
}

// ── Classification ────────────────────────────────────────────────────────────

#[cfg(test)]
mod alert_tests {
    use super::*;
    use crate::{DustTier, WarningReason, classify};

    #[test]
    fn tier_boundaries() {
        assert_eq!(classify(&reading(30, false)).dust_tier, DustTier::Good);
        assert_eq!(classify(&reading(31, false)).dust_tier, DustTier::Moderate);
        assert_eq!(classify(&reading(50, false)).dust_tier, DustTier::Moderate);
        assert_eq!(classify(&reading(51, false)).dust_tier, DustTier::Bad);
        assert_eq!(classify(&reading(0, false)).dust_tier, DustTier::Good);
    }

    #[test]
    fn fifty_is_moderate_without_warning() {
        let c = classify(&reading(50, false));
        assert_eq!(c.dust_tier, DustTier::Moderate);
        assert!(!c.warning);
        assert!(c.reasons().is_empty());
    }

    #[test]
    fn fifty_one_is_bad_with_warning() {
        let c = classify(&reading(51, false));
        assert_eq!(c.dust_tier, DustTier::Bad);
        assert!(c.warning);
        assert_eq!(c.reasons(), vec![WarningReason::HighDust]);
    }

    #[test]
    fn rain_warns_regardless_of_dust() {
        let c = classify(&reading(10, true));
        assert_eq!(c.dust_tier, DustTier::Good);
        assert!(c.warning);
        assert!(c.recommends_closing());
        assert_eq!(c.reasons(), vec![WarningReason::RainDetected]);
    }

    #[test]
    fn reasons_list_rain_before_dust() {
        let c = classify(&reading(69, true));
        assert_eq!(c.reasons(), vec![WarningReason::RainDetected, WarningReason::HighDust]);
    }

    #[test]
    fn classification_is_stable() {
        let r = reading(44, true);
        assert_eq!(classify(&r), classify(&r));
    }

    #[test]
    fn tier_labels() {
        assert_eq!(DustTier::Good.to_string(), "good");
        assert_eq!(DustTier::Moderate.as_str(), "moderate");
        assert_eq!(DustTier::Bad.as_str(), "bad");
    }
}
