//! Unit tests for sw-core primitives.

#[cfg(test)]
mod reading {
    use chrono::{DateTime, Utc};

    use crate::{HistoryEntry, LightLevel, Reading};

    #[test]
    fn baseline_matches_initial_panel_values() {
        let at = DateTime::from_timestamp(0, 0).unwrap();
        let r = Reading::baseline(at);
        assert_eq!(r.dust, 35);
        assert!(!r.rain);
        assert_eq!(r.temperature, 22);
        assert_eq!(r.humidity, 55);
        assert_eq!(r.light_level, LightLevel::Medium);
        assert_eq!(r.timestamp, at);
    }

    #[test]
    fn projection_keeps_chart_fields_only() {
        // 15:07:42 UTC on 1970-01-01
        let at = DateTime::from_timestamp(15 * 3600 + 7 * 60 + 42, 0).unwrap();
        let r = Reading {
            dust:        61,
            rain:        true,
            temperature: 19,
            humidity:    44,
            light_level: LightLevel::Low,
            timestamp:   at,
        };
        assert_eq!(r.to_history_entry(), HistoryEntry::new("15:07", 61, 19, 44));
        assert_eq!(HistoryEntry::from(&r), r.to_history_entry());
    }

    #[test]
    fn time_label_is_utc() {
        let at = DateTime::parse_from_rfc3339("2024-05-01T15:07:00+02:00")
            .unwrap()
            .with_timezone(&Utc);
        let r = Reading::baseline(at);
        assert_eq!(r.to_history_entry().time_label, "13:07");
    }

    #[test]
    fn light_level_parse_and_display() {
        for level in LightLevel::ALL {
            assert_eq!(level.to_string().parse::<LightLevel>().unwrap(), level);
        }
        assert_eq!(" HIGH ".parse::<LightLevel>().unwrap(), LightLevel::High);
        assert!("dim".parse::<LightLevel>().is_err());
    }
}

#[cfg(test)]
mod time {
    use crate::{SimClock, SimConfig, Tick};

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.offset(3), Tick(13));
        assert_eq!(Tick(15).since(Tick(10)), 5);
        assert_eq!(Tick(3).since(Tick(10)), 0);
        assert_eq!(Tick(u64::MAX) + 1, Tick(u64::MAX));
    }

    #[test]
    fn clock_maps_ticks_to_wall_time() {
        let mut clock = SimClock::new(1_000, 5);
        assert_eq!(clock.current_unix_secs(), 1_000);
        clock.advance();
        clock.advance();
        assert_eq!(clock.elapsed_secs(), 10);
        assert_eq!(clock.now_utc().timestamp(), 1_010);
    }

    #[test]
    fn clock_display() {
        let mut clock = SimClock::new(3600, 1);
        clock.advance();
        assert_eq!(clock.to_string(), "T1 (01:00:01)");
    }

    #[test]
    fn default_config_is_valid() {
        let cfg = SimConfig::default();
        assert_eq!(cfg.period_ticks, 5);
        assert_eq!(cfg.history_capacity, 6);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn config_rejects_zero_values() {
        let zero_period = SimConfig { period_ticks: 0, ..SimConfig::default() };
        assert!(zero_period.validate().is_err());
        let zero_capacity = SimConfig { history_capacity: 0, ..SimConfig::default() };
        assert!(zero_capacity.validate().is_err());
        let zero_duration = SimConfig { tick_duration_secs: 0, ..SimConfig::default() };
        assert!(zero_duration.validate().is_err());
    }

    #[test]
    fn make_clock_uses_config() {
        let cfg = SimConfig { start_unix_secs: 77, tick_duration_secs: 2, ..SimConfig::default() };
        let clock = cfg.make_clock();
        assert_eq!(clock.current_tick, Tick::ZERO);
        assert_eq!(clock.start_unix_secs, 77);
        assert_eq!(clock.tick_duration_secs, 2);
    }
}

#[cfg(test)]
mod rng {
    use rand::{Rng, RngCore};

    use crate::SimRng;

    #[test]
    fn same_seed_same_stream() {
        let mut a = SimRng::new(7);
        let mut b = SimRng::new(7);
        let xs: Vec<u32> = (0..16).map(|_| a.gen_range(0..1000)).collect();
        let ys: Vec<u32> = (0..16).map(|_| b.gen_range(0..1000)).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = SimRng::new(1);
        let mut b = SimRng::new(2);
        let xs: Vec<u64> = (0..8).map(|_| a.next_u64()).collect();
        let ys: Vec<u64> = (0..8).map(|_| b.next_u64()).collect();
        assert_ne!(xs, ys);
    }

    #[test]
    fn certain_and_impossible_events() {
        let mut rng = SimRng::new(3);
        assert!((0..100).all(|_| rng.gen_bool(1.0)));
        assert!((0..100).all(|_| !rng.gen_bool(0.0)));
    }
}
