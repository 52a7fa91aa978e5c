//! Unit tests for ps-core primitives.

#[cfg(test)]
mod ids {
    use crate::{AgentId, GroupId};

    #[test]
    fn index_roundtrip() {
        let id = AgentId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(AgentId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(AgentId(0) < AgentId(1));
        assert!(GroupId(100) > GroupId(99));
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(AgentId::INVALID.0, u32::MAX);
        assert_eq!(GroupId::default(), GroupId::INVALID);
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
        assert_eq!(GroupId(2).to_string(), "GroupId(2)");
    }
}

#[cfg(test)]
mod geo {
    use crate::{HEADING_EPSILON, Vec2, distance, normalized_heading};

    #[test]
    fn distance_is_euclidean() {
        let d = distance(Vec2::new(1.0, 1.0), Vec2::new(4.0, 5.0));
        assert!((d - 5.0).abs() < 1e-12);
    }

    #[test]
    fn heading_is_unit_length_beyond_epsilon() {
        let cases = [
            (Vec2::new(0.0, 0.0), Vec2::new(0.01, 0.0)),
            (Vec2::new(3.0, 4.0), Vec2::new(0.0, 0.0)),
            (Vec2::new(-2.5, 7.0), Vec2::new(19.0, -3.0)),
            (Vec2::new(5.0, 5.0), Vec2::new(5.0, 5.2)),
        ];
        for (a, b) in cases {
            let h = normalized_heading(a, b);
            assert!((h.length() - 1.0).abs() < 1e-9, "{a} -> {b}: {h}");
        }
    }

    #[test]
    fn heading_collapses_below_epsilon() {
        let a = Vec2::new(2.0, 2.0);
        assert_eq!(normalized_heading(a, a), Vec2::ZERO);
        assert_eq!(normalized_heading(a, Vec2::new(2.005, 2.005)), Vec2::ZERO);
    }

    #[test]
    fn heading_points_toward_target() {
        let h = normalized_heading(Vec2::new(3.0, 4.0), Vec2::ZERO);
        assert!((h.x + 0.6).abs() < 1e-12);
        assert!((h.y + 0.8).abs() < 1e-12);
    }

    #[test]
    fn normalized_or_zero_threshold() {
        assert_eq!(Vec2::new(HEADING_EPSILON / 2.0, 0.0).normalized_or_zero(), Vec2::ZERO);
        assert_eq!(Vec2::new(0.0, 2.0).normalized_or_zero(), Vec2::new(0.0, 1.0));
    }

    #[test]
    fn arithmetic() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(0.5, -1.0);
        assert_eq!(a + b, Vec2::new(1.5, 1.0));
        assert_eq!(a - b, Vec2::new(0.5, 3.0));
        assert_eq!(a * 2.0, Vec2::new(2.0, 4.0));
        assert_eq!(-a, Vec2::new(-1.0, -2.0));
    }
}

#[cfg(test)]
mod time {
    use crate::Tick;

    #[test]
    fn tick_advances() {
        let t = Tick(10);
        assert_eq!(t.next(), Tick(11));
        assert_eq!(Tick::ZERO.next().next(), Tick(2));
    }

    #[test]
    fn every_interval() {
        assert!(Tick(0).is_every(2));
        assert!(!Tick(3).is_every(2));
        assert!(!Tick(4).is_every(0));
    }
}

#[cfg(test)]
mod config {
    use crate::{CoreError, ModelParams, SimConfig, Tick};

    #[test]
    fn defaults_are_valid() {
        assert!(ModelParams::default().validate().is_ok());
    }

    #[test]
    fn zero_population_is_valid() {
        let p = ModelParams { population: 0, ..ModelParams::default() };
        assert!(p.validate().is_ok());
    }

    #[test]
    fn rejects_non_positive_dimensions() {
        let p = ModelParams { width: 0.0, ..ModelParams::default() };
        assert!(matches!(p.validate(), Err(CoreError::InvalidDimensions { .. })));
        let p = ModelParams { height: -3.0, ..ModelParams::default() };
        assert!(matches!(p.validate(), Err(CoreError::InvalidDimensions { .. })));
        let p = ModelParams { width: f64::NAN, ..ModelParams::default() };
        assert!(matches!(p.validate(), Err(CoreError::InvalidDimensions { .. })));
    }

    #[test]
    fn rejects_inverted_group_sizes() {
        let p = ModelParams { min_group_size: 4, max_group_size: 3, ..ModelParams::default() };
        assert_eq!(p.validate(), Err(CoreError::InvalidGroupSizes { min: 4, max: 3 }));
        let p = ModelParams { min_group_size: 0, ..ModelParams::default() };
        assert!(p.validate().is_err());
    }

    #[test]
    fn rejects_bad_radius_and_velocity() {
        let p = ModelParams { min_radius: 0.0, ..ModelParams::default() };
        assert_eq!(p.validate(), Err(CoreError::InvalidRadius(0.0)));
        let p = ModelParams { min_velocity: -0.1, ..ModelParams::default() };
        assert_eq!(p.validate(), Err(CoreError::InvalidVelocity(-0.1)));
    }

    #[test]
    fn sim_config_end_tick() {
        let cfg = SimConfig { total_ticks: 50, ..SimConfig::default() };
        assert_eq!(cfg.end_tick(), Tick(50));
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            let a: f64 = r1.random();
            let b: f64 = r2.random();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn different_seeds_differ() {
        let a: u64 = SimRng::new(1).random();
        let b: u64 = SimRng::new(2).random();
        assert_ne!(a, b);
    }

    #[test]
    fn gen_range_in_bounds() {
        let mut rng = SimRng::new(0);
        for _ in 0..1000 {
            let v = rng.gen_range(0.5f64..0.7);
            assert!((0.5..0.7).contains(&v));
        }
    }

    #[test]
    fn sample_indices_distinct() {
        let mut rng = SimRng::new(9);
        let mut picked = rng.sample_indices(20, 7);
        assert_eq!(picked.len(), 7);
        picked.sort_unstable();
        picked.dedup();
        assert_eq!(picked.len(), 7);
        assert!(picked.iter().all(|&i| i < 20));
    }

    #[test]
    fn shuffle_is_permutation() {
        let mut rng = SimRng::new(3);
        let mut v: Vec<u32> = (0..50).collect();
        rng.shuffle(&mut v);
        v.sort_unstable();
        assert_eq!(v, (0..50).collect::<Vec<_>>());
    }
}
