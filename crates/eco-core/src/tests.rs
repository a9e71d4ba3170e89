//! Unit tests for eco-core primitives.

#[cfg(test)]
mod ids {
    use crate::{Handle, PredatorId, PreyId};

    #[test]
    fn slot_roundtrip() {
        let id = PreyId::from_slot(42);
        assert_eq!(id.index(), 42);
        assert_eq!(id, PreyId(42));
    }

    #[test]
    fn display() {
        assert_eq!(PreyId(7).to_string(), "PreyId(7)");
        assert_eq!(PredatorId(3).to_string(), "PredatorId(3)");
    }
}

#[cfg(test)]
mod location {
    use std::collections::HashSet;

    use crate::Location;

    #[test]
    fn equality_is_by_value() {
        assert_eq!(Location::new(2, 3), Location { row: 2, col: 3 });
        assert_ne!(Location::new(2, 3), Location::new(3, 2));
    }

    #[test]
    fn hashes_by_value() {
        let set: HashSet<Location> = [Location::new(1, 1), Location::new(1, 1)].into();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn display() {
        assert_eq!(Location::new(4, 9).to_string(), "(4, 9)");
    }
}

#[cfg(test)]
mod step {
    use crate::Step;

    #[test]
    fn step_arithmetic() {
        assert_eq!(Step::ZERO.next(), Step(1));
        assert_eq!(Step(41).next().next(), Step(43));
        assert_eq!(Step(3).to_string(), "S3");
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
    fn chance_extremes() {
        let mut rng = SimRng::new(0);
        for _ in 0..1000 {
            assert!(rng.chance(1.0));
            assert!(!rng.chance(-0.1));
        }
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut rng = SimRng::new(9);
        let mut v: Vec<u32> = (0..8).collect();
        rng.shuffle(&mut v);
        let mut sorted = v.clone();
        sorted.sort();
        assert_eq!(sorted, (0..8).collect::<Vec<_>>());
    }

    #[test]
    fn gen_range_in_bounds() {
        let mut rng = SimRng::new(0);
        for _ in 0..1000 {
            let v = rng.gen_range(0..40u32);
            assert!(v < 40);
        }
    }
}

#[cfg(test)]
mod config {
    use crate::{EcoError, SimConfig};

    #[test]
    fn default_is_valid() {
        let cfg = SimConfig::default();
        assert_eq!((cfg.depth, cfg.width), (80, 120));
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn zero_dimensions_rejected() {
        for (depth, width) in [(0, 10), (10, 0), (0, 0)] {
            let err = SimConfig::with_size(depth, width).validate().unwrap_err();
            assert!(matches!(err, EcoError::InvalidConfiguration(_)), "got {err:?}");
        }
    }

    #[test]
    fn probability_out_of_range_rejected() {
        let mut cfg = SimConfig::default();
        cfg.prey.breeding_probability = 1.5;
        assert!(cfg.validate().is_err());

        let mut cfg = SimConfig::default();
        cfg.predator_creation_probability = -0.1;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn zero_food_value_rejected() {
        let mut cfg = SimConfig::default();
        cfg.predator.food_value = 0;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn zero_max_age_rejected() {
        let mut cfg = SimConfig::default();
        cfg.prey.max_age = 0;
        assert!(cfg.validate().is_err());
    }
}
