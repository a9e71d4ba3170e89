//! Per-agent state for both species.
//!
//! State only: the per-tick rules that mutate it live in `eco-behavior`.
//! Constructors build unplaced animals; the habitat assigns the location
//! when it puts the animal on the field.

use eco_core::{Location, PredatorConfig, SimRng, SpeciesConfig};

// ── Vitals ────────────────────────────────────────────────────────────────────

/// State every animal carries regardless of species.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vitals {
    pub age: u32,
    pub alive: bool,
    /// Current cell.  `None` before placement and once the animal has died.
    pub location: Option<Location>,
}

impl Vitals {
    /// A living, not yet placed animal of the given age.
    fn unplaced(age: u32) -> Self {
        Self { age, alive: true, location: None }
    }
}

/// Access to the shared [`Vitals`] of any species.
pub trait Animal {
    fn vitals(&self) -> &Vitals;
    fn vitals_mut(&mut self) -> &mut Vitals;

    #[inline]
    fn is_alive(&self) -> bool {
        self.vitals().alive
    }

    #[inline]
    fn location(&self) -> Option<Location> {
        self.vitals().location
    }

    #[inline]
    fn age(&self) -> u32 {
        self.vitals().age
    }
}

// ── Prey ──────────────────────────────────────────────────────────────────────

/// A prey animal (rabbit).  Ages, moves, breeds, and dies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Prey {
    pub vitals: Vitals,
}

impl Prey {
    /// A newborn: age zero.
    pub fn newborn() -> Self {
        Self::with_age(0)
    }

    /// An animal of a given age, e.g. for hand-built scenarios.
    pub fn with_age(age: u32) -> Self {
        Self { vitals: Vitals::unplaced(age) }
    }

    /// A member of the initial population: age uniform in `0..max_age`.
    pub fn with_random_age(config: &SpeciesConfig, rng: &mut SimRng) -> Self {
        Self::with_age(rng.gen_range(0..config.max_age))
    }
}

impl Animal for Prey {
    #[inline]
    fn vitals(&self) -> &Vitals {
        &self.vitals
    }

    #[inline]
    fn vitals_mut(&mut self) -> &mut Vitals {
        &mut self.vitals
    }
}

// ── Predator ──────────────────────────────────────────────────────────────────

/// A predator (fox).  Ages, gets hungry, hunts prey, breeds, and dies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Predator {
    pub vitals: Vitals,
    /// Steps left before starvation.  Reset to the species food value by
    /// eating.
    pub food_level: u32,
}

impl Predator {
    /// A newborn: age zero and fully fed.
    pub fn newborn(config: &PredatorConfig) -> Self {
        Self::with_state(0, config.food_value)
    }

    /// A predator with explicit age and food level.
    pub fn with_state(age: u32, food_level: u32) -> Self {
        Self { vitals: Vitals::unplaced(age), food_level }
    }

    /// A member of the initial population: age uniform in `0..max_age`, then
    /// food level uniform in `0..food_value`.
    pub fn with_random_age(config: &PredatorConfig, rng: &mut SimRng) -> Self {
        let age = rng.gen_range(0..config.species.max_age);
        let food_level = rng.gen_range(0..config.food_value);
        Self::with_state(age, food_level)
    }
}

impl Animal for Predator {
    #[inline]
    fn vitals(&self) -> &Vitals {
        &self.vitals
    }

    #[inline]
    fn vitals_mut(&mut self) -> &mut Vitals {
        &mut self.vitals
    }
}
