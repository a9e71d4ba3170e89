//! Simulation configuration.
//!
//! Every species constant lives in an explicit, immutable struct handed to
//! the behavior that needs it.  Nothing is read from globals, so tests can run
//! with non-default parameters side by side.

use crate::{EcoError, EcoResult};

// ── SpeciesConfig ─────────────────────────────────────────────────────────────

/// Life-cycle constants shared by both species.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpeciesConfig {
    /// Age at which an animal may start to breed.
    pub breeding_age: u32,
    /// Oldest age an animal can reach.  Exceeding it kills the animal.
    pub max_age: u32,
    /// Probability of a breeding attempt succeeding in one step.
    pub breeding_probability: f64,
    /// Upper bound of a litter; the actual size is uniform in `1..=max`.
    pub max_litter_size: u32,
}

impl SpeciesConfig {
    /// Rabbit-like defaults: short-lived, fast-breeding.
    pub const PREY: SpeciesConfig = SpeciesConfig {
        breeding_age:         5,
        max_age:              40,
        breeding_probability: 0.12,
        max_litter_size:      4,
    };

    /// Fox-like defaults: long-lived, slow-breeding.
    pub const PREDATOR: SpeciesConfig = SpeciesConfig {
        breeding_age:         15,
        max_age:              150,
        breeding_probability: 0.08,
        max_litter_size:      2,
    };

    fn validate(&self, species: &str) -> EcoResult<()> {
        if self.max_age == 0 {
            return Err(EcoError::InvalidConfiguration(format!(
                "{species}: max_age must be positive"
            )));
        }
        if self.max_litter_size == 0 {
            return Err(EcoError::InvalidConfiguration(format!(
                "{species}: max_litter_size must be positive"
            )));
        }
        check_probability(species, "breeding_probability", self.breeding_probability)
    }
}

// ── PredatorConfig ────────────────────────────────────────────────────────────

/// Predator constants: the shared life cycle plus the feeding rule.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PredatorConfig {
    pub species: SpeciesConfig,
    /// Food level restored by eating one prey.  In practice, the number of
    /// steps a predator can go before it has to eat again.
    pub food_value: u32,
}

impl Default for PredatorConfig {
    fn default() -> Self {
        Self {
            species:    SpeciesConfig::PREDATOR,
            food_value: 9,
        }
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
///
/// Fixed at simulator construction.  Typically built from `Default` and
/// tweaked, or loaded from JSON by the application with the `serde` feature.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Number of columns.
    pub width: usize,
    /// Number of rows.
    pub depth: usize,
    /// Master RNG seed.  The same seed always produces identical runs.
    pub seed: u64,
    /// Probability that initial seeding puts a predator in a cell.
    pub predator_creation_probability: f64,
    /// Probability that initial seeding puts prey in a cell that did not
    /// receive a predator.
    pub prey_creation_probability: f64,
    pub prey: SpeciesConfig,
    pub predator: PredatorConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width:                         120,
            depth:                         80,
            seed:                          42,
            predator_creation_probability: 0.02,
            prey_creation_probability:     0.08,
            prey:                          SpeciesConfig::PREY,
            predator:                      PredatorConfig::default(),
        }
    }
}

impl SimConfig {
    /// Default species parameters on a `depth` x `width` grid.
    pub fn with_size(depth: usize, width: usize) -> Self {
        Self { width, depth, ..Self::default() }
    }

    /// Reject configurations the rules cannot run with.
    ///
    /// Invalid dimensions are an error, never silently replaced by defaults.
    pub fn validate(&self) -> EcoResult<()> {
        if self.width == 0 || self.depth == 0 {
            return Err(EcoError::InvalidConfiguration(format!(
                "field dimensions must be positive, got {}x{}",
                self.depth, self.width
            )));
        }
        check_probability("seeding", "predator_creation_probability", self.predator_creation_probability)?;
        check_probability("seeding", "prey_creation_probability", self.prey_creation_probability)?;
        self.prey.validate("prey")?;
        self.predator.species.validate("predator")?;
        if self.predator.food_value == 0 {
            return Err(EcoError::InvalidConfiguration(
                "predator: food_value must be positive".into(),
            ));
        }
        Ok(())
    }
}

fn check_probability(scope: &str, name: &str, p: f64) -> EcoResult<()> {
    if (0.0..=1.0).contains(&p) {
        Ok(())
    } else {
        Err(EcoError::InvalidConfiguration(format!(
            "{scope}: {name} must lie in [0, 1], got {p}"
        )))
    }
}
