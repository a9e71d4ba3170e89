//! Fluent builder for constructing a [`Simulator`].

use eco_behavior::{Behavior, Habitat, PredatorBehavior, PreyBehavior};
use eco_core::{PredatorId, PreyId, SimConfig, SimRng, Step};
use eco_field::Field;

use crate::{SimResult, Simulator};

/// Fluent builder for [`Simulator<P, Q>`].
///
/// # Optional inputs (have defaults)
///
/// | Method                    | Default                                   |
/// |---------------------------|-------------------------------------------|
/// | `.prey_behavior(b)`       | `PreyBehavior` from `config.prey`         |
/// | `.predator_behavior(b)`   | `PredatorBehavior` from `config.predator` |
/// | `.unpopulated()`          | Field is randomly seeded on build         |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(SimConfig::with_size(50, 50)).build()?;
/// sim.run(500, &mut NoopObserver)?;
/// ```
pub struct SimBuilder<P, Q> {
    config:            SimConfig,
    prey_behavior:     P,
    predator_behavior: Q,
    populate:          bool,
}

impl SimBuilder<PreyBehavior, PredatorBehavior> {
    /// Create a builder using the standard rules parameterised by `config`.
    pub fn new(config: SimConfig) -> Self {
        Self {
            prey_behavior:     PreyBehavior::new(config.prey),
            predator_behavior: PredatorBehavior::new(config.predator),
            config,
            populate:          true,
        }
    }
}

impl<P, Q> SimBuilder<P, Q>
where
    P: Behavior<Id = PreyId>,
    Q: Behavior<Id = PredatorId>,
{
    /// Replace the prey rules.
    pub fn prey_behavior<P2: Behavior<Id = PreyId>>(self, behavior: P2) -> SimBuilder<P2, Q> {
        SimBuilder {
            config:            self.config,
            prey_behavior:     behavior,
            predator_behavior: self.predator_behavior,
            populate:          self.populate,
        }
    }

    /// Replace the predator rules.
    pub fn predator_behavior<Q2: Behavior<Id = PredatorId>>(self, behavior: Q2) -> SimBuilder<P, Q2> {
        SimBuilder {
            config:            self.config,
            prey_behavior:     self.prey_behavior,
            predator_behavior: behavior,
            populate:          self.populate,
        }
    }

    /// Start from an empty field instead of a randomly seeded one.
    ///
    /// Use with [`Simulator::spawn_prey`] / [`Simulator::spawn_predator`] to
    /// build exact scenarios.
    pub fn unpopulated(mut self) -> Self {
        self.populate = false;
        self
    }

    /// Validate the configuration, create the field, and (unless
    /// [`unpopulated`](Self::unpopulated)) seed the initial population.
    pub fn build(self) -> SimResult<Simulator<P, Q>> {
        self.config.validate()?;

        let field = Field::new(self.config.depth, self.config.width)?;
        let habitat = Habitat::new(field, SimRng::new(self.config.seed));

        let mut sim = Simulator {
            config:            self.config,
            step:              Step::ZERO,
            habitat,
            prey_behavior:     self.prey_behavior,
            predator_behavior: self.predator_behavior,
        };
        if self.populate {
            sim.populate()?;
        }
        Ok(sim)
    }
}
