//! Prey rules: age, breed, move, or die of overcrowding.

use eco_agent::{Animal, Prey};
use eco_core::{EcoResult, Location, PreyId, SpeciesConfig};

use crate::breeding::litter_size;
use crate::{Behavior, Habitat};

/// [`Behavior`] of prey animals.
#[derive(Clone, Debug)]
pub struct PreyBehavior {
    pub config: SpeciesConfig,
}

impl PreyBehavior {
    pub fn new(config: SpeciesConfig) -> Self {
        Self { config }
    }

    /// Place newborns on free neighbouring cells, never more than are free.
    fn give_birth(
        &self,
        age:     u32,
        here:    Location,
        habitat: &mut Habitat,
        births:  &mut Vec<PreyId>,
    ) -> EcoResult<()> {
        let free = habitat.field.free_neighbors(here, &mut habitat.rng);
        let litter = litter_size(age, &self.config, &mut habitat.rng) as usize;
        for location in free.into_iter().take(litter) {
            births.push(habitat.spawn_prey(location, Prey::newborn())?);
        }
        Ok(())
    }
}

impl Behavior for PreyBehavior {
    type Id = PreyId;

    fn act(&self, id: PreyId, habitat: &mut Habitat, births: &mut Vec<PreyId>) -> EcoResult<()> {
        let Some(prey) = habitat.prey.get_mut(id) else {
            return Ok(());
        };
        if !prey.is_alive() {
            return Ok(());
        }

        prey.vitals.age = prey.vitals.age.saturating_add(1);
        let age = prey.vitals.age;
        let location = prey.location();
        if age > self.config.max_age {
            habitat.kill_prey(id);
            return Ok(());
        }
        let Some(here) = location else {
            return Ok(());
        };

        self.give_birth(age, here, habitat, births)?;

        match habitat.field.free_neighbor(here, &mut habitat.rng) {
            Some(to) => habitat.relocate_prey(id, to),
            None => {
                // Overcrowding.
                habitat.kill_prey(id);
                Ok(())
            }
        }
    }
}
