//! Predator rules: age, starve, breed, hunt, move, or die.

use eco_agent::{Animal, Predator};
use eco_core::{EcoResult, Location, PredatorConfig, PredatorId};
use eco_field::Occupant;

use crate::breeding::litter_size;
use crate::{Behavior, Habitat};

/// [`Behavior`] of predators.
#[derive(Clone, Debug)]
pub struct PredatorBehavior {
    pub config: PredatorConfig,
}

impl PredatorBehavior {
    pub fn new(config: PredatorConfig) -> Self {
        Self { config }
    }

    fn give_birth(
        &self,
        age:     u32,
        here:    Location,
        habitat: &mut Habitat,
        births:  &mut Vec<PredatorId>,
    ) -> EcoResult<()> {
        let free = habitat.field.free_neighbors(here, &mut habitat.rng);
        let litter = litter_size(age, &self.config.species, &mut habitat.rng) as usize;
        for location in free.into_iter().take(litter) {
            births.push(habitat.spawn_predator(location, Predator::newborn(&self.config))?);
        }
        Ok(())
    }

    /// Eat the first live prey adjacent to `here`, scanning in the field's
    /// fixed order, and return the cell it occupied.
    fn hunt(&self, id: PredatorId, here: Location, habitat: &mut Habitat) -> Option<Location> {
        for location in habitat.field.adjacent_locations(here) {
            let Occupant::Prey(prey) = habitat.field.occupant_at(location) else {
                continue;
            };
            if !habitat.prey.is_alive(prey) {
                continue;
            }
            habitat.kill_prey(prey);
            if let Some(predator) = habitat.predators.get_mut(id) {
                predator.food_level = self.config.food_value;
            }
            return Some(location);
        }
        None
    }
}

impl Behavior for PredatorBehavior {
    type Id = PredatorId;

    fn act(&self, id: PredatorId, habitat: &mut Habitat, births: &mut Vec<PredatorId>) -> EcoResult<()> {
        let Some(predator) = habitat.predators.get_mut(id) else {
            return Ok(());
        };
        if !predator.is_alive() {
            return Ok(());
        }

        predator.vitals.age = predator.vitals.age.saturating_add(1);
        predator.food_level = predator.food_level.saturating_sub(1);
        let age = predator.vitals.age;
        let location = predator.location();
        if age > self.config.species.max_age || predator.food_level == 0 {
            habitat.kill_predator(id);
            return Ok(());
        }
        let Some(here) = location else {
            return Ok(());
        };

        self.give_birth(age, here, habitat, births)?;

        let destination = match self.hunt(id, here, habitat) {
            Some(prey_cell) => Some(prey_cell),
            None => habitat.field.free_neighbor(here, &mut habitat.rng),
        };
        match destination {
            Some(to) => habitat.relocate_predator(id, to),
            None => {
                // Overcrowding.
                habitat.kill_predator(id);
                Ok(())
            }
        }
    }
}
