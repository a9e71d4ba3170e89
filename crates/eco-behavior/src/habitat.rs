//! The mutable world every behavior acts on.

use eco_agent::{Animal, Predator, PredatorPopulation, Prey, PreyPopulation};
use eco_core::{EcoError, EcoResult, Location, PredatorId, PreyId, SimRng};
use eco_field::{Field, Occupant};

/// Field, both populations, and the shared RNG.
///
/// All occupancy changes go through `Habitat` so that an animal's recorded
/// location and the field's record of that cell are updated together:
///
/// ```text
/// alive && location == Some(loc)  ⇔  field.occupant_at(loc) == handle
/// ```
pub struct Habitat {
    pub field:     Field,
    pub prey:      PreyPopulation,
    pub predators: PredatorPopulation,
    pub rng:       SimRng,
}

impl Habitat {
    pub fn new(field: Field, rng: SimRng) -> Self {
        Self {
            field,
            prey:      PreyPopulation::new(),
            predators: PredatorPopulation::new(),
            rng,
        }
    }

    // ── Births ────────────────────────────────────────────────────────────

    /// Put `prey` on the field at `location` and return its handle.
    ///
    /// The prey is stored but not enrolled in the acting order.
    pub fn spawn_prey(&mut self, location: Location, mut prey: Prey) -> EcoResult<PreyId> {
        self.check_vacant(location)?;
        prey.vitals.location = Some(location);
        let id = self.prey.insert(prey);
        self.field.place(Occupant::Prey(id), location)?;
        Ok(id)
    }

    /// Put `predator` on the field at `location` and return its handle.
    ///
    /// The predator is stored but not enrolled in the acting order.
    pub fn spawn_predator(&mut self, location: Location, mut predator: Predator) -> EcoResult<PredatorId> {
        self.check_vacant(location)?;
        predator.vitals.location = Some(location);
        let id = self.predators.insert(predator);
        self.field.place(Occupant::Predator(id), location)?;
        Ok(id)
    }

    // ── Movement ──────────────────────────────────────────────────────────

    /// Move prey `id` to `to`, vacating its old cell.
    pub fn relocate_prey(&mut self, id: PreyId, to: Location) -> EcoResult<()> {
        self.field.place(Occupant::Prey(id), to)?;
        if let Some(prey) = self.prey.get_mut(id) {
            prey.vitals.location = Some(to);
        }
        Ok(())
    }

    /// Move predator `id` to `to`, vacating its old cell.
    pub fn relocate_predator(&mut self, id: PredatorId, to: Location) -> EcoResult<()> {
        self.field.place(Occupant::Predator(id), to)?;
        if let Some(predator) = self.predators.get_mut(id) {
            predator.vitals.location = Some(to);
        }
        Ok(())
    }

    // ── Death protocol ────────────────────────────────────────────────────

    /// Mark prey `id` dead and take it off the field.  Idempotent.
    pub fn kill_prey(&mut self, id: PreyId) {
        if let Some(prey) = self.prey.get_mut(id) {
            retire(prey, Occupant::Prey(id), &mut self.field);
        }
    }

    /// Mark predator `id` dead and take it off the field.  Idempotent.
    pub fn kill_predator(&mut self, id: PredatorId) {
        if let Some(predator) = self.predators.get_mut(id) {
            retire(predator, Occupant::Predator(id), &mut self.field);
        }
    }

    // ── Bulk ──────────────────────────────────────────────────────────────

    /// Empty the field and forget both populations.  The RNG keeps its state.
    pub fn clear(&mut self) {
        self.field.clear_all();
        self.prey.clear();
        self.predators.clear();
    }

    /// Check the two-way occupancy invariant: every live, placed animal is
    /// the field's occupant of its cell, and every occupied cell names a live
    /// animal recorded at that cell.
    pub fn is_consistent(&self) -> bool {
        let animals_match = self.prey.iter().all(|(id, prey)| {
            prey.location()
                .is_some_and(|loc| self.field.occupant_at(loc) == Occupant::Prey(id))
        }) && self.predators.iter().all(|(id, predator)| {
            predator.location()
                .is_some_and(|loc| self.field.occupant_at(loc) == Occupant::Predator(id))
        });

        let cells_match = self.field.iter().all(|(loc, occupant)| match occupant {
            Occupant::Empty => true,
            Occupant::Prey(id) => self
                .prey
                .get(id)
                .is_some_and(|p| p.is_alive() && p.location() == Some(loc)),
            Occupant::Predator(id) => self
                .predators
                .get(id)
                .is_some_and(|p| p.is_alive() && p.location() == Some(loc)),
        });

        animals_match && cells_match
    }

    fn check_vacant(&self, location: Location) -> EcoResult<()> {
        if !self.field.contains(location) {
            return Err(EcoError::OutOfBounds {
                location,
                width: self.field.width(),
                depth: self.field.depth(),
            });
        }
        if !self.field.occupant_at(location).is_empty() {
            return Err(EcoError::Occupied(location));
        }
        Ok(())
    }
}

/// Shared death protocol: flag the animal dead, vacate its cell if it still
/// holds it, and drop its location.
fn retire<A: Animal>(animal: &mut A, handle: Occupant, field: &mut Field) {
    let vitals = animal.vitals_mut();
    vitals.alive = false;
    if let Some(location) = vitals.location.take() {
        if field.occupant_at(location) == handle {
            field.clear(location);
        }
    }
}
