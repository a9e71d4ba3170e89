//! Read-only view of the grid handed to observers.

use eco_core::{Location, Species, Step};
use eco_field::{Field, Occupant};

// ── PopulationCounts ──────────────────────────────────────────────────────────

/// Number of animals of each species on the field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PopulationCounts {
    pub prey:      usize,
    pub predators: usize,
}

impl PopulationCounts {
    /// Count for one species.
    pub fn get(&self, species: Species) -> usize {
        match species {
            Species::Prey     => self.prey,
            Species::Predator => self.predators,
        }
    }

    /// How many species have at least one living member.
    pub fn species_alive(&self) -> usize {
        Species::ALL.iter().filter(|&&s| self.get(s) > 0).count()
    }

    /// Canonical viability policy: keep going while at least two species
    /// survive.
    pub fn is_viable(&self) -> bool {
        self.species_alive() >= 2
    }

    pub fn total(&self) -> usize {
        self.prey + self.predators
    }
}

// ── Snapshot ──────────────────────────────────────────────────────────────────

/// Grid state at the end of a step (or right after reinitialisation).
///
/// Borrowed from the simulator for the duration of one observer callback.
pub struct Snapshot<'a> {
    pub step:  Step,
    pub field: &'a Field,
}

impl<'a> Snapshot<'a> {
    #[inline]
    pub fn new(step: Step, field: &'a Field) -> Self {
        Self { step, field }
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.field.depth()
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.field.width()
    }

    /// Every cell in row-major order with its occupant handle.
    pub fn cells(&self) -> impl Iterator<Item = (Location, Occupant)> + 'a {
        self.field.iter()
    }

    /// Species tags of every occupied cell, in row-major order.
    pub fn species_tags(&self) -> impl Iterator<Item = Species> + 'a {
        self.field.iter().filter_map(|(_, occ)| occ.species())
    }

    pub fn counts(&self) -> PopulationCounts {
        PopulationCounts {
            prey:      self.field.count(Species::Prey),
            predators: self.field.count(Species::Predator),
        }
    }
}
