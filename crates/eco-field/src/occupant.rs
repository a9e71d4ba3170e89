//! What a grid cell can hold.

use eco_core::{PredatorId, PreyId, Species};

/// Contents of one cell: nothing, or a handle to exactly one agent.
///
/// The field never inspects agent state; it only records which handle sits
/// where.  Callers resolve the handle through the matching population store.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Occupant {
    #[default]
    Empty,
    Prey(PreyId),
    Predator(PredatorId),
}

impl Occupant {
    #[inline]
    pub fn is_empty(self) -> bool {
        matches!(self, Occupant::Empty)
    }

    /// Species tag of the occupant, `None` for an empty cell.
    #[inline]
    pub fn species(self) -> Option<Species> {
        match self {
            Occupant::Empty       => None,
            Occupant::Prey(_)     => Some(Species::Prey),
            Occupant::Predator(_) => Some(Species::Predator),
        }
    }
}

impl From<PreyId> for Occupant {
    fn from(id: PreyId) -> Self {
        Occupant::Prey(id)
    }
}

impl From<PredatorId> for Occupant {
    fn from(id: PredatorId) -> Self {
        Occupant::Predator(id)
    }
}
