//! The `Behavior` trait — one per-tick action per species.

use eco_core::{EcoResult, Handle};

use crate::Habitat;

/// Per-tick rules for one species.
///
/// `act` is called once per enrolled agent per tick, in acting order.  It may
/// move the agent, kill it or other agents, and give birth.  Newborn handles
/// are pushed to `births`; the simulator enrolls them only after the whole
/// sweep so they never act in the tick they were born in.
///
/// Agents that are already dead when `act` is called are left untouched.
///
/// Errors are reserved for broken invariants (a move off the grid); all
/// deaths are ordinary state transitions.
pub trait Behavior {
    type Id: Handle;

    fn act(&self, agent: Self::Id, habitat: &mut Habitat, births: &mut Vec<Self::Id>) -> EcoResult<()>;
}
