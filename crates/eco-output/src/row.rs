//! Plain data row types written by output backends.

/// Animal counts at the end of one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PopulationRow {
    pub step:      u64,
    pub prey:      u64,
    pub predators: u64,
}
