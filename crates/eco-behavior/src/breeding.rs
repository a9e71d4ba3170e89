//! Litter-size draw shared by both species.

use eco_core::{SimRng, SpeciesConfig};

/// Number of offspring an animal of `age` produces this step (may be zero).
///
/// Animals below breeding age consume no draw.  Otherwise one draw decides
/// whether breeding happens and a second picks the litter size uniformly in
/// `1..=max_litter_size`.
pub fn litter_size(age: u32, config: &SpeciesConfig, rng: &mut SimRng) -> u32 {
    if age >= config.breeding_age && rng.chance(config.breeding_probability) {
        rng.gen_range(1..=config.max_litter_size)
    } else {
        0
    }
}
