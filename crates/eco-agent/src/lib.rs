//! `eco-agent` — agent state and population storage.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`animal`]      | `Vitals`, the `Animal` trait, `Prey`, `Predator`          |
//! | [`population`]  | `Population<I, T>` slot store with ordered live list      |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                     |
//! |------------|------------------------------------------------------------|
//! | `serde`    | Derives `Serialize`/`Deserialize` on agent state.          |

pub mod animal;
pub mod population;


pub use animal::{Animal, Predator, Prey, Vitals};
pub use population::Population;

use eco_core::{PredatorId, PreyId};

/// Storage for all prey.
pub type PreyPopulation = Population<PreyId, Prey>;

/// Storage for all predators.
pub type PredatorPopulation = Population<PredatorId, Predator>;
