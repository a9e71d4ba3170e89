//! `eco-core` — foundational types for the predator-prey ecology simulator.
//!
//! This crate is a dependency of every other `eco-*` crate.  It intentionally
//! has no `eco-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `PreyId`, `PredatorId`, the `Handle` trait            |
//! | [`location`]    | `Location` grid coordinate                            |
//! | [`species`]     | `Species` tag                                         |
//! | [`step`]        | `Step` generation counter                             |
//! | [`rng`]         | `SimRng` (seedable, shared by the whole run)          |
//! | [`config`]      | `SimConfig`, `SpeciesConfig`, `PredatorConfig`        |
//! | [`error`]       | `EcoError`, `EcoResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod ids;
pub mod location;
pub mod rng;
pub mod species;
pub mod step;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{PredatorConfig, SimConfig, SpeciesConfig};
pub use error::{EcoError, EcoResult};
pub use ids::{Handle, PredatorId, PreyId};
pub use location::Location;
pub use rng::SimRng;
pub use species::Species;
pub use step::Step;
