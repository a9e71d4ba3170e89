//! `eco-behavior` — the per-tick ecology rules.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                      |
//! |---------------|---------------------------------------------------------------|
//! | [`habitat`]   | `Habitat` — field, populations, RNG; spawn/move/death protocol |
//! | [`model`]     | `Behavior` trait                                              |
//! | [`prey`]      | `PreyBehavior` — age, breed, move                             |
//! | [`predator`]  | `PredatorBehavior` — age, starve, breed, hunt, move           |
//! | [`breeding`]  | litter-size draw shared by both species                       |
//!
//! # Rules in one tick
//!
//! ```text
//! prey:      age++ → (too old? die) → breed → move to free neighbour
//!                                           → (none free? die)
//! predator:  age++, food-- → (too old or starved? die) → breed
//!            → eat first live adjacent prey (fixed scan order)
//!            → else move to free neighbour (shuffled)
//!            → (nowhere to go? die)
//! ```

pub mod breeding;
pub mod habitat;
pub mod model;
pub mod predator;
pub mod prey;


pub use habitat::Habitat;
pub use model::Behavior;
pub use predator::PredatorBehavior;
pub use prey::PreyBehavior;
