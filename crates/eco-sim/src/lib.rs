//! `eco-sim` — step orchestrator for the predator-prey simulator.
//!
//! # One step
//!
//! ```text
//! step += 1
//! ① Prey sweep      — each enrolled prey acts (age, breed, move/die)
//! ② Predator sweep  — each enrolled predator acts (age, starve, breed,
//!                     hunt, move/die)
//! ③ Merge           — newborns from ①② join the end of their population
//! ④ Purge           — dead agents leave the populations
//! ⑤ Notify          — SimObserver::on_step(snapshot)
//! ```
//!
//! All prey act before any predator, and newborns never act in the step they
//! were born in.  Everything runs on the calling thread.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use eco_core::SimConfig;
//! use eco_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(SimConfig::default()).build()?;
//! let steps = sim.run(500, &mut NoopObserver)?;
//! println!("{steps} steps, {:?}", sim.counts());
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;
pub mod snapshot;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::{LONG_RUN_STEPS, Simulator};
pub use snapshot::{PopulationCounts, Snapshot};
