//! Simulation observer trait for views, statistics, and output.

use eco_core::Step;

use crate::{PopulationCounts, Snapshot};

/// Callbacks invoked by the [`Simulator`][crate::Simulator].
///
/// All methods have defaults so implementors only override what they care
/// about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_step(&mut self, snapshot: &Snapshot<'_>) {
///         if snapshot.step.0 % self.interval == 0 {
///             println!("{}: {:?}", snapshot.step, snapshot.counts());
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called after the field has been repopulated by a reinitialisation.
    fn on_reset(&mut self, _snapshot: &Snapshot<'_>) {}

    /// Called at the end of every step with the final grid state.
    fn on_step(&mut self, _snapshot: &Snapshot<'_>) {}

    /// Viability predicate checked by [`run`][crate::Simulator::run] before
    /// each step.  Returning `false` stops the run.
    ///
    /// Default: [`PopulationCounts::is_viable`] (two or more species alive).
    fn is_viable(&self, counts: &PopulationCounts) -> bool {
        counts.is_viable()
    }

    /// Called once when a run finishes, for whatever reason.
    fn on_run_end(&mut self, _final_step: Step) {}
}

/// A [`SimObserver`] that does nothing beyond the default viability policy.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
