//! `StatsObserver<W>` — bridges `SimObserver` to statistics and an
//! `OutputWriter`.

use eco_core::Step;
use eco_sim::{PopulationCounts, SimObserver, Snapshot};

use crate::row::PopulationRow;
use crate::stats::FieldStats;
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that tallies every snapshot with [`FieldStats`], writes
/// one [`PopulationRow`] per snapshot, and decides viability from the tally.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After the run, check for errors with
/// [`take_error`][Self::take_error].
pub struct StatsObserver<W: OutputWriter> {
    writer:     W,
    stats:      FieldStats,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> StatsObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            stats:      FieldStats::new(),
            last_error: None,
        }
    }

    /// Tallies from the most recent snapshot.
    pub fn stats(&self) -> &FieldStats {
        &self.stats
    }

    /// Take the stored write error (if any).
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn record(&mut self, snapshot: &Snapshot<'_>) {
        self.stats.tally(snapshot.species_tags());
        let row = PopulationRow {
            step:      snapshot.step.0,
            prey:      self.stats.counts().prey as u64,
            predators: self.stats.counts().predators as u64,
        };
        let result = self.writer.write_population(&row);
        self.store_err(result);
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for StatsObserver<W> {
    fn on_reset(&mut self, snapshot: &Snapshot<'_>) {
        self.record(snapshot);
    }

    fn on_step(&mut self, snapshot: &Snapshot<'_>) {
        self.record(snapshot);
    }

    /// Uses the latest tally when one exists; before the first snapshot it
    /// falls back to the counts the simulator supplies.
    fn is_viable(&self, counts: &PopulationCounts) -> bool {
        if self.stats.is_valid() {
            self.stats.is_viable()
        } else {
            counts.is_viable()
        }
    }

    fn on_run_end(&mut self, _final_step: Step) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
