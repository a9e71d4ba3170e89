//! The `OutputWriter` trait implemented by all backend writers.

use crate::{OutputResult, PopulationRow};

/// Trait implemented by output backends.
///
/// Errors are stored by [`StatsObserver`][crate::StatsObserver] and retrieved
/// with [`take_error`][crate::StatsObserver::take_error].
pub trait OutputWriter {
    /// Write one population row.
    fn write_population(&mut self, row: &PopulationRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}
