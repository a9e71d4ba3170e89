//! CSV output backend.
//!
//! Creates `population.csv` in the configured output directory.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{OutputResult, PopulationRow};

/// Writes one row per step to a CSV file.
pub struct CsvWriter {
    population: Writer<File>,
    finished:   bool,
}

impl CsvWriter {
    /// Open (or create) `population.csv` in `dir` and write the header row.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut population = Writer::from_path(dir.join("population.csv"))?;
        population.write_record(["step", "prey", "predators"])?;
        Ok(Self { population, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_population(&mut self, row: &PopulationRow) -> OutputResult<()> {
        self.population.write_record(&[
            row.step.to_string(),
            row.prey.to_string(),
            row.predators.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.population.flush()?;
        Ok(())
    }
}
