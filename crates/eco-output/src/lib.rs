//! `eco-output` — population statistics and output writers.
//!
//! | Module       | Contents                                                 |
//! |--------------|----------------------------------------------------------|
//! | [`stats`]    | `Counter`, `FieldStats` (tally, viability, summary text) |
//! | [`row`]      | `PopulationRow`                                          |
//! | [`writer`]   | `OutputWriter` trait                                     |
//! | [`csv`]      | `CsvWriter` → `population.csv`                           |
//! | [`observer`] | `StatsObserver` — implements `eco_sim::SimObserver`      |
//!
//! # Usage
//!
//! ```rust,ignore
//! use eco_output::{CsvWriter, StatsObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output")).unwrap();
//! let mut obs = StatsObserver::new(writer);
//! sim.run_long(&mut obs).unwrap();
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod stats;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::StatsObserver;
pub use row::PopulationRow;
pub use stats::{Counter, FieldStats};
pub use writer::OutputWriter;
