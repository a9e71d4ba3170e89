//! Population tallies built from the stream of species tags in a snapshot.

use std::collections::BTreeMap;

use eco_core::Species;
use eco_sim::PopulationCounts;

/// Running count for one species.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Counter {
    name:  &'static str,
    count: usize,
}

impl Counter {
    pub fn new(name: &'static str) -> Self {
        Self { name, count: 0 }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn increment(&mut self) {
        self.count += 1;
    }

    pub fn reset(&mut self) {
        self.count = 0;
    }
}

/// Per-species counters for one snapshot.
///
/// Every species has a counter from the start, so one that is absent or has
/// died out still shows up in reports with a zero count.
#[derive(Clone, Debug)]
pub struct FieldStats {
    counters: BTreeMap<Species, Counter>,
    valid:    bool,
}

impl Default for FieldStats {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldStats {
    pub fn new() -> Self {
        let counters = Species::ALL
            .iter()
            .map(|&species| (species, Counter::new(species.as_str())))
            .collect();
        Self { counters, valid: false }
    }

    /// Zero every counter and mark the tallies stale.
    pub fn reset(&mut self) {
        self.valid = false;
        self.counters.values_mut().for_each(Counter::reset);
    }

    /// Count one more animal of `species`.
    pub fn increment(&mut self, species: Species) {
        self.counters
            .entry(species)
            .or_insert_with(|| Counter::new(species.as_str()))
            .increment();
    }

    /// Mark the tallies as complete.
    pub fn count_finished(&mut self) {
        self.valid = true;
    }

    /// `true` once [`count_finished`](Self::count_finished) has been called
    /// since the last reset.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Reset, count every tag, and finish in one go.
    pub fn tally<I: IntoIterator<Item = Species>>(&mut self, tags: I) {
        self.reset();
        for species in tags {
            self.increment(species);
        }
        self.count_finished();
    }

    pub fn count(&self, species: Species) -> usize {
        self.counters.get(&species).map_or(0, Counter::count)
    }

    pub fn counts(&self) -> PopulationCounts {
        PopulationCounts {
            prey:      self.count(Species::Prey),
            predators: self.count(Species::Predator),
        }
    }

    /// `true` while more than one species has a non-zero count.
    pub fn is_viable(&self) -> bool {
        self.counters.values().filter(|c| c.count() > 0).count() > 1
    }

    /// One-line summary such as `"Prey: 120 Predator: 14"`.
    pub fn population_details(&self) -> String {
        self.counters
            .values()
            .map(|c| format!("{}: {}", c.name(), c.count()))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
