//! Tests for eco-sim.

use eco_agent::{Animal, Population};
use eco_core::{Handle, Location, SimConfig, SpeciesConfig, Step};

use crate::{NoopObserver, PopulationCounts, SimBuilder, SimObserver, Simulator, Snapshot};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn small_config(seed: u64) -> SimConfig {
    SimConfig {
        seed,
        predator_creation_probability: 0.05,
        prey_creation_probability: 0.3,
        ..SimConfig::with_size(20, 20)
    }
}

fn empty_sim(depth: usize, width: usize) -> Simulator {
    SimBuilder::new(SimConfig::with_size(depth, width))
        .unpopulated()
        .build()
        .unwrap()
}

/// Empty field; neither species ever breeds.
fn barren_sim(depth: usize, width: usize) -> Simulator {
    let mut config = SimConfig::with_size(depth, width);
    config.prey.breeding_probability = 0.0;
    config.predator.species.breeding_probability = 0.0;
    SimBuilder::new(config).unpopulated().build().unwrap()
}

fn ages_within<I: Handle, T: Animal>(population: &Population<I, T>, max_age: u32) -> bool {
    population.iter().all(|(_, animal)| animal.age() <= max_age)
}

/// Records every callback.
#[derive(Default)]
struct Recorder {
    resets:   Vec<Step>,
    steps:    Vec<Step>,
    counts:   Vec<PopulationCounts>,
    run_ends: Vec<Step>,
}

impl SimObserver for Recorder {
    fn on_reset(&mut self, snapshot: &Snapshot<'_>) {
        self.resets.push(snapshot.step);
    }
    fn on_step(&mut self, snapshot: &Snapshot<'_>) {
        self.steps.push(snapshot.step);
        self.counts.push(snapshot.counts());
    }
    fn on_run_end(&mut self, final_step: Step) {
        self.run_ends.push(final_step);
    }
}

/// Never considers the population viable.
struct AlwaysExtinct;

impl SimObserver for AlwaysExtinct {
    fn is_viable(&self, _counts: &PopulationCounts) -> bool {
        false
    }
}

/// Viable regardless of counts.
struct AlwaysViable;

impl SimObserver for AlwaysViable {
    fn is_viable(&self, _counts: &PopulationCounts) -> bool {
        true
    }
}

// ── Builder ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use eco_core::EcoError;

    use super::*;
    use crate::SimError;

    #[test]
    fn rejects_non_positive_dimensions() {
        let result = SimBuilder::new(SimConfig::with_size(0, 10)).build();
        assert!(matches!(
            result,
            Err(SimError::Eco(EcoError::InvalidConfiguration(_)))
        ));
    }

    #[test]
    fn populated_build_matches_field() {
        let sim = SimBuilder::new(small_config(1)).build().unwrap();
        assert_eq!(sim.current_step(), Step::ZERO);
        assert!(sim.prey().len() > 0);
        let counts = sim.counts();
        assert_eq!(counts.prey, sim.prey().len());
        assert_eq!(counts.predators, sim.predators().len());
        assert!(sim.habitat().is_consistent());
    }

    #[test]
    fn unpopulated_build_is_empty() {
        let sim = empty_sim(4, 4);
        assert_eq!(sim.counts().total(), 0);
        assert_eq!(sim.field().depth(), 4);
    }

    #[test]
    fn certain_predator_seeding_leaves_no_room_for_prey() {
        let config = SimConfig {
            predator_creation_probability: 1.0,
            prey_creation_probability: 1.0,
            ..SimConfig::with_size(5, 5)
        };
        let sim = SimBuilder::new(config).build().unwrap();
        assert_eq!(sim.counts(), PopulationCounts { prey: 0, predators: 25 });
    }

    #[test]
    fn initial_ages_below_maximum() {
        let sim = SimBuilder::new(small_config(3)).build().unwrap();
        let config = &sim.config;
        assert!(sim.prey().iter().all(|(_, p)| p.age() < config.prey.max_age));
        assert!(sim
            .predators()
            .iter()
            .all(|(_, p)| p.age() < config.predator.species.max_age
                && p.food_level < config.predator.food_value));
    }
}

// ── Reinitialize ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod reinitialize_tests {
    use super::*;

    #[test]
    fn resets_counter_and_repopulates() {
        let mut sim = SimBuilder::new(small_config(5)).build().unwrap();
        sim.run(10, &mut AlwaysViable).unwrap();
        assert_eq!(sim.current_step(), Step(10));

        let mut rec = Recorder::default();
        sim.reinitialize(&mut rec).unwrap();

        assert_eq!(sim.current_step(), Step::ZERO);
        assert_eq!(rec.resets, vec![Step::ZERO]);
        let counts = sim.counts();
        assert_eq!(counts.prey, sim.prey().len());
        assert_eq!(counts.predators, sim.predators().len());
        assert_eq!(sim.prey().live().len(), sim.prey().len(), "no dead left enrolled");
        assert!(sim.habitat().is_consistent());
    }

    #[test]
    fn built_simulator_announces_step_zero() {
        let mut sim = SimBuilder::new(small_config(6)).build().unwrap();
        let mut rec = Recorder::default();
        sim.announce(&mut rec);
        sim.run(2, &mut rec).unwrap();

        assert_eq!(rec.resets, vec![Step::ZERO]);
        assert_eq!(rec.steps, vec![Step(1), Step(2)]);
    }

    #[test]
    fn announce_leaves_the_field_untouched() {
        let sim = SimBuilder::new(small_config(6)).build().unwrap();
        let before = sim.counts();
        sim.announce(&mut NoopObserver);
        assert_eq!(sim.counts(), before);
        assert_eq!(sim.current_step(), Step::ZERO);
    }

    #[test]
    fn removes_hand_placed_animals() {
        let mut sim = SimBuilder::new(SimConfig {
            predator_creation_probability: 0.0,
            prey_creation_probability: 0.0,
            ..SimConfig::with_size(3, 3)
        })
        .build()
        .unwrap();
        sim.spawn_prey(Location::new(0, 0), 1).unwrap();
        sim.reinitialize(&mut NoopObserver).unwrap();
        assert_eq!(sim.counts().total(), 0);
        assert!(sim.prey().live().is_empty());
    }
}

// ── Step ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod step_tests {
    use eco_core::EcoError;
    use eco_field::Occupant;

    use super::*;
    use crate::SimError;

    #[test]
    fn old_prey_on_single_cell_dies() {
        let mut sim = empty_sim(1, 1);
        let max_age = sim.config.prey.max_age;
        let id = sim.spawn_prey(Location::new(0, 0), max_age).unwrap();

        sim.step(&mut NoopObserver).unwrap();

        assert!(!sim.prey().is_alive(id));
        assert!(sim.field().occupant_at(Location::new(0, 0)).is_empty());
        assert!(sim.prey().is_empty());
        assert_eq!(sim.current_step(), Step(1));
    }

    #[test]
    fn occupancy_stays_consistent() {
        let mut sim = SimBuilder::new(small_config(7)).build().unwrap();
        for _ in 0..60 {
            sim.step(&mut NoopObserver).unwrap();
            assert!(sim.habitat().is_consistent(), "broken at {}", sim.current_step());
            let counts = sim.counts();
            assert_eq!(counts.prey, sim.prey().len());
            assert_eq!(counts.predators, sim.predators().len());
            assert_eq!(counts.total(), sim.field().occupied_count());
        }
    }

    #[test]
    fn nobody_outlives_maximum_age() {
        let mut sim = SimBuilder::new(small_config(8)).build().unwrap();
        let prey_max = sim.config.prey.max_age;
        let predator_max = sim.config.predator.species.max_age;
        for _ in 0..60 {
            sim.step(&mut NoopObserver).unwrap();
            assert!(ages_within(sim.prey(), prey_max));
            assert!(ages_within(sim.predators(), predator_max));
        }
    }

    #[test]
    fn newborns_do_not_act_in_their_birth_step() {
        let config = SimConfig {
            prey: SpeciesConfig {
                breeding_age: 0,
                breeding_probability: 1.0,
                ..SpeciesConfig::PREY
            },
            ..SimConfig::with_size(5, 5)
        };
        let mut sim = SimBuilder::new(config).unpopulated().build().unwrap();
        let parent = sim.spawn_prey(Location::new(2, 2), 3).unwrap();

        sim.step(&mut NoopObserver).unwrap();

        assert_eq!(sim.prey().get(parent).unwrap().age(), 4);
        let newborns: Vec<_> = sim.prey().iter().filter(|&(id, _)| id != parent).collect();
        assert!(!newborns.is_empty());
        assert!(newborns.iter().all(|(_, p)| p.age() == 0));
        assert_eq!(sim.prey().live()[0], parent, "newborns join after the parent");
    }

    #[test]
    fn prey_eaten_during_the_step_leaves_the_population() {
        // 1x3 strip.  The prey's only free neighbour is the middle cell, next
        // to the predator, which eats it in the predator sweep.
        let mut sim = barren_sim(1, 3);
        let prey = sim.spawn_prey(Location::new(0, 0), 1).unwrap();
        let fox = sim.spawn_predator(Location::new(0, 2), 20, 5).unwrap();

        sim.step(&mut NoopObserver).unwrap();

        assert!(!sim.prey().is_alive(prey));
        assert!(sim.prey().live().is_empty());
        let predator = sim.predators().get(fox).unwrap();
        assert_eq!(predator.location(), Some(Location::new(0, 1)));
        assert_eq!(predator.food_level, sim.config.predator.food_value);
        assert!(sim.habitat().is_consistent());
    }

    #[test]
    fn overcrowded_prey_dies_before_predator_hunts() {
        // 1x2 strip.  Prey act first: boxed in by the predator, the prey dies
        // of overcrowding, and the predator then walks into the freed cell
        // without having eaten.
        let mut sim = barren_sim(1, 2);
        sim.spawn_prey(Location::new(0, 0), 1).unwrap();
        let fox = sim.spawn_predator(Location::new(0, 1), 20, 5).unwrap();

        sim.step(&mut NoopObserver).unwrap();

        assert!(sim.prey().is_empty());
        assert_eq!(
            sim.field().occupant_at(Location::new(0, 0)),
            Occupant::Predator(fox)
        );
        assert_eq!(sim.predators().get(fox).unwrap().food_level, 4);
    }

    #[test]
    fn spawned_with_largest_age_dies_on_next_step() {
        let mut sim = empty_sim(2, 2);
        let rabbit = sim.spawn_prey(Location::new(0, 0), u32::MAX).unwrap();
        let fox = sim.spawn_predator(Location::new(1, 1), u32::MAX, 5).unwrap();

        sim.step(&mut NoopObserver).unwrap();

        assert!(!sim.prey().is_alive(rabbit));
        assert!(!sim.predators().is_alive(fox));
        assert_eq!(sim.counts().total(), 0);
    }

    #[test]
    fn spawn_rejects_occupied_cell() {
        let mut sim = empty_sim(2, 2);
        sim.spawn_prey(Location::new(1, 1), 0).unwrap();
        assert_eq!(
            sim.spawn_predator(Location::new(1, 1), 0, 5),
            Err(SimError::Eco(EcoError::Occupied(Location::new(1, 1))))
        );
    }

    #[test]
    fn observer_sees_every_step() {
        let mut sim = SimBuilder::new(small_config(2)).build().unwrap();
        let mut rec = Recorder::default();
        for _ in 0..3 {
            sim.step(&mut rec).unwrap();
        }
        assert_eq!(rec.steps, vec![Step(1), Step(2), Step(3)]);
        assert_eq!(rec.counts.last().copied(), Some(sim.counts()));
    }

    #[test]
    fn same_seed_same_history() {
        let mut a = SimBuilder::new(small_config(21)).build().unwrap();
        let mut b = SimBuilder::new(small_config(21)).build().unwrap();
        for _ in 0..40 {
            a.step(&mut NoopObserver).unwrap();
            b.step(&mut NoopObserver).unwrap();
            let cells_a: Vec<_> = a.snapshot().cells().collect();
            let cells_b: Vec<_> = b.snapshot().cells().collect();
            assert_eq!(cells_a, cells_b);
        }
    }
}

// ── Run ───────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod run_tests {
    use super::*;

    #[test]
    fn zero_steps_is_a_no_op() {
        let mut sim = SimBuilder::new(small_config(4)).build().unwrap();
        sim.step(&mut NoopObserver).unwrap();
        let before = sim.current_step();
        let mut rec = Recorder::default();

        assert_eq!(sim.run(0, &mut rec).unwrap(), 0);
        assert_eq!(sim.current_step(), before);
        assert!(rec.steps.is_empty());
        assert_eq!(rec.run_ends, vec![before]);
    }

    #[test]
    fn runs_requested_steps_while_viable() {
        let mut sim = SimBuilder::new(small_config(4)).build().unwrap();
        assert_eq!(sim.run(5, &mut AlwaysViable).unwrap(), 5);
        assert_eq!(sim.current_step(), Step(5));
    }

    #[test]
    fn stops_when_not_viable() {
        let mut sim = SimBuilder::new(small_config(4)).build().unwrap();
        assert_eq!(sim.run(50, &mut AlwaysExtinct).unwrap(), 0);
        assert_eq!(sim.current_step(), Step::ZERO);
    }

    #[test]
    fn single_species_is_not_viable_by_default() {
        let mut sim = empty_sim(4, 4);
        sim.spawn_prey(Location::new(0, 0), 0).unwrap();
        assert_eq!(sim.run(10, &mut NoopObserver).unwrap(), 0);
    }

    #[test]
    fn default_policy_stops_once_a_species_is_gone() {
        let mut sim = SimBuilder::new(small_config(9)).build().unwrap();
        let mut rec = Recorder::default();
        let taken = sim.run(2_000, &mut rec).unwrap();
        assert_eq!(rec.steps.len() as u64, taken);
        if taken < 2_000 {
            let last = rec.counts.last().copied().unwrap_or_else(|| sim.counts());
            assert!(!last.is_viable());
        }
    }
}

// ── Counts ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod counts_tests {
    use eco_core::Species;

    use crate::PopulationCounts;

    #[test]
    fn viability_needs_two_species() {
        assert!(PopulationCounts { prey: 3, predators: 1 }.is_viable());
        assert!(!PopulationCounts { prey: 3, predators: 0 }.is_viable());
        assert!(!PopulationCounts { prey: 0, predators: 2 }.is_viable());
        assert!(!PopulationCounts::default().is_viable());
    }

    #[test]
    fn get_by_species() {
        let counts = PopulationCounts { prey: 7, predators: 2 };
        assert_eq!(counts.get(Species::Prey), 7);
        assert_eq!(counts.get(Species::Predator), 2);
        assert_eq!(counts.species_alive(), 2);
        assert_eq!(counts.total(), 9);
    }
}
