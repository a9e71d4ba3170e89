//! The `Simulator` struct and its step loop.

use tracing::{debug, info};

use eco_agent::{Predator, PredatorPopulation, Prey, PreyPopulation};
use eco_behavior::{Behavior, Habitat, PredatorBehavior, PreyBehavior};
use eco_core::{Location, PredatorId, PreyId, SimConfig, Step};
use eco_field::Field;

use crate::{PopulationCounts, SimObserver, SimResult, Snapshot};

/// Length of [`Simulator::run_long`].
pub const LONG_RUN_STEPS: u64 = 4_000;

// ── Simulator ─────────────────────────────────────────────────────────────────

/// The main simulation runner.
///
/// `Simulator<P, Q>` owns the habitat (field, both populations, RNG) and the
/// step counter, and drives one synchronous generation per
/// [`step`](Self::step):
///
/// 1. **Prey sweep**: every enrolled prey acts once, in acting order.
/// 2. **Predator sweep**: every enrolled predator acts once.
/// 3. **Merge**: newborns from both sweeps are enrolled at the end of their
///    population, so they first act next step.
/// 4. **Purge**: dead agents (old age, starvation, overcrowding, eaten) are
///    dropped from the populations.
/// 5. **Notify**: the observer receives the final grid snapshot.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Simulator<P = PreyBehavior, Q = PredatorBehavior> {
    /// Configuration the simulator was built from.
    pub config: SimConfig,

    pub(crate) step: Step,

    pub(crate) habitat: Habitat,

    pub(crate) prey_behavior: P,

    pub(crate) predator_behavior: Q,
}

impl<P, Q> Simulator<P, Q>
where
    P: Behavior<Id = PreyId>,
    Q: Behavior<Id = PredatorId>,
{
    // ── Accessors ─────────────────────────────────────────────────────────

    /// Number of steps taken since the last reinitialisation.
    #[inline]
    pub fn current_step(&self) -> Step {
        self.step
    }

    #[inline]
    pub fn field(&self) -> &Field {
        &self.habitat.field
    }

    #[inline]
    pub fn prey(&self) -> &PreyPopulation {
        &self.habitat.prey
    }

    #[inline]
    pub fn predators(&self) -> &PredatorPopulation {
        &self.habitat.predators
    }

    /// Read-only access to the whole habitat.
    #[inline]
    pub fn habitat(&self) -> &Habitat {
        &self.habitat
    }

    /// Current grid state.
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot::new(self.step, &self.habitat.field)
    }

    /// Current animal counts, tallied from the field.
    pub fn counts(&self) -> PopulationCounts {
        self.snapshot().counts()
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Reset the step counter, empty the field, and seed a fresh population.
    ///
    /// The RNG is not reseeded, so consecutive reinitialisations produce
    /// different populations.
    pub fn reinitialize<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        self.step = Step::ZERO;
        self.populate()?;
        self.announce(observer);
        Ok(())
    }

    /// Hand the current grid to `observer.on_reset` without changing it.
    ///
    /// A freshly built simulator is already seeded, so call this once before
    /// the first [`run`](Self::run) to give the observer the step-0 state.
    pub fn announce<O: SimObserver>(&self, observer: &mut O) {
        observer.on_reset(&self.snapshot());
    }

    /// Advance the whole population by one generation.
    pub fn step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        self.step = self.step.next();

        let prey_order = self.habitat.prey.live().to_vec();
        let prey_births = sweep(&self.prey_behavior, prey_order, &mut self.habitat)?;

        let predator_order = self.habitat.predators.live().to_vec();
        let predator_births = sweep(&self.predator_behavior, predator_order, &mut self.habitat)?;

        // Newborns eaten during the predator sweep are enrolled here and
        // dropped by the purge right after.
        self.habitat.prey.enroll(prey_births);
        self.habitat.predators.enroll(predator_births);
        self.habitat.prey.retain_alive();
        self.habitat.predators.retain_alive();

        let snapshot = self.snapshot();
        let counts = snapshot.counts();
        debug!(
            step = self.step.0,
            prey = counts.prey,
            predators = counts.predators,
            "step complete"
        );
        observer.on_step(&snapshot);
        Ok(())
    }

    /// Step up to `max_steps` times, stopping early as soon as the observer
    /// reports the population as no longer viable.
    ///
    /// Viability is checked before every step.  Returns the number of steps
    /// actually taken.
    pub fn run<O: SimObserver>(&mut self, max_steps: u64, observer: &mut O) -> SimResult<u64> {
        let mut taken = 0;
        while taken < max_steps && observer.is_viable(&self.counts()) {
            self.step(observer)?;
            taken += 1;
        }

        let counts = self.counts();
        info!(
            steps = taken,
            final_step = self.step.0,
            prey = counts.prey,
            predators = counts.predators,
            stopped_early = taken < max_steps,
            "run finished"
        );
        observer.on_run_end(self.step);
        Ok(taken)
    }

    /// Run for a reasonably long period ([`LONG_RUN_STEPS`] steps).
    pub fn run_long<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<u64> {
        self.run(LONG_RUN_STEPS, observer)
    }

    // ── Scenario construction ─────────────────────────────────────────────

    /// Place a prey of the given `age` at `location` and enroll it.
    pub fn spawn_prey(&mut self, location: Location, age: u32) -> SimResult<PreyId> {
        let id = self.habitat.spawn_prey(location, Prey::with_age(age))?;
        self.habitat.prey.enroll([id]);
        Ok(id)
    }

    /// Place a predator with the given `age` and `food_level` at `location`
    /// and enroll it.
    pub fn spawn_predator(&mut self, location: Location, age: u32, food_level: u32) -> SimResult<PredatorId> {
        let id = self
            .habitat
            .spawn_predator(location, Predator::with_state(age, food_level))?;
        self.habitat.predators.enroll([id]);
        Ok(id)
    }

    // ── Seeding ───────────────────────────────────────────────────────────

    /// Clear the habitat and fill it cell by cell.
    ///
    /// Each cell first draws against the predator probability; only if that
    /// fails does it draw again against the prey probability.  The two draws
    /// are independent, so the effective prey share is
    /// `(1 - p_predator) * p_prey`.
    pub(crate) fn populate(&mut self) -> SimResult<()> {
        self.habitat.clear();

        let depth = self.habitat.field.depth();
        let width = self.habitat.field.width();
        for row in 0..depth {
            for col in 0..width {
                let location = Location::new(row, col);
                if self.habitat.rng.chance(self.config.predator_creation_probability) {
                    let predator = Predator::with_random_age(&self.config.predator, &mut self.habitat.rng);
                    let id = self.habitat.spawn_predator(location, predator)?;
                    self.habitat.predators.enroll([id]);
                } else if self.habitat.rng.chance(self.config.prey_creation_probability) {
                    let prey = Prey::with_random_age(&self.config.prey, &mut self.habitat.rng);
                    let id = self.habitat.spawn_prey(location, prey)?;
                    self.habitat.prey.enroll([id]);
                }
            }
        }

        info!(
            depth,
            width,
            prey = self.habitat.prey.len(),
            predators = self.habitat.predators.len(),
            "field populated"
        );
        Ok(())
    }
}

/// Let every agent in `order` act once, collecting newborn handles.
///
/// `order` is a copy of the acting order taken before the sweep: agents dying
/// mid-sweep (or newborns being stored) never reorder or skip the rest.
fn sweep<B: Behavior>(behavior: &B, order: Vec<B::Id>, habitat: &mut Habitat) -> SimResult<Vec<B::Id>> {
    let mut births = Vec::new();
    for id in order {
        behavior.act(id, habitat, &mut births)?;
    }
    Ok(births)
}
