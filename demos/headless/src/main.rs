//! headless — runs the predator-prey simulator without a view.
//!
//! Seeds a field from the default configuration (or a JSON file given as the
//! first argument), runs the long simulation and writes the initial population
//! plus one row per step to `output/headless/population.csv`.
//!
//! ```text
//! RUST_LOG=eco_sim=debug cargo run --release -p headless -- config.json
//! ```

use std::fs;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;

use eco_core::SimConfig;
use eco_output::{CsvWriter, StatsObserver};
use eco_sim::{LONG_RUN_STEPS, SimBuilder};

const OUTPUT_DIR: &str = "output/headless";

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn load_config(path: Option<&str>) -> Result<SimConfig> {
    let Some(path) = path else {
        return Ok(SimConfig::default());
    };
    let text = fs::read_to_string(path).with_context(|| format!("reading {path}"))?;
    let config = serde_json::from_str(&text).with_context(|| format!("parsing {path}"))?;
    Ok(config)
}

fn main() -> Result<()> {
    init_tracing();

    let arg = std::env::args().nth(1);
    let config = load_config(arg.as_deref())?;

    println!("=== headless — predator-prey simulator ===");
    println!(
        "Field: {} x {}  |  Seed: {}  |  Steps: up to {LONG_RUN_STEPS}",
        config.depth, config.width, config.seed
    );
    println!();

    // 1. Build and seed the simulator.
    let mut sim = SimBuilder::new(config).build()?;

    // 2. Set up output.
    fs::create_dir_all(OUTPUT_DIR)?;
    let writer = CsvWriter::new(Path::new(OUTPUT_DIR))?;
    let mut obs = StatsObserver::new(writer);
    sim.announce(&mut obs);

    // 3. Run.
    let t0 = Instant::now();
    let taken = sim.run_long(&mut obs)?;
    let elapsed = t0.elapsed();
    info!(steps = taken, secs = elapsed.as_secs_f64(), "headless run complete");

    if let Some(e) = obs.take_error() {
        eprintln!("output error: {e}");
    }

    // 4. Summary.
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!("  steps taken        : {taken}");
    if taken < LONG_RUN_STEPS {
        println!("  stopped early      : population no longer viable");
    }
    println!("  final population   : {}", obs.stats().population_details());
    println!("  population.csv     : {} rows (step 0 + {taken})", taken + 1);

    Ok(())
}
