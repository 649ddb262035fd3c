use astrosim::logger::Logger;
use astrosim::{bench_gravity, bench_verlet};
use astrosim::{ComputeProgress, Scenario, ScenarioConfig};

use anyhow::{bail, Context, Result};
use clap::Parser;

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file to load
    #[arg(default_value = "scenarios/inner_planets.yaml")]
    scenario: PathBuf,

    /// Write the computed final state back out, in base units
    #[arg(short, long)]
    save: Option<PathBuf>,

    /// Run the engine benchmarks instead of a scenario
    #[arg(long)]
    bench: bool,
}

fn load_scenario(path: &Path) -> Result<ScenarioConfig> {
    let file =
        File::open(path).with_context(|| format!("opening scenario {}", path.display()))?;
    let reader = BufReader::new(file);
    let cfg: ScenarioConfig = serde_yaml::from_reader(reader)
        .with_context(|| format!("parsing scenario {}", path.display()))?;
    Ok(cfg)
}

fn main() -> Result<()> {
    Logger::init();
    let args = Args::parse();

    if args.bench {
        bench_gravity();
        bench_verlet();
        return Ok(());
    }

    let cfg = load_scenario(&args.scenario)?;
    let mut scenario = Scenario::build(cfg)?;

    let total = scenario.engine.total_steps();
    if total == 0 {
        bail!("scenario covers zero steps; check timestep and total time");
    }
    log::info!(
        "computing {} steps of {} {}",
        total,
        scenario.engine.timestep.value,
        scenario.engine.timestep.unit_label()
    );

    // Same cooperative loop a GUI host runs once per frame, just without
    // frames in between.
    scenario.begin_compute();
    loop {
        match scenario.compute_step()? {
            ComputeProgress::Done => break,
            ComputeProgress::Running { completed, total } => {
                if completed % 1000 == 0 {
                    log::info!("{}/{}", completed, total);
                }
            }
        }
    }

    log::info!(
        "done: {} snapshots over {:.4} years",
        scenario.timeline.len(),
        scenario.current_time()
    );
    for body in &scenario.current().bodies {
        let p = body.position.base_value();
        log::info!(
            "{:12} at ({:14.4}, {:14.4}, {:14.4}) Gm",
            body.name,
            p.x,
            p.y,
            p.z
        );
    }

    if let Some(path) = args.save {
        let yaml = serde_yaml::to_string(&scenario.to_config())?;
        std::fs::write(&path, yaml)
            .with_context(|| format!("writing state to {}", path.display()))?;
        log::info!("saved state to {}", path.display());
    }

    Ok(())
}
