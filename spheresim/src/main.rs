use spheresim::{Scenario, ScenarioConfig};
use spheresim::{bench_step, bench_throughput};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file name under `scenarios/`
    #[arg(short, default_value = "drop.yaml")]
    file_name: String,

    /// Override the scenario's step count
    #[arg(long)]
    steps: Option<u64>,

    /// Run the step benchmark instead of a scenario
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    ScenarioConfig::from_yaml_file(&config_path)
        .with_context(|| format!("failed to load scenario {}", config_path.display()))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    if args.bench {
        bench_step();
        bench_throughput(100_000, 600);
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let Scenario { run, mut system, .. } = Scenario::build_scenario(scenario_cfg)?;

    let steps = args.steps.unwrap_or(run.steps);
    info!(particles = system.len(), dt = run.dt, steps, "running scenario");

    for i in 1..=steps {
        let touched = system.step(run.dt);
        if run.report_every > 0 && i % run.report_every == 0 {
            info!(
                step = i,
                t = i as f64 * run.dt,
                kinetic_energy = system.kinetic_energy(),
                touched,
                "progress"
            );
        }
    }

    for (i, s) in system.snapshots().iter().enumerate() {
        info!(
            particle = i,
            radius = s.radius,
            x = s.position.x,
            y = s.position.y,
            z = s.position.z,
            rgb = ?s.color.to_unit(),
            "final state"
        );
    }

    Ok(())
}
