use svsim::{build_scenario, AnyScenario, EnergyDrift, Scenario, ScenarioConfig};
use svsim::{bench_gravity, bench_verlet_curve, total_momentum, write_csv};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(version, about = "Störmer–Verlet N-body integrator")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Integrate a scenario file
    Run {
        /// Scenario YAML: a path, or a file name under `scenarios/`
        #[arg(default_value = "near_radial_pair.yaml")]
        file_name: String,

        /// Write the trajectory as CSV
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Export every n-th state
        #[arg(short, long, default_value_t = 1)]
        stride: usize,
    },
    /// Time the gradient and the integrator over a range of N
    Bench,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let direct = PathBuf::from(file_name);
    let config_path = if direct.exists() {
        direct
    } else {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name)
    };

    let file = File::open(&config_path)
        .with_context(|| format!("failed to open scenario {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)
        .with_context(|| format!("failed to parse scenario {}", config_path.display()))?;

    Ok(scenario_cfg)
}

fn run<const D: usize>(scenario: &Scenario<D>, output: Option<&Path>, stride: usize) -> Result<()> {
    let params = &scenario.parameters;
    info!(
        bodies = scenario.system.len(),
        dim = D,
        dt = params.dt,
        t_max = params.t_max,
        G = params.g,
        eps = params.eps,
        "running scenario"
    );

    let trajectory = scenario.run()?;
    let masses = scenario.masses();

    if let Some(t) = trajectory.first_non_finite() {
        warn!(index = t, "trajectory diverged; check for collisions with softening disabled");
    }

    let drift = EnergyDrift::measure(&trajectory, &masses, params.g, params.eps);
    let p0 = total_momentum(trajectory.momenta(0));
    let p1 = total_momentum(trajectory.momenta(trajectory.len() - 1));
    info!(
        tnum = trajectory.len(),
        energy = drift.initial,
        max_rel_drift = drift.max_rel,
        final_rel_drift = drift.final_rel,
        momentum_change = (p1 - p0).norm(),
        "integration complete"
    );

    if let Some(path) = output {
        let file = File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
        write_csv(BufWriter::new(file), &trajectory, &scenario.labels, stride)?;
        info!(path = %path.display(), "trajectory written");
    }

    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    match args.command {
        Command::Run { file_name, output, stride } => {
            let scenario_cfg = load_scenario_from_yaml(&file_name)?;
            match build_scenario(scenario_cfg)? {
                AnyScenario::Planar(scenario) => run(&scenario, output.as_deref(), stride)?,
                AnyScenario::Spatial(scenario) => run(&scenario, output.as_deref(), stride)?,
            }
        }
        Command::Bench => {
            bench_gravity();
            bench_verlet_curve();
        }
    }

    Ok(())
}
