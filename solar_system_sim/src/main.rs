use solar_system_sim::app;
use solar_system_sim::{ScenarioConfig, SolarSystem, StepOrder};

use anyhow::{Result, anyhow};
use clap::Parser;
use log::info;

use std::path::PathBuf;

/// Sun and inner planets under Newtonian gravity.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// YAML file with initial conditions (defaults to the built-in inner planets)
    #[arg(short, long)]
    scenario: Option<PathBuf>,

    /// Overrides the step order from the scenario
    #[arg(long, value_enum)]
    step_order: Option<StepOrder>,
}

fn load_scenario(args: &Args) -> Result<ScenarioConfig> {
    match &args.scenario {
        Some(path) => ScenarioConfig::load(path),
        None => {
            info!("using built-in inner planets scenario");
            Ok(ScenarioConfig::inner_planets())
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let scenario = load_scenario(&args)?;
    let mut system = SolarSystem::from_scenario(&scenario);
    if let Some(step_order) = args.step_order {
        system.set_step_order(step_order);
    }

    app::run(system).map_err(|e| anyhow!("viewer failed: {e}"))?;
    Ok(())
}
