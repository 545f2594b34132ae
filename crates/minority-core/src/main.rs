//! Minority Game Simulator
//!
//! Runs every configured scenario for many independent trials and prints how
//! often each agent ended up in the winning minority.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use minority_core::config::{Config, ConfigError, DEFAULT_SCENARIO_PATH};
use minority_core::output::{self, OutputError};
use minority_core::{run_simulation, GameError, Regime, ScenarioGroup};
use minority_events::SimulationReport;
use thiserror::Error;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Command line arguments for the simulation
#[derive(Parser, Debug)]
#[command(name = "minority_sim")]
#[command(about = "Repeated minority game with biased, hesitant and overconfident agents")]
struct Args {
    /// Scenario file (falls back to built-in scenarios if missing)
    #[arg(long, default_value = DEFAULT_SCENARIO_PATH)]
    config: PathBuf,

    /// Random seed for reproducibility (overrides the scenario file)
    #[arg(long)]
    seed: Option<u64>,

    /// Trials per scenario (overrides the scenario file)
    #[arg(long)]
    trials: Option<u64>,

    /// Run only the named scenario
    #[arg(long)]
    scenario: Option<String>,

    /// Force every scenario to use this regime (basic, info, reliable, unreliable)
    #[arg(long)]
    regime: Option<String>,

    /// Write a JSON report to this path
    #[arg(long)]
    json: Option<PathBuf>,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    print_config: bool,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Game(#[from] GameError),
    #[error(transparent)]
    Output(#[from] OutputError),
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: Args) -> Result<(), CliError> {
    // Reject a bad regime before doing any other work
    let regime_override = args
        .regime
        .as_deref()
        .map(str::parse::<Regime>)
        .transpose()
        .map_err(GameError::from)?;

    let mut config = Config::load_or_default(&args.config)?;
    if let Some(seed) = args.seed {
        config.simulation.seed = seed;
    }
    if let Some(trials) = args.trials {
        config.simulation.trials = trials;
    }
    if let Some(regime) = regime_override {
        for scenario in &mut config.scenarios {
            scenario.regime = regime;
        }
    }
    if let Some(name) = args.scenario.as_deref() {
        config.select(name)?;
    }
    config.validate()?;

    if args.print_config {
        print!("{}", config.to_toml()?);
        return Ok(());
    }

    let seed = config.simulation.seed;
    let trials = config.simulation.trials;
    info!(seed, trials, scenarios = config.scenarios.len(), "starting run");

    let mut report = SimulationReport::new(seed, trials);
    let mut current_group: Option<ScenarioGroup> = None;

    for (i, scenario) in config.scenarios.iter().enumerate() {
        if current_group != Some(scenario.group) {
            if current_group.is_some() {
                println!();
            }
            println!("{}", output::section_heading(scenario.group.heading()));
            current_group = Some(scenario.group);
        }

        info!(scenario = %scenario.name, regime = %scenario.regime, "running scenario");
        let roster = scenario.roster();
        let tally = run_simulation(&roster, scenario.regime, trials, seed);

        println!();
        println!("{}", output::render_scenario(i + 1, scenario, &tally));
        report.push(output::scenario_report(scenario, &tally));
    }

    if let Some(path) = args.json {
        output::write_report(&report, &path)?;
        info!("Wrote {}", path.display());
    }

    Ok(())
}
