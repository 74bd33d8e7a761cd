//! Headless simulation runner.
//!
//! Runs the firm simulator with a fixed configuration and prints one JSON
//! summary line per period, suitable for piping into analysis tooling.
//!
//! ```text
//! firm-simulator [--firms N] [--periods N] [--seed N]
//! ```

use firm_simulator_core_rs::{PeriodResult, Simulation, SimulationConfig};
use std::process::ExitCode;

#[derive(Debug)]
struct CliArgs {
    num_firms: usize,
    num_periods: usize,
    rng_seed: u64,
}

fn print_usage() {
    eprintln!("Usage: firm-simulator [--firms N] [--periods N] [--seed N]");
}

fn parse_args(args: &[String]) -> Result<CliArgs, String> {
    let mut parsed = CliArgs {
        num_firms: 10,
        num_periods: 10,
        rng_seed: 1,
    };

    let mut iter = args.iter();
    while let Some(flag) = iter.next() {
        let value = iter
            .next()
            .ok_or_else(|| format!("missing value for {}", flag))?;
        match flag.as_str() {
            "--firms" => {
                parsed.num_firms = value
                    .parse()
                    .map_err(|_| format!("invalid --firms value: {}", value))?;
            }
            "--periods" => {
                parsed.num_periods = value
                    .parse()
                    .map_err(|_| format!("invalid --periods value: {}", value))?;
            }
            "--seed" => {
                parsed.rng_seed = value
                    .parse()
                    .map_err(|_| format!("invalid --seed value: {}", value))?;
            }
            other => return Err(format!("unknown flag: {}", other)),
        }
    }

    Ok(parsed)
}

fn period_summary(result: &PeriodResult) -> serde_json::Value {
    serde_json::json!({
        "period": result.period,
        "num_firms": result.firm_results.len(),
        "num_feasible": result.num_feasible,
        "total_production": result.total_production,
        "total_investment": result.total_investment,
        "total_credit_demand": result.total_credit_demand,
    })
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let cli_args = match parse_args(&args) {
        Ok(parsed) => parsed,
        Err(message) => {
            eprintln!("error: {}", message);
            print_usage();
            return ExitCode::from(2);
        }
    };

    let config = SimulationConfig {
        num_firms: cli_args.num_firms,
        num_periods: cli_args.num_periods,
        rng_seed: cli_args.rng_seed,
        ..SimulationConfig::default()
    };

    let mut simulation = match Simulation::new(config) {
        Ok(simulation) => simulation,
        Err(error) => {
            eprintln!("error: {}", error);
            return ExitCode::FAILURE;
        }
    };

    let results = match simulation.run() {
        Ok(results) => results,
        Err(error) => {
            eprintln!("error: {}", error);
            return ExitCode::FAILURE;
        }
    };

    for result in &results {
        println!("{}", period_summary(result));
    }

    ExitCode::SUCCESS
}
