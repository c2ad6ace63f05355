/*!
 * CPU Scheduling Simulator - Command Line Entry Point
 *
 * Reads a JSON simulation request from the path given as the first argument
 * (or stdin when absent) and prints the report as JSON on stdout.
 *
 * Request shape:
 *   {"policy": "round_robin", "time_quantum": 2,
 *    "processes": {"P1": {"arrival": 0, "burst": 5}, "P2": {"arrival": 1, "burst": 4}}}
 */

use std::io::Read;

use cpu_sched_sim::{init_tracing, SimulationConfig, SimulationRequest};
use miette::{IntoDiagnostic, WrapErr};
use tracing::info;

fn main() -> miette::Result<()> {
    init_tracing();

    let config = SimulationConfig::from_env();
    info!(
        max_horizon = config.max_horizon,
        max_processes = config.max_processes,
        "Simulator configured"
    );

    let input = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(&path)
            .into_diagnostic()
            .wrap_err_with(|| format!("Failed to read request file {}", path))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .into_diagnostic()
                .wrap_err("Failed to read request from stdin")?;
            buf
        }
    };

    let request = SimulationRequest::from_json(&input)?;
    let report = request.run(&config)?;

    let output = serde_json::to_string_pretty(&report).into_diagnostic()?;
    println!("{}", output);

    Ok(())
}
