mod cli;

use clap::Parser as _;
use tracing_subscriber::EnvFilter;

fn main() -> std::process::ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = cli::Cli::parse();

    match demo_calculator::app::run(&args.run_config()) {
        Ok(result) => {
            tracing::info!(result, "Calculation finished");
            std::process::ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(error = %err, "Calculation failed");
            eprintln!("Error: {err}");
            std::process::ExitCode::FAILURE
        }
    }
}
