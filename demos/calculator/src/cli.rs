use std::time::Duration;

use demo_calculator::app::RunConfig;

#[derive(Debug, clap::Parser)]
#[command(about = "Runs the calculator pipeline once")]
pub struct Cli {
    /// Value added to the aggregated data before the transform
    #[arg(long, default_value_t = -4.0, allow_negative_numbers = true)]
    pub offset: f64,

    /// Seconds to pause before running the algorithm
    #[arg(long, default_value_t = 0)]
    pub pause_secs: u64,

    /// Do not install the result callback
    #[arg(long)]
    pub no_callback: bool,
}

impl Cli {
    pub fn run_config(&self) -> RunConfig {
        RunConfig {
            offset: self.offset,
            pause: Duration::from_secs(self.pause_secs),
            install_callback: !self.no_callback,
        }
    }
}
