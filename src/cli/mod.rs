use anyhow::Result;

use crate::config::Config;

mod args;
mod exit_status;
mod report;
mod run;

pub use args::Arguments;
pub use exit_status::ExitStatus;
pub use run::{RunSummary, run};

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let config = Config::from_env();

    let summary = run(&args, &config)?;
    report::print_success(&summary);
    log::info!("Finished with success");

    Ok(ExitStatus::Success)
}
