use std::process::ExitCode;

use clap::Parser;
use color_eyre::Result;
use cppstd::{cli::input::CliArgs, utils::logger::config_logger, worker::run_cppstd};
use env_logger::Target;

/// The entry point for the binary generated
/// for the program
fn main() -> Result<ExitCode> {
    color_eyre::install()?;
    let cli_args = CliArgs::parse();
    config_logger(cli_args.verbose, Target::Stderr)?;
    log::debug!("Launching a new cppstd check");

    let report = run_cppstd(&cli_args)?;
    println!("{}", report.render(cli_args.format));

    Ok(if report.valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
