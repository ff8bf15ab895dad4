use std::process::ExitCode;

use clap::Parser;
use tracing::debug;

use filesize::{
    cli::Args,
    config::Config,
    logging::init_tracing,
    output::{errors::print_errors, table::print_table},
    run::run,
};

fn main() -> anyhow::Result<ExitCode> {
    let config: Config = Args::parse().try_into()?;
    init_tracing(config.verbose)?;

    debug!(
        operation = ?config.operation,
        base = %config.options.base,
        precision = config.options.precision,
        mode = %config.options.mode,
        values = config.values.len(),
        "starting"
    );

    let report = run(&config);
    print_table(&report.rows, config.align);

    if report.errors.is_empty() {
        return Ok(ExitCode::SUCCESS);
    }

    if !config.no_errors {
        print_errors(&report.errors);
    }

    Ok(ExitCode::FAILURE)
}
