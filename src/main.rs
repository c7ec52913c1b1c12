mod average;
mod logging;
mod opts;
mod prelude;
mod report;
mod sample;

use std::io::Write;

use clap::Parser;
use tracing::{error, info};

use crate::opts::Opts;
use crate::prelude::*;
use crate::sample::Sample;

fn main() -> Result {
    let opts = Opts::parse();
    let _sentry_guard = logging::init(opts.sentry_dsn, opts.traces_sample_rate)?;
    info!(version = env!("CARGO_PKG_VERSION"), "starting…");

    run().map_err(|error| {
        error!("failed to print the report: {:#}", error);
        error
    })
}

fn run() -> Result {
    let stdout = std::io::stdout();
    let mut output = stdout.lock();
    report::render(&Sample::default(), &mut output)?;
    output.flush().context("failed to flush stdout")?;
    Ok(())
}
