//! CLI options.
//!
//! None of them affect the report itself, only logging and error reporting.

use clap::Parser;

#[derive(Parser)]
#[command(author, version, about)]
pub struct Opts {
    /// Sentry DSN
    #[arg(long, env = "SCORE_REPORT_SENTRY_DSN")]
    pub sentry_dsn: Option<String>,

    /// Performance monitoring sample rate for Sentry
    #[arg(long, default_value = "0.1", env = "SCORE_REPORT_TRACES_SAMPLE_RATE")]
    pub traces_sample_rate: f32,
}
