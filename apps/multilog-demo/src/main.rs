//! multilog demo
//!
//! Options not given on the command line come from `MULTILOG_*`
//! environment variables, which may also be set in a `.env` file.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use multilog::{init_tracing, Logger, MultiLogger, Options};
use std::sync::Arc;
use tracing::{info, warn};

/// Shows multilog console and file output
#[derive(Parser, Debug)]
#[command(name = "multilog-demo")]
#[command(version)]
struct Cli {
    /// Raise console verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Suppress notes
    #[arg(short, long)]
    quiet: bool,

    /// Colorize console output even when it is not a terminal
    #[arg(long)]
    force_colors: bool,

    /// Also write records to this file (`~` expanded)
    #[arg(long, value_name = "PATH")]
    log_file: Option<String>,

    /// Minimum level written to the log file
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,
}

impl Cli {
    /// Layer command line values over `options`
    fn apply(self, mut options: Options) -> Options {
        options.verbose = options.verbose.saturating_add(self.verbose);
        options.quiet |= self.quiet;
        options.force_colors |= self.force_colors;
        if self.log_file.is_some() {
            options.log_file = self.log_file;
        }
        if self.log_level.is_some() {
            options.log_level = self.log_level;
        }
        options
    }
}

fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let options = cli.apply(Options::from_env());
    let logger = Arc::new(MultiLogger::new(options));
    init_tracing(logger.clone()).context("Failed to install tracing subscriber")?;

    logger.note("multilog demo");
    logger.trace("trace message");
    logger.debugf(format_args!("debug #{}", 2));
    logger.infoln(&[&"info #", &3]);
    logger.warn("warn message");
    logger
        .with_field("size", "10MB")
        .with_field("period", "2m0s")
        .error("with fields");

    info!(source = "tracing", "routed through the logger");
    warn!(path = "/tmp/some file", "quoted field value");

    if let Some(file) = logger.file() {
        logger.notef(format_args!("file sink writes {} and above", file.level()));
    }

    Ok(())
}
