//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `sdget` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Mapping failures to exit codes
//!
//! All core functionality is implemented in the library crate.

use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use sdget::initialization::init_logger_with;
use sdget::{run, Config};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = match Config::try_parse() {
        Ok(config) => config,
        Err(e) => {
            // --help and --version are reported as errors by clap but exit cleanly
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            process::exit(code);
        }
    };

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    let mut stdout = std::io::stdout().lock();
    if let Err(e) = run(&config, &mut stdout).await {
        log::debug!("Lookup of {:?} in {} failed: {e:?}", config.key, config.source);
        eprintln!("{}: {e}", e.stage());
        process::exit(e.exit_code());
    }
    Ok(())
}
