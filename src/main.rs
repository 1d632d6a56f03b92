//! highorder CLI
//!
//! Walks the fixed sequence `[1, 2, 3, 4]` with an inline closure that ignores
//! elements outside `2..=3` and prints a blank line for the rest. Takes no
//! arguments beyond `--help` and `--version`.
//!
//! ## Configuration
//!
//! An optional `config.yaml` in the current directory sets the logging level
//! and destination:
//!
//! ```yaml
//! logging:
//!   level: debug
//!   output: stderr
//! ```
//!
//! ## Environment Variables
//!
//! - `RUST_LOG`: Control logging verbosity (e.g., `info`, `debug`, `trace`)

use anyhow::{Context, Result};
use clap::Parser;
use highorder::{init_logging, Config, Demo};
use std::io::Write;
use tracing::{info, warn};

#[derive(Parser)]
#[command(author, version, about = "Walk a fixed integer sequence with a closure", long_about = None)]
struct Cli {}

fn main() -> Result<()> {
    let _cli = Cli::parse();

    let (config, config_error) = match Config::load() {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };
    init_logging(&config.logging);
    if let Some(e) = config_error {
        warn!("Ignoring config.yaml: {:#}", e);
    }

    info!("highorder starting");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let demo = Demo::new();
    let written = demo.run(&mut out)?;
    out.flush().context("Failed to flush stdout")?;

    info!("Walked {} elements, {} selected", demo.sequence().len(), written);
    Ok(())
}
