//! vane: device configuration compiler
//!
//! Loads a TOML device configuration, validates it and emits the generated
//! construction program in one of several formats.

mod args;
mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::args::{Cli, Command};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Validate { file, platform } => commands::validate(&file, platform)?,
        Command::Compile {
            file,
            platform,
            emit,
            output,
        } => commands::compile(&file, platform, emit, output.as_deref())?,
        Command::Platforms => commands::platforms(),
    }

    Ok(())
}

/// Log to stderr so generated output on stdout stays clean
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
