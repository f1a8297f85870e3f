//! Command line arguments

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use vane_core::platform::Platform;

/// Compile device configurations into construction programs
#[derive(Debug, Parser)]
#[command(name = "vane")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Validate a configuration file and report every invalid field
    Validate {
        /// Configuration file (TOML)
        file: PathBuf,

        /// Validate for this platform instead of `device.platform`
        #[arg(short, long, value_parser = parse_platform)]
        platform: Option<Platform>,
    },
    /// Generate the device program for a configuration file
    Compile {
        /// Configuration file (TOML)
        file: PathBuf,

        /// Generate for this platform instead of `device.platform`
        #[arg(short, long, value_parser = parse_platform)]
        platform: Option<Platform>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Emit::Cpp)]
        emit: Emit,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List supported target platforms
    Platforms,
}

/// Output formats for `compile`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Emit {
    /// C++ statements for the `setup()` body
    Cpp,
    /// PlatformIO `lib_deps` block
    Libs,
    /// Instruction list as JSON
    Json,
    /// Instruction list as postcard bytes
    Postcard,
}

fn parse_platform(s: &str) -> Result<Platform, String> {
    s.parse()
        .map_err(|_| format!("unknown platform {s:?}"))
}
