mod commands;

pub use commands::*;

use crate::types::LogLevel;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "egmlog")]
#[command(about = "Reconstruct game sessions from EGM terminal logs", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    /// Config file (defaults to ~/.egmlog/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}
