use crate::types::OutputFormat;
use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    /// Parse every log file in a folder into raw and summary spreadsheets
    Parse {
        /// Folder containing terminal log files
        folder: PathBuf,

        /// Timezone label appended to displayed times
        #[arg(long)]
        timezone: Option<String>,

        /// Write outputs here instead of next to the inputs
        #[arg(long)]
        output_dir: Option<PathBuf>,

        #[arg(long, default_value = "csv")]
        format: OutputFormat,

        /// List rapid spins for each file
        #[arg(long)]
        verbose: bool,
    },

    /// Show or create the configuration file
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration
    Show,

    /// Write a configuration file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
