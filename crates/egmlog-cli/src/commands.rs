use super::args::{Cli, Commands, ConfigCommand};
use super::handlers;
use crate::config::Config;
use crate::logging::init_tracing;
use anyhow::Result;

pub fn run(cli: Cli) -> Result<()> {
    init_tracing(cli.log_level);

    match cli.command {
        Commands::Parse {
            folder,
            timezone,
            output_dir,
            format,
            verbose,
        } => {
            let config =
                Config::load(cli.config.as_deref())?.with_overrides(timezone, output_dir);
            handlers::parse::handle(&folder, &config, format, verbose)
        }

        Commands::Config { command } => match command {
            ConfigCommand::Show => handlers::config::show(cli.config.as_deref()),
            ConfigCommand::Init { force } => handlers::config::init(cli.config.as_deref(), force),
        },
    }
}
