mod cli;
mod config;
mod platform;

use clap::Parser;
use reader_logging::{level_for_verbosity, reader_error, reader_warn};

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    let (config, config_issue) = config::resolve(cli.config.as_deref())?;

    platform::logging::initialize(config.log_destination, level_for_verbosity(cli.verbose));
    if let Some(err) = config_issue {
        reader_warn!("Using default configuration: {}", err);
    }

    if let Err(err) = platform::run(cli.command, &config) {
        reader_error!("{:#}", err);
        return Err(err);
    }
    Ok(())
}
