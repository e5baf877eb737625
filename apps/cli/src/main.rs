#![allow(clippy::print_stdout)]

mod args;
mod commands;

use crate::args::{Cli, Command};
use bts_logger::{LevelFilter, Logger};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _logger = init_logger(&cli)?;

    match cli.command {
        Command::Resolve { bindings, env, json } => commands::resolve(&bindings, env, json)?,
        Command::Check { bindings } => commands::check(&bindings)?,
        Command::Zones { adapter } => commands::zones(&adapter)?,
        Command::Host { adapter, env, zone, explicit, artifact } => {
            commands::host(&adapter, env, zone, explicit, &artifact)?;
        },
    }

    Ok(())
}

fn init_logger(cli: &Cli) -> anyhow::Result<Logger> {
    let level = if cli.verbose { LevelFilter::DEBUG } else { LevelFilter::WARN };
    let builder = Logger::builder(env!("CARGO_PKG_NAME")).console(true).level(level);

    let logger = match &cli.log_dir {
        Some(dir) => {
            let builder = builder.file(dir);
            #[cfg(feature = "json-logs")]
            let builder = builder.json();
            builder.init()?
        },
        None => builder.init()?,
    };
    Ok(logger)
}
