use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod commands;

use cli::{Cli, Commands};
use commands::{handle_check, handle_config, handle_exempt, handle_init};

use anderson::config::load_settings;

fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.quiet);

    let code = match dispatch(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{}", format!("> {:#}", err).red());
            1
        }
    };

    std::process::exit(code);
}

fn init_logging(verbose: bool, quiet: bool) {
    let filter = if verbose {
        "anderson=debug"
    } else if quiet {
        "error"
    } else {
        "warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .without_time(),
        )
        .init();
}

fn dispatch(cli: Cli) -> Result<i32> {
    let quiet = cli.quiet;

    match cli.command {
        Commands::Check {
            paths,
            format,
            output,
        } => {
            let settings = paths.apply_to(load_settings(cli.settings.as_deref())?);
            handle_check(&settings, format, output, quiet)
        }
        Commands::Init {
            preset,
            policy,
            force,
        } => handle_init(preset, policy, force, quiet),
        Commands::Exempt { paths, dry_run } => {
            let settings = paths.apply_to(load_settings(cli.settings.as_deref())?);
            handle_exempt(&settings, dry_run, quiet)
        }
        Commands::Config {
            paths,
            show,
            validate,
        } => {
            let settings = paths.apply_to(load_settings(cli.settings.as_deref())?);
            handle_config(&settings, show, validate, quiet)
        }
    }
}
