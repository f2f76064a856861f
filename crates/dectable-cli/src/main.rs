//! dectable CLI - edit clinical decision tables stored as DMN.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use dectable::TableStore;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let store = TableStore::new(cli.root.clone());

    let result = match cli.command {
        Commands::New {
            name,
            description,
            id,
        } => commands::new::run(&store, name, description, id),

        Commands::Show { target, json } => commands::show::run(&store, &target, json),

        Commands::Validate { target, json } => commands::validate::run(&store, &target, json),

        Commands::Edit {
            target,
            ops,
            no_validate,
        } => commands::edit::run(&store, &target, ops, no_validate),

        Commands::Fmt { target, check } => commands::fmt::run(&store, &target, check),

        Commands::List { json } => commands::list::run(&store, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr; `RUST_LOG` overrides the level chosen by `--verbose`.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
