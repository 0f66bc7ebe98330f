mod cli;
mod commands;

use cli::{Cli, Commands};
use commands::{add, delete, distance, edit, list, nearby, seed};
use tracing_subscriber::EnvFilter;

/// Log to stderr; `-v` raises the level, `RUST_LOG` overrides it.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

pub fn run() -> anyhow::Result<()> {
    use clap::Parser;

    let cli = Cli::parse();
    init_logging(cli.verbose);

    match &cli.command {
        Commands::Add(args) => add::run(&cli, args),
        Commands::Edit(args) => edit::run(&cli, args),
        Commands::Delete(args) => delete::run(&cli, args),
        Commands::List(args) => list::run(&cli, args),
        Commands::Nearby(args) => nearby::run(&cli, args),
        Commands::Distance(args) => distance::run(&cli, args),
        Commands::Seed(args) => seed::run(&cli, args),
    }
}

fn main() -> anyhow::Result<()> { run() }
