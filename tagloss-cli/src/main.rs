//! Command-line entry point for tagloss

use clap::Parser;

use tagloss_cli::commands::Commands;

/// Glossary synthesis for run-together report tag names
#[derive(Debug, Parser)]
#[command(name = "tagloss", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Build(args) => args.execute(),
        Commands::Record(args) => args.execute(),
        Commands::Check(args) => args.execute(),
        Commands::List { subcommand } => subcommand.execute(),
    };

    if let Err(error) = result {
        eprintln!("Error: {error:#}");
        std::process::exit(1);
    }
}
