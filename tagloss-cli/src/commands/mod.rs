//! CLI command implementations

use clap::Subcommand;

pub mod build;
pub mod check;
pub mod list;
pub mod record;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Build a glossary from report XML files
    Build(build::BuildArgs),

    /// Extract the fixed patient record from one report
    Record(record::RecordArgs),

    /// Validate a profile file
    Check(check::CheckArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: list::ListCommands,
    },
}

/// Initialize logging based on verbosity level
pub(crate) fn init_logging(quiet: bool, verbose: u8) {
    if quiet {
        return;
    }

    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .try_init()
        .ok();
}
