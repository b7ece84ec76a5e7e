//! Check command implementation

use clap::Args;
use std::path::PathBuf;

use tagloss_core::ProfileConfig;

use crate::error::CliResult;
use crate::input::FileReader;

/// Arguments for the check command
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Path to profile file to validate
    #[arg(short = 'p', long, value_name = "FILE", required = true)]
    pub profile_file: PathBuf,
}

impl CheckArgs {
    /// Execute the check command
    pub fn execute(&self) -> CliResult<()> {
        println!("Validating profile: {}", self.profile_file.display());

        let content = FileReader::read_text(&self.profile_file)?;

        match ProfileConfig::from_toml_str(&content) {
            Ok(config) => {
                println!("✓ Profile is valid!");
                println!("  Name: {}", config.profile.name);
                if !config.profile.description.is_empty() {
                    println!("  Description: {}", config.profile.description);
                }
                println!("  Groups: {}", config.groups.len());
                Ok(())
            }
            Err(e) => {
                println!("✗ Profile is invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {}", e))
            }
        }
    }
}
