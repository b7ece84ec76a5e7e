//! List command implementation

use clap::Subcommand;

use tagloss_core::{get_profile, list_available_profiles};

use crate::error::CliResult;

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List embedded profiles
    Profiles,

    /// List the groups of a profile with their membership rules
    Groups {
        /// Profile to inspect
        #[arg(short, long, value_name = "NAME", default_value = "ectb")]
        profile: String,
    },

    /// List available output formats
    Formats,
}

impl ListCommands {
    /// Execute the list command
    pub fn execute(&self) -> CliResult<()> {
        match self {
            ListCommands::Profiles => {
                let mut names = list_available_profiles();
                names.sort_unstable();
                for name in names {
                    let config = get_profile(name)?;
                    if config.profile.description.is_empty() {
                        println!("{name}");
                    } else {
                        println!("{name} - {}", config.profile.description);
                    }
                }
            }
            ListCommands::Groups { profile } => {
                let config = get_profile(profile)?;
                for group in config.to_groups()? {
                    println!("{} ({})", group.name(), group.matcher());
                }
            }
            ListCommands::Formats => {
                println!("text - aligned identifier and sentence per line");
                println!("json - JSON array of glossary entries");
            }
        }

        Ok(())
    }
}
