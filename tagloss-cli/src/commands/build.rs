//! Build command implementation

use anyhow::Context;
use clap::Args;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use tagloss_core::{get_profile, GlossaryBuilder, ProfileConfig};

use crate::error::CliResult;
use crate::input::{extract_tag_names, resolve_patterns, FileReader};
use crate::output::{GlossaryFormatter, JsonFormatter, TextFormatter};

/// Arguments for the build command
#[derive(Debug, Args)]
pub struct BuildArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Embedded profile to gloss with
    #[arg(short, long, value_name = "NAME", default_value = "ectb")]
    pub profile: String,

    /// Profile file to gloss with instead of an embedded profile
    #[arg(long, value_name = "FILE", conflicts_with = "profile")]
    pub profile_file: Option<PathBuf>,

    /// Restrict output to the named groups (repeatable)
    #[arg(short, long, value_name = "NAME")]
    pub group: Vec<String>,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// Aligned identifier and sentence per line
    Text,
    /// JSON array of glossary entries
    Json,
}

impl BuildArgs {
    /// Execute the build command
    pub fn execute(&self) -> CliResult<()> {
        super::init_logging(self.quiet, self.verbose);

        let profile = self.load_profile()?;
        log::info!("Building glossary with profile '{}'", profile.profile.name);

        let builder = self.make_builder(&profile)?;

        let files = resolve_patterns(&self.input)?;
        log::debug!("Resolved {} input file(s)", files.len());

        let mut tags = Vec::new();
        for path in &files {
            let content = FileReader::read_text(path)?;
            let mut file_tags = extract_tag_names(&content)
                .with_context(|| format!("Failed to parse {}", path.display()))?;
            log::debug!("{}: {} tags", path.display(), file_tags.len());
            tags.append(&mut file_tags);
        }

        let entries = builder.build(&tags);
        log::info!("Glossed {} of {} tags", entries.len(), tags.len());

        let writer = self.open_writer()?;
        let mut formatter: Box<dyn GlossaryFormatter> = match self.format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
        };

        for entry in &entries {
            formatter.format_entry(entry)?;
        }
        formatter.finish()?;

        Ok(())
    }

    fn load_profile(&self) -> CliResult<ProfileConfig> {
        match &self.profile_file {
            Some(path) => {
                let content = FileReader::read_text(path)?;
                let config = ProfileConfig::from_toml_str(&content)
                    .with_context(|| format!("Invalid profile file: {}", path.display()))?;
                Ok(config)
            }
            None => Ok(get_profile(&self.profile)?.clone()),
        }
    }

    /// Build the glossary builder, restricted to `--group` selections
    ///
    /// Selected groups keep their profile declaration order regardless of
    /// the order given on the command line.
    fn make_builder(&self, profile: &ProfileConfig) -> CliResult<GlossaryBuilder> {
        let mut groups = profile.to_groups()?;

        if !self.group.is_empty() {
            for name in &self.group {
                if !groups.iter().any(|group| group.name() == name) {
                    anyhow::bail!(
                        "Unknown group '{}' in profile '{}'",
                        name,
                        profile.profile.name
                    );
                }
            }
            groups.retain(|group| self.group.iter().any(|name| name == group.name()));
        }

        Ok(GlossaryBuilder::new(groups))
    }

    fn open_writer(&self) -> CliResult<Box<dyn Write>> {
        match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                Ok(Box::new(file))
            }
            None => Ok(Box::new(io::stdout())),
        }
    }
}
