//! Record command implementation

use anyhow::Context;
use clap::Args;
use std::path::PathBuf;

use super::build::OutputFormat;
use crate::error::CliResult;
use crate::input::FileReader;
use crate::record::PatientRecord;

/// Arguments for the record command
#[derive(Debug, Args)]
pub struct RecordArgs {
    /// Report file to read
    #[arg(short, long, value_name = "FILE", required = true)]
    pub input: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl RecordArgs {
    /// Execute the record command
    pub fn execute(&self) -> CliResult<()> {
        super::init_logging(self.quiet, self.verbose);

        log::info!("Extracting record from {}", self.input.display());

        let content = FileReader::read_text(&self.input)?;
        let record = PatientRecord::from_xml(&content)
            .with_context(|| format!("Failed to extract record from {}", self.input.display()))?;

        match self.format {
            OutputFormat::Text => print_record(&record),
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(&record)?;
                println!("{json}");
            }
        }

        Ok(())
    }
}

fn print_record(record: &PatientRecord) {
    println!("Patient name : {}", record.patient_name);
    println!("Age          : {}", record.patient_age);
    println!("TID index    : {}", record.tid_index);
    println!("Stress LVEF  : {}", record.stress_ejection_fraction);
    println!("Rest LVEF    : {}", record.rest_ejection_fraction);
}
