//! Per-study record fields pulled from a report document
//!
//! Besides the run-together score tags, every ECTb export carries a
//! handful of fixed patient fields. These are extracted as typed values
//! and fail fast when a tag is missing or malformed, unlike the glossary
//! path which tolerates anything.

use serde::Serialize;

use crate::error::{CliError, CliResult};
use crate::input::tag_text;

/// Typed view of the fixed fields of one report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PatientRecord {
    /// Patient name as recorded
    pub patient_name: String,
    /// Age in years
    pub patient_age: u32,
    /// Transient ischemic dilation index
    pub tid_index: f64,
    /// Stress left ventricular ejection fraction, percent
    pub stress_ejection_fraction: u32,
    /// Rest left ventricular ejection fraction, percent
    pub rest_ejection_fraction: u32,
}

impl PatientRecord {
    /// Extract the record from report XML
    pub fn from_xml(xml: &str) -> CliResult<Self> {
        Ok(Self {
            patient_name: required_text(xml, "PatientName")?,
            patient_age: parse_field(xml, "PatientAge")?,
            tid_index: parse_field(xml, "TIDindex")?,
            stress_ejection_fraction: parse_field(xml, "StressLVEjectionFraction")?,
            rest_ejection_fraction: parse_field(xml, "RestLVEjectionFraction")?,
        })
    }
}

fn required_text(xml: &str, tag: &str) -> CliResult<String> {
    let value = tag_text(xml, tag)?;
    value.ok_or_else(|| CliError::MissingTag(tag.to_string()).into())
}

fn parse_field<T: std::str::FromStr>(xml: &str, tag: &str) -> CliResult<T> {
    let raw = required_text(xml, tag)?;
    raw.trim().parse().map_err(|_| {
        CliError::InvalidValue {
            tag: tag.to_string(),
            value: raw.clone(),
        }
        .into()
    })
}
