//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// Required XML tag is absent from the document
    MissingTag(String),
    /// XML tag carries a value that does not parse as expected
    InvalidValue {
        /// Tag whose text failed to parse
        tag: String,
        /// The offending raw text
        value: String,
    },
    /// Invalid file pattern
    InvalidPattern(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::MissingTag(tag) => write!(f, "Required tag not found: {tag}"),
            CliError::InvalidValue { tag, value } => {
                write!(f, "Invalid value for {tag}: '{value}'")
            }
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_tag_error_display() {
        let error = CliError::MissingTag("PatientName".to_string());
        assert_eq!(error.to_string(), "Required tag not found: PatientName");
    }

    #[test]
    fn test_invalid_value_error_display() {
        let error = CliError::InvalidValue {
            tag: "PatientAge".to_string(),
            value: "sixty".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid value for PatientAge: 'sixty'");
    }

    #[test]
    fn test_invalid_pattern_error_display() {
        let error = CliError::InvalidPattern("[invalid".to_string());
        assert_eq!(error.to_string(), "Invalid file pattern: [invalid");
    }

    #[test]
    fn test_error_trait_implementation() {
        let error = CliError::MissingTag("TIDindex".to_string());
        let _: &dyn std::error::Error = &error;

        let debug_str = format!("{:?}", error);
        assert!(debug_str.contains("MissingTag"));
        assert!(debug_str.contains("TIDindex"));
    }

    #[test]
    fn test_cli_result_type_alias() {
        let success: CliResult<String> = Ok("test".to_string());
        assert!(success.is_ok());

        let failure: CliResult<String> = Err(anyhow::anyhow!("test error"));
        assert!(failure.is_err());
        assert!(failure
            .as_ref()
            .unwrap_err()
            .to_string()
            .contains("test error"));
    }
}
