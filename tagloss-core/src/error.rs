//! Error types for profile configuration
//!
//! The glossary engine itself is infallible over identifiers; everything
//! that can go wrong happens while loading or validating a profile.

use thiserror::Error;

/// Error type for profile loading and validation
#[derive(Debug, Error)]
pub enum ProfileError {
    /// Requested profile is not among the embedded ones
    #[error("unknown profile: {0}")]
    UnknownProfile(String),

    /// Profile file is not valid TOML
    #[error("profile configuration is not valid TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// Profile metadata carries an empty name
    #[error("profile name must not be empty")]
    EmptyProfileName,

    /// A group entry carries an empty name
    #[error("group at position {index} has an empty name")]
    EmptyGroupName {
        /// Zero-based position of the group in the profile
        index: usize,
    },

    /// A group defines no suffix, prefix, or substring rule
    #[error("group '{group}' has no membership rule")]
    NoMembershipRules {
        /// Name of the offending group
        group: String,
    },

    /// A group lists an empty or whitespace-only atomic spelling
    #[error("group '{group}' has a blank atomic spelling")]
    BlankAtomicSpelling {
        /// Name of the offending group
        group: String,
    },

    /// Two definitions share one spelling
    #[error("duplicate definition for spelling '{spelling}'")]
    DuplicateDefinition {
        /// The spelling that was defined twice
        spelling: String,
    },

    /// An embedded profile declares a name that differs from its registry key
    #[error("embedded profile name mismatch: expected '{expected}', found '{found}'")]
    NameMismatch {
        /// Key the profile is registered under
        expected: String,
        /// Name declared inside the profile file
        found: String,
    },
}

/// Result type for profile operations
pub type Result<T> = std::result::Result<T, ProfileError>;
