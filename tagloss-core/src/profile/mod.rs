//! Profile loading and the TOML schema behind it
//!
//! A profile describes every glossary group for one report dialect:
//! membership rules, segmentation policy, definitions, and formatting.
//! Profiles ship embedded in the crate and are parsed once on first use.

mod loader;
mod types;

pub use loader::{get_profile, list_available_profiles};
pub use types::{GroupConfig, PrependConfig, ProfileConfig, ProfileMeta};
