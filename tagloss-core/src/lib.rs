//! Glossary synthesis for run-together report tag names
//!
//! Clinical report exports name their fields with identifiers like
//! `StressLADSevScore` or `TIDindex`: several words and abbreviations run
//! together with letter case as the only separator. This crate pulls such
//! identifiers apart at case boundaries, resolves the pieces against
//! per-group vocabularies, and emits one plain-language sentence per
//! identifier.
//!
//! The pipeline has four stages:
//! - **Classification**: suffix, prefix, and substring rules sort
//!   identifiers into named groups
//! - **Segmentation**: each identifier splits into sub-tokens at capital
//!   letters, with a fixed vocabulary of atomic spellings kept whole
//! - **Resolution**: sub-tokens map to phrases through the group's
//!   definition table
//! - **Assembly**: prepend, append, ignore, and casing rules shape the
//!   final sentence
//!
//! Group vocabularies come from TOML profiles embedded in the crate.
//!
//! # Example
//!
//! ```rust
//! use tagloss_core::{get_profile, GlossaryBuilder};
//!
//! let profile = get_profile("ectb").unwrap();
//! let builder = GlossaryBuilder::from_profile(profile).unwrap();
//!
//! let tags = ["TotScore", "RCAExtentTotal"];
//! let entries = builder.build(&tags);
//!
//! assert_eq!(entries[0].identifier, "TotScore");
//! assert_eq!(entries[0].sentence, "Stress total in standard deviation units");
//! ```

pub mod classify;
pub mod error;
pub mod glossary;
pub mod profile;
pub mod resolve;
pub mod segment;

pub use classify::{GroupMatcher, MatchRule};
pub use error::{ProfileError, Result};
pub use glossary::{GlossaryBuilder, GlossaryEntry, TagGroup};
pub use profile::{
    get_profile, list_available_profiles, GroupConfig, PrependConfig, ProfileConfig, ProfileMeta,
};
pub use resolve::{resolve, DefinitionTable, FormatOptions, PrependRule};
pub use segment::{Segmenter, SubToken};
