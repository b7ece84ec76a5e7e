//! Glossary assembly across ordered tag groups

use crate::classify::GroupMatcher;
use crate::error::Result;
use crate::profile::ProfileConfig;
use crate::resolve::{resolve, DefinitionTable, FormatOptions};
use crate::segment::Segmenter;

/// One family of related identifiers with its own vocabulary
///
/// A group bundles the membership rules that select identifiers, the
/// segmentation policy for pulling them apart, and the definitions and
/// formatting used to phrase them.
#[derive(Debug, Clone)]
pub struct TagGroup {
    name: String,
    matcher: GroupMatcher,
    segmenter: Segmenter,
    table: DefinitionTable,
    format: FormatOptions,
}

impl TagGroup {
    /// Assemble a group from its parts
    pub fn new(
        name: impl Into<String>,
        matcher: GroupMatcher,
        segmenter: Segmenter,
        table: DefinitionTable,
        format: FormatOptions,
    ) -> Self {
        Self {
            name: name.into(),
            matcher,
            segmenter,
            table,
            format,
        }
    }

    /// Group name as declared in the profile
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Membership rules for this group
    pub fn matcher(&self) -> &GroupMatcher {
        &self.matcher
    }

    /// Produce the sentence for one identifier using this group's
    /// vocabulary
    ///
    /// Membership is not re-checked here; callers pass identifiers the
    /// matcher already accepted.
    pub fn gloss(&self, identifier: &str) -> String {
        let tokens = self.segmenter.segment(identifier);
        resolve(&tokens, &self.table, &self.format)
    }
}

/// One glossary line: an identifier, its sentence, and the group that
/// produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlossaryEntry {
    /// The identifier exactly as supplied
    pub identifier: String,
    /// The synthesized sentence
    pub sentence: String,
    /// Name of the group whose vocabulary was used
    pub group: String,
}

/// Turns identifier lists into glossaries, one group at a time
///
/// Groups keep their declaration order, and members keep their input
/// order within each group. An identifier matching several groups is
/// glossed once per group.
#[derive(Debug, Clone, Default)]
pub struct GlossaryBuilder {
    groups: Vec<TagGroup>,
}

impl GlossaryBuilder {
    /// Create a builder over the given groups
    pub fn new(groups: Vec<TagGroup>) -> Self {
        Self { groups }
    }

    /// Build directly from a parsed profile
    pub fn from_profile(profile: &ProfileConfig) -> Result<Self> {
        Ok(Self::new(profile.to_groups()?))
    }

    /// The groups in declaration order
    pub fn groups(&self) -> &[TagGroup] {
        &self.groups
    }

    /// Partition identifiers by group membership
    ///
    /// Returns one `(group name, members)` element per group, in group
    /// order, every group present even when no identifier matched.
    /// Members keep their input order; an identifier matching several
    /// groups is listed under each.
    pub fn classify<'a, S>(&self, identifiers: &'a [S]) -> Vec<(&str, Vec<&'a str>)>
    where
        S: AsRef<str>,
    {
        self.groups
            .iter()
            .map(|group| {
                let members: Vec<&str> = identifiers
                    .iter()
                    .map(AsRef::as_ref)
                    .filter(|identifier| group.matcher.matches(identifier))
                    .collect();
                (group.name(), members)
            })
            .collect()
    }

    /// Synthesize the full glossary for an identifier list
    ///
    /// Identifiers matching no group are dropped.
    pub fn build<S>(&self, identifiers: &[S]) -> Vec<GlossaryEntry>
    where
        S: AsRef<str>,
    {
        let mut entries = Vec::new();
        for (group, (_, members)) in self.groups.iter().zip(self.classify(identifiers)) {
            for identifier in members {
                entries.push(GlossaryEntry {
                    identifier: identifier.to_string(),
                    sentence: group.gloss(identifier),
                    group: group.name().to_string(),
                });
            }
        }
        entries
    }
}
