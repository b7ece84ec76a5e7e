//! Profile schema deserialized from TOML

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::classify::{GroupMatcher, MatchRule};
use crate::error::{ProfileError, Result};
use crate::glossary::TagGroup;
use crate::resolve::{DefinitionTable, FormatOptions, PrependRule};
use crate::segment::Segmenter;

/// A complete profile: metadata plus an ordered list of groups
///
/// Group order is the processing order, so glossary output follows the
/// order groups are declared in the file. Unknown keys anywhere in the
/// file are parse errors rather than silently ignored fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProfileConfig {
    pub profile: ProfileMeta,
    #[serde(default, rename = "group")]
    pub groups: Vec<GroupConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProfileMeta {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// One group section of a profile
///
/// The three rule lists are alternatives within their kind and across
/// kinds; an identifier joins the group when any literal matches. At
/// least one list must be non-empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GroupConfig {
    pub name: String,
    #[serde(default)]
    pub ends_with: Vec<String>,
    #[serde(default)]
    pub starts_with: Vec<String>,
    #[serde(default)]
    pub contains: Vec<String>,
    /// Strip the last character of a leading capital run before scanning
    #[serde(default = "default_true")]
    pub truncate_prefix: bool,
    /// Spellings taken whole when found at a token start
    #[serde(default)]
    pub atomic: Vec<String>,
    /// Spelling to phrase mapping
    #[serde(default)]
    pub definitions: HashMap<String, String>,
    /// Spellings dropped from sentences when they carry no definition
    #[serde(default)]
    pub ignore: Vec<String>,
    #[serde(default)]
    pub prepend: Option<PrependConfig>,
    #[serde(default)]
    pub append: Option<String>,
    #[serde(default)]
    pub keep_raw_case: bool,
}

/// Conditional prefix section of a group
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PrependConfig {
    /// Condition tested against the sentence before the casing step;
    /// empty means always
    #[serde(default)]
    pub when_starts_with: String,
    pub text: String,
}

fn default_true() -> bool {
    true
}

impl ProfileConfig {
    /// Parse and validate a profile from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check structural invariants the schema cannot express
    pub fn validate(&self) -> Result<()> {
        if self.profile.name.is_empty() {
            return Err(ProfileError::EmptyProfileName);
        }
        for (index, group) in self.groups.iter().enumerate() {
            if group.name.is_empty() {
                return Err(ProfileError::EmptyGroupName { index });
            }
            if group.ends_with.is_empty()
                && group.starts_with.is_empty()
                && group.contains.is_empty()
            {
                return Err(ProfileError::NoMembershipRules {
                    group: group.name.clone(),
                });
            }
            // A blank spelling can never match a token and an empty one
            // would stall the scan.
            if group.atomic.iter().any(|spelling| spelling.trim().is_empty()) {
                return Err(ProfileError::BlankAtomicSpelling {
                    group: group.name.clone(),
                });
            }
        }
        Ok(())
    }

    /// Convert every group section into a runnable [`TagGroup`]
    pub fn to_groups(&self) -> Result<Vec<TagGroup>> {
        self.validate()?;
        self.groups.iter().map(GroupConfig::to_group).collect()
    }
}

impl GroupConfig {
    fn to_matcher(&self) -> GroupMatcher {
        let mut rules = Vec::new();
        if !self.ends_with.is_empty() {
            rules.push(MatchRule::Suffix(self.ends_with.clone()));
        }
        if !self.starts_with.is_empty() {
            rules.push(MatchRule::Prefix(self.starts_with.clone()));
        }
        if !self.contains.is_empty() {
            rules.push(MatchRule::Contains(self.contains.clone()));
        }
        GroupMatcher::new(rules)
    }

    /// Build the runnable group for this section
    pub fn to_group(&self) -> Result<TagGroup> {
        let table = DefinitionTable::from_pairs(self.definitions.clone())?;
        let segmenter =
            Segmenter::new(self.truncate_prefix).with_atomic(self.atomic.iter().cloned());
        let format = FormatOptions {
            prepend: self.prepend.as_ref().map(|p| PrependRule {
                when_starts_with: p.when_starts_with.clone(),
                text: p.text.clone(),
            }),
            append: self.append.clone(),
            ignore: self.ignore.iter().cloned().collect(),
            keep_raw_case: self.keep_raw_case,
        };
        Ok(TagGroup::new(
            self.name.clone(),
            self.to_matcher(),
            segmenter,
            table,
            format,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_config_deserialize() {
        let toml_str = r#"
            [profile]
            name = "demo"
            description = "Demo profile"

            [[group]]
            name = "severity-scores"
            ends_with = ["SevScore"]
            atomic = ["LAD", "LCX", "RCA"]
            ignore = ["Sev"]
            append = "severity"

            [group.prepend]
            when_starts_with = "total"
            text = "Stress"

            [group.definitions]
            Stress = "stress"
            Score = "score"

            [[group]]
            name = "extent-totals"
            contains = ["Extent"]
            truncate_prefix = false
            keep_raw_case = true
        "#;

        let config = ProfileConfig::from_toml_str(toml_str).unwrap();
        assert_eq!(config.profile.name, "demo");
        assert_eq!(config.profile.description, "Demo profile");
        assert_eq!(config.groups.len(), 2);

        let first = &config.groups[0];
        assert_eq!(first.name, "severity-scores");
        assert_eq!(first.ends_with, vec!["SevScore"]);
        assert!(first.truncate_prefix);
        assert_eq!(first.atomic, vec!["LAD", "LCX", "RCA"]);
        assert_eq!(first.definitions.get("Stress").map(String::as_str), Some("stress"));
        assert_eq!(first.ignore, vec!["Sev"]);
        assert_eq!(first.append.as_deref(), Some("severity"));
        let prepend = first.prepend.as_ref().unwrap();
        assert_eq!(prepend.when_starts_with, "total");
        assert_eq!(prepend.text, "Stress");

        let second = &config.groups[1];
        assert!(!second.truncate_prefix);
        assert!(second.keep_raw_case);
        assert!(second.definitions.is_empty());
        assert!(second.prepend.is_none());
    }

    #[test]
    fn test_group_defaults() {
        let toml_str = r#"
            [profile]
            name = "demo"

            [[group]]
            name = "only"
            ends_with = ["Score"]
        "#;

        let config = ProfileConfig::from_toml_str(toml_str).unwrap();
        let group = &config.groups[0];
        assert!(group.truncate_prefix);
        assert!(!group.keep_raw_case);
        assert!(group.starts_with.is_empty());
        assert!(group.contains.is_empty());
        assert!(group.atomic.is_empty());
        assert!(group.ignore.is_empty());
        assert!(group.append.is_none());
    }

    #[test]
    fn test_invalid_toml_rejected() {
        let result = ProfileConfig::from_toml_str("not valid [ toml");
        assert!(matches!(result, Err(ProfileError::Parse(_))));
    }

    #[test]
    fn test_empty_profile_name_rejected() {
        let toml_str = r#"
            [profile]
            name = ""
        "#;
        let result = ProfileConfig::from_toml_str(toml_str);
        assert!(matches!(result, Err(ProfileError::EmptyProfileName)));
    }

    #[test]
    fn test_empty_group_name_rejected() {
        let toml_str = r#"
            [profile]
            name = "demo"

            [[group]]
            name = "first"
            ends_with = ["Score"]

            [[group]]
            name = ""
            ends_with = ["Total"]
        "#;
        let result = ProfileConfig::from_toml_str(toml_str);
        assert!(matches!(
            result,
            Err(ProfileError::EmptyGroupName { index: 1 })
        ));
    }

    #[test]
    fn test_group_without_rules_rejected() {
        let toml_str = r#"
            [profile]
            name = "demo"

            [[group]]
            name = "orphan"
        "#;
        let result = ProfileConfig::from_toml_str(toml_str);
        assert!(matches!(
            result,
            Err(ProfileError::NoMembershipRules { group }) if group == "orphan"
        ));
    }

    #[test]
    fn test_blank_atomic_spelling_rejected() {
        let empty = r#"
            [profile]
            name = "demo"

            [[group]]
            name = "severity-scores"
            ends_with = ["SevScore"]
            atomic = ["LAD", ""]
        "#;
        assert!(matches!(
            ProfileConfig::from_toml_str(empty),
            Err(ProfileError::BlankAtomicSpelling { group }) if group == "severity-scores"
        ));

        let whitespace = r#"
            [profile]
            name = "demo"

            [[group]]
            name = "severity-scores"
            ends_with = ["SevScore"]
            atomic = ["  "]
        "#;
        assert!(matches!(
            ProfileConfig::from_toml_str(whitespace),
            Err(ProfileError::BlankAtomicSpelling { group }) if group == "severity-scores"
        ));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let toml_str = r#"
            [profile]
            name = "demo"

            [[group]]
            name = "summed-scores"
            suffixes = ["TotScore"]
        "#;
        match ProfileConfig::from_toml_str(toml_str) {
            Err(ProfileError::Parse(e)) => {
                assert!(e.to_string().contains("suffixes"));
            }
            other => panic!("expected Parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_to_groups_builds_working_groups() {
        let toml_str = r#"
            [profile]
            name = "demo"

            [[group]]
            name = "severity-scores"
            ends_with = ["SevScore"]
            atomic = ["LAD"]

            [group.definitions]
            Stress = "stress"
            LAD = "LAD territory"
            Sev = "severity"
            Score = "score"
        "#;

        let config = ProfileConfig::from_toml_str(toml_str).unwrap();
        let groups = config.to_groups().unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].name(), "severity-scores");
        assert!(groups[0].matcher().matches("StressLADSevScore"));
        assert_eq!(
            groups[0].gloss("StressLADSevScore"),
            "Stress LAD territory severity score"
        );
    }

    #[test]
    fn test_rule_order_is_suffix_prefix_contains() {
        let toml_str = r#"
            [profile]
            name = "demo"

            [[group]]
            name = "mixed"
            contains = ["Mid"]
            starts_with = ["Pre"]
            ends_with = ["End"]
        "#;

        let config = ProfileConfig::from_toml_str(toml_str).unwrap();
        let group = config.groups[0].to_group().unwrap();
        assert_eq!(
            group.matcher().to_string(),
            "ends with \"End\"; starts with \"Pre\"; contains \"Mid\""
        );
    }
}
