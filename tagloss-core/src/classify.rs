//! Membership predicates that sort identifiers into groups

use std::fmt;

/// A single membership predicate over identifier spellings
///
/// Each variant carries alternative literals; the rule matches when any
/// one of them does. Matching is exact-case. An empty alternative list
/// matches nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchRule {
    /// Identifier ends with one of the literals
    Suffix(Vec<String>),
    /// Identifier starts with one of the literals
    Prefix(Vec<String>),
    /// Identifier contains one of the literals anywhere
    Contains(Vec<String>),
}

impl MatchRule {
    /// Test one identifier against this rule
    pub fn matches(&self, identifier: &str) -> bool {
        match self {
            Self::Suffix(alternatives) => {
                alternatives.iter().any(|alt| identifier.ends_with(alt.as_str()))
            }
            Self::Prefix(alternatives) => {
                alternatives.iter().any(|alt| identifier.starts_with(alt.as_str()))
            }
            Self::Contains(alternatives) => {
                alternatives.iter().any(|alt| identifier.contains(alt.as_str()))
            }
        }
    }
}

impl fmt::Display for MatchRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (label, alternatives) = match self {
            Self::Suffix(alternatives) => ("ends with", alternatives),
            Self::Prefix(alternatives) => ("starts with", alternatives),
            Self::Contains(alternatives) => ("contains", alternatives),
        };
        let quoted: Vec<String> = alternatives.iter().map(|alt| format!("\"{alt}\"")).collect();
        write!(f, "{} {}", label, quoted.join(" or "))
    }
}

/// Disjunction of membership rules for one group
///
/// An identifier belongs to the group when at least one rule matches.
/// A matcher with no rules matches nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupMatcher {
    rules: Vec<MatchRule>,
}

impl GroupMatcher {
    /// Create a matcher from its rules
    pub fn new(rules: Vec<MatchRule>) -> Self {
        Self { rules }
    }

    /// Test one identifier against every rule
    pub fn matches(&self, identifier: &str) -> bool {
        self.rules.iter().any(|rule| rule.matches(identifier))
    }

    /// Whether the matcher holds no rules at all
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// The rules in declaration order
    pub fn rules(&self) -> &[MatchRule] {
        &self.rules
    }
}

impl fmt::Display for GroupMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.rules.iter().map(MatchRule::to_string).collect();
        write!(f, "{}", parts.join("; "))
    }
}
