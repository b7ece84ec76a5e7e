//! Sentence synthesis from sub-token sequences

use std::collections::{HashMap, HashSet};

use crate::error::{ProfileError, Result};
use crate::segment::SubToken;

/// Immutable mapping from sub-token spelling to phrase, scoped to one group
///
/// Lookup is exact-string and case-sensitive; keys are unique.
#[derive(Debug, Clone, Default)]
pub struct DefinitionTable {
    entries: HashMap<String, String>,
}

impl DefinitionTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from (spelling, phrase) pairs
    ///
    /// Fails if one spelling appears twice.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut entries = HashMap::new();
        for (spelling, phrase) in pairs {
            let spelling = spelling.into();
            if entries.contains_key(&spelling) {
                return Err(ProfileError::DuplicateDefinition { spelling });
            }
            entries.insert(spelling, phrase.into());
        }
        Ok(Self { entries })
    }

    /// Phrase for a spelling, if defined
    pub fn lookup(&self, spelling: &str) -> Option<&str> {
        self.entries.get(spelling).map(String::as_str)
    }

    /// Number of definitions
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table holds no definitions
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Conditional sentence prefix
///
/// The prefix text is inserted only when the raw sentence (before the
/// casing step) starts with `when_starts_with`; an empty condition always
/// applies. This lets a group relabel sentences whose first resolved word
/// matches an expected marker while leaving the rest of the group alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrependRule {
    /// Literal the raw sentence must start with; empty matches everything
    pub when_starts_with: String,
    /// Text inserted before the sentence
    pub text: String,
}

/// Per-group sentence formatting policy
#[derive(Debug, Clone, Default)]
pub struct FormatOptions {
    /// Optional conditional prefix
    pub prepend: Option<PrependRule>,
    /// Optional text appended after the last resolved token
    pub append: Option<String>,
    /// Spellings dropped silently when not defined in the table
    pub ignore: HashSet<String>,
    /// Skip the leading-capital display convention
    pub keep_raw_case: bool,
}

/// Resolve a sub-token sequence into a normalized sentence
///
/// Defined tokens contribute their phrase, ignored tokens vanish, and
/// unknown tokens pass through verbatim so gaps in the table stay visible
/// in the output. Never fails; an empty token sequence with no append or
/// prepend yields the empty string.
pub fn resolve(tokens: &[SubToken<'_>], table: &DefinitionTable, options: &FormatOptions) -> String {
    let mut sentence = String::new();
    for token in tokens {
        if let Some(phrase) = table.lookup(token.text) {
            sentence.push(' ');
            sentence.push_str(phrase);
        } else if options.ignore.contains(token.text) {
            continue;
        } else {
            // Pass-through: unresolved spellings surface verbatim.
            sentence.push(' ');
            sentence.push_str(token.text);
        }
    }

    if let Some(tail) = &options.append {
        sentence.push(' ');
        sentence.push_str(tail);
    }

    let mut sentence = sentence.trim().to_string();

    if let Some(rule) = &options.prepend {
        if rule.when_starts_with.is_empty() || sentence.starts_with(&rule.when_starts_with) {
            sentence = if sentence.is_empty() {
                rule.text.clone()
            } else {
                format!("{} {}", rule.text, sentence)
            };
        }
    }

    if options.keep_raw_case {
        sentence
    } else {
        capitalize_first(&sentence)
    }
}

/// Upper-case the first character, leaving every other character alone
fn capitalize_first(sentence: &str) -> String {
    let mut chars = sentence.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
