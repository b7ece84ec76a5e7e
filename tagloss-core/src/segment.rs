//! Identifier segmentation using case-transition and fixed-vocabulary rules

/// One component extracted from an identifier
///
/// Borrows from the identifier it was cut from; the start offset is the
/// byte position of the first character in the original string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubToken<'a> {
    /// The token text
    pub text: &'a str,
    /// Byte offset of the token start within the identifier
    pub start: usize,
}

impl<'a> SubToken<'a> {
    /// Create a new sub-token
    pub fn new(text: &'a str, start: usize) -> Self {
        Self { text, start }
    }
}

/// Splits identifiers into sub-tokens
///
/// Boundaries are ASCII case transitions: every uppercase character opens a
/// new token, and a leading lowercase run forms a token of its own. Two
/// refinements handle all-caps vocabulary:
///
/// - with `truncate_prefix`, a leading uppercase run is emitted minus its
///   last character, which is handed back to the scan; the trailing capital
///   of an acronym is usually the first letter of the next word;
/// - spellings registered via [`with_atomic`](Segmenter::with_atomic) are
///   emitted whole wherever a token would otherwise start, longest match
///   first, regardless of the case transitions inside them.
#[derive(Debug, Clone, Default)]
pub struct Segmenter {
    truncate_prefix: bool,
    /// Fixed-vocabulary spellings, ordered longest first
    atomic: Vec<String>,
}

impl Segmenter {
    /// Create a segmenter with an empty fixed vocabulary
    pub fn new(truncate_prefix: bool) -> Self {
        Self {
            truncate_prefix,
            atomic: Vec::new(),
        }
    }

    /// Register fixed-vocabulary spellings that segment as single tokens
    ///
    /// Empty spellings are discarded; a zero-length match cannot advance
    /// the scan.
    pub fn with_atomic<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.atomic = tokens
            .into_iter()
            .map(Into::into)
            .filter(|token| !token.is_empty())
            .collect();
        // Longest first so overlapping spellings resolve deterministically
        self.atomic
            .sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        self
    }

    /// Whether the leading uppercase run is truncated by one character
    pub fn truncate_prefix(&self) -> bool {
        self.truncate_prefix
    }

    /// Split an identifier into its ordered sub-tokens
    ///
    /// Total and deterministic: the concatenation of the returned token
    /// texts always reproduces the identifier. An empty identifier yields
    /// an empty sequence.
    pub fn segment<'a>(&self, identifier: &'a str) -> Vec<SubToken<'a>> {
        let bytes = identifier.as_bytes();
        let mut tokens = Vec::new();
        let mut pos = 0;

        // A fixed-vocabulary spelling at the very start wins over the
        // prefix-run rule.
        if let Some(len) = self.atomic_at(identifier, 0) {
            tokens.push(SubToken::new(&identifier[..len], 0));
            pos = len;
        } else {
            let run = bytes
                .iter()
                .take_while(|b| b.is_ascii_uppercase())
                .count();
            if run > 0 {
                if self.truncate_prefix {
                    if run > 1 {
                        tokens.push(SubToken::new(&identifier[..run - 1], 0));
                    }
                    // The last capital of the run starts the next word.
                    pos = run - 1;
                } else {
                    tokens.push(SubToken::new(&identifier[..run], 0));
                    pos = run;
                }
            }
        }

        while pos < bytes.len() {
            if let Some(len) = self.atomic_at(identifier, pos) {
                tokens.push(SubToken::new(&identifier[pos..pos + len], pos));
                pos += len;
                continue;
            }
            let start = pos;
            pos += 1;
            while pos < bytes.len() && !bytes[pos].is_ascii_uppercase() {
                pos += 1;
            }
            tokens.push(SubToken::new(&identifier[start..pos], start));
        }

        tokens
    }

    /// Length of the fixed-vocabulary spelling starting at `pos`, if any
    fn atomic_at(&self, identifier: &str, pos: usize) -> Option<usize> {
        let rest = &identifier[pos..];
        self.atomic
            .iter()
            .find(|token| rest.starts_with(token.as_str()))
            .map(|token| token.len())
    }
}
