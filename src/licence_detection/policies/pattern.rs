use crate::shared::Result;

/// Maximum length of a single rule pattern to prevent DoS attacks
const MAX_PATTERN_LENGTH: usize = 512;

/// Suffix marking a module subtree pattern: `github.com/acme/...`
const SUBTREE_SUFFIX: &str = "/...";

/// Pattern matcher types for efficient matching
///
/// `*` matches any run of characters, `/` included. Matching is
/// anchored at both ends and case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternMatcher {
    /// Matches everything: "*"
    Any,
    /// Exact match: "github.com/acme/widget"
    Exact(String),
    /// Module subtree: "github.com/acme/..." matches the prefix and anything below it
    Subtree(String),
    /// Leading wildcard: "*-suffix"
    EndsWith(String),
    /// Trailing wildcard: "prefix-*"
    StartsWith(String),
    /// Wildcards on both ends: "*middle*"
    Contains(String),
    /// General case, split on '*': "github.com/*/widget*"
    Glob(Vec<String>),
}

impl PatternMatcher {
    /// Compiles a pattern string into an optimized matcher
    ///
    /// # Errors
    /// Returns an error if the pattern is blank or too long
    pub fn compile(pattern: &str) -> Result<Self> {
        validate_pattern(pattern)?;
        let pattern = pattern.trim();

        if pattern.chars().all(|c| c == '*') {
            return Ok(PatternMatcher::Any);
        }

        if let Some(prefix) = pattern.strip_suffix(SUBTREE_SUFFIX) {
            if !prefix.contains('*') {
                return Ok(PatternMatcher::Subtree(prefix.to_string()));
            }
        }

        let wildcard_count = pattern.matches('*').count();
        let matcher = match wildcard_count {
            0 => PatternMatcher::Exact(pattern.to_string()),
            1 if pattern.starts_with('*') => PatternMatcher::EndsWith(pattern[1..].to_string()),
            1 if pattern.ends_with('*') => {
                PatternMatcher::StartsWith(pattern[..pattern.len() - 1].to_string())
            }
            2 if pattern.starts_with('*') && pattern.ends_with('*') => {
                PatternMatcher::Contains(pattern[1..pattern.len() - 1].to_string())
            }
            _ => PatternMatcher::Glob(pattern.split('*').map(|s| s.to_string()).collect()),
        };

        Ok(matcher)
    }

    /// Checks if a value matches this pattern
    pub fn matches(&self, value: &str) -> bool {
        match self {
            PatternMatcher::Any => true,
            PatternMatcher::Exact(s) => value == s,
            PatternMatcher::Subtree(prefix) => {
                value == prefix
                    || value
                        .strip_prefix(prefix.as_str())
                        .is_some_and(|rest| rest.starts_with('/'))
            }
            PatternMatcher::EndsWith(suffix) => value.ends_with(suffix.as_str()),
            PatternMatcher::StartsWith(prefix) => value.starts_with(prefix.as_str()),
            PatternMatcher::Contains(middle) => value.contains(middle.as_str()),
            PatternMatcher::Glob(parts) => glob_matches(parts, value),
        }
    }
}

/// Anchored match of the '*'-separated `parts` against `value`
///
/// The first part must be a prefix and the last a suffix; the parts in
/// between are found leftmost-first, which is sufficient when `*` is the
/// only metacharacter.
fn glob_matches(parts: &[String], value: &str) -> bool {
    let (first, rest_parts) = match parts.split_first() {
        Some(split) => split,
        None => return value.is_empty(),
    };
    let Some(mut remaining) = value.strip_prefix(first.as_str()) else {
        return false;
    };

    let (last, middle) = match rest_parts.split_last() {
        Some(split) => split,
        None => return remaining.is_empty(),
    };

    for part in middle.iter().filter(|p| !p.is_empty()) {
        match remaining.find(part.as_str()) {
            Some(pos) => remaining = &remaining[pos + part.len()..],
            None => return false,
        }
    }

    remaining.ends_with(last.as_str())
}

/// Validates a pattern string
fn validate_pattern(pattern: &str) -> Result<()> {
    if pattern.trim().is_empty() {
        anyhow::bail!("Rule pattern cannot be empty");
    }

    if pattern.len() > MAX_PATTERN_LENGTH {
        anyhow::bail!(
            "Rule pattern is too long: ({} chars). Maximum: {} chars",
            pattern.len(),
            MAX_PATTERN_LENGTH
        );
    }

    if pattern.chars().any(|c| c.is_control()) {
        anyhow::bail!("Rule pattern contains control characters: {:?}", pattern);
    }

    Ok(())
}
