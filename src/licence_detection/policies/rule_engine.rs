use super::{LicenceAlias, PatternMatcher};
use crate::shared::Result;
use serde::Deserialize;

/// Outcome a matching rule assigns to a dependency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleAction {
    Allow,
    Deny,
}

/// A rule as written in a rules document. Absent patterns match anything.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleSpec {
    pub module: Option<String>,
    pub licence: Option<String>,
    pub action: RuleAction,
}

/// Rules document as stored on disk
///
/// `rules` are consulted first, in order. Every `allowlist` and
/// `maybelist` identifier then becomes an allow rule for any module.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RulesDocument {
    #[serde(default)]
    pub rules: Vec<RuleSpec>,
    #[serde(default)]
    pub allowlist: Vec<String>,
    #[serde(default)]
    pub maybelist: Vec<String>,
}

/// Licence side of a rule
#[derive(Debug, Clone, PartialEq, Eq)]
enum LicencePattern {
    /// Matches any spelling of one licence
    Exact(String),
    /// Wildcard pattern over canonical identifiers
    Wildcard(PatternMatcher),
}

impl LicencePattern {
    fn compile(pattern: &str) -> Result<Self> {
        if pattern.contains('*') {
            Ok(LicencePattern::Wildcard(PatternMatcher::compile(pattern)?))
        } else {
            // Validates the pattern the same way a wildcard would be
            PatternMatcher::compile(pattern)?;
            Ok(LicencePattern::Exact(LicenceAlias::canonicalize(pattern)))
        }
    }

    fn matches(&self, canonical_licence: &str) -> bool {
        match self {
            LicencePattern::Exact(licence) => LicenceAlias::same_licence(licence, canonical_licence),
            LicencePattern::Wildcard(matcher) => matcher.matches(canonical_licence),
        }
    }
}

/// A compiled policy rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    module: Option<PatternMatcher>,
    licence: Option<LicencePattern>,
    action: RuleAction,
}

impl Rule {
    /// Compiles a rule; `None` or `"*"` for a pattern matches anything
    pub fn new(module: Option<&str>, licence: Option<&str>, action: RuleAction) -> Result<Self> {
        let module = module
            .map(PatternMatcher::compile)
            .transpose()?
            .filter(|m| *m != PatternMatcher::Any);
        let licence = licence
            .map(LicencePattern::compile)
            .transpose()?
            .filter(|l| *l != LicencePattern::Wildcard(PatternMatcher::Any));

        Ok(Self {
            module,
            licence,
            action,
        })
    }

    /// Allow rule for one licence, any module
    pub fn allow_licence(licence: &str) -> Result<Self> {
        Self::new(None, Some(licence), RuleAction::Allow)
    }

    pub fn action(&self) -> RuleAction {
        self.action
    }

    fn matches(&self, module_path: &str, canonical_licence: &str) -> bool {
        let module_ok = self
            .module
            .as_ref()
            .map_or(true, |m| m.matches(module_path));
        let licence_ok = self
            .licence
            .as_ref()
            .map_or(true, |l| l.matches(canonical_licence));
        module_ok && licence_ok
    }
}

/// RuleEngine - ordered allow/deny licence policy
///
/// The first rule matching both the module path and the licence decides.
/// When nothing matches the answer is deny: a licence is never accepted
/// just because nobody wrote a rule about it.
#[derive(Debug, Clone, Default)]
pub struct RuleEngine {
    rules: Vec<Rule>,
}

impl RuleEngine {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// Compiles a rules document into an engine
    ///
    /// # Errors
    /// Returns an error naming the offending entry if any pattern is invalid
    pub fn from_document(document: RulesDocument) -> Result<Self> {
        let mut rules = Vec::with_capacity(
            document.rules.len() + document.allowlist.len() + document.maybelist.len(),
        );

        for (idx, spec) in document.rules.iter().enumerate() {
            let rule = Rule::new(spec.module.as_deref(), spec.licence.as_deref(), spec.action)
                .map_err(|e| anyhow::anyhow!("rules[{}]: {}", idx, e))?;
            rules.push(rule);
        }

        for (list_name, licences) in [
            ("allowlist", &document.allowlist),
            ("maybelist", &document.maybelist),
        ] {
            for (idx, licence) in licences.iter().enumerate() {
                let rule = Rule::allow_licence(licence)
                    .map_err(|e| anyhow::anyhow!("{}[{}]: {}", list_name, idx, e))?;
                rules.push(rule);
            }
        }

        Ok(Self::new(rules))
    }

    fn decide(&self, module_path: &str, licence_type: &str) -> Option<&Rule> {
        let canonical = LicenceAlias::canonicalize(licence_type);
        self.rules
            .iter()
            .find(|rule| rule.matches(module_path, &canonical))
    }

    /// Whether `licence_type` is acceptable for `module_path`
    pub fn is_allowed(&self, module_path: &str, licence_type: &str) -> bool {
        self.decide(module_path, licence_type)
            .is_some_and(|rule| rule.action() == RuleAction::Allow)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
