mod licence_alias;
mod pattern;
mod rule_engine;

pub use licence_alias::LicenceAlias;
pub use pattern::PatternMatcher;
pub use rule_engine::{Rule, RuleAction, RuleEngine, RuleSpec, RulesDocument};
