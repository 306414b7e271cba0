use crate::licence_detection::domain::Overrides;
use crate::licence_detection::policies::RuleEngine;
use crate::shared::Result;
use std::path::Path;

/// PolicyReader port for loading licence rules and overrides
pub trait PolicyReader {
    /// Loads the rule engine from a rules file, or the built-in rules when `None`
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or contains an invalid rule
    fn read_rules(&self, path: Option<&Path>) -> Result<RuleEngine>;

    /// Loads operator overrides keyed by module path
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, a line is malformed,
    /// or two lines override the same module
    fn read_overrides(&self, path: &Path) -> Result<Overrides>;
}
