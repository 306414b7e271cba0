use crate::licence_detection::domain::{ModuleRecord, Overrides};
use crate::licence_detection::policies::RuleEngine;

/// DetectionRequest - Input of the dependency detection use case
///
/// Everything a run needs besides the classifier: the raw module list,
/// the licence policy, operator overrides and whether indirect modules
/// take part.
#[derive(Debug, Clone, Default)]
pub struct DetectionRequest {
    /// Modules in module-graph order
    pub modules: Vec<ModuleRecord>,
    /// Allow/deny policy consulted for every module
    pub rules: RuleEngine,
    /// Corrections keyed by module path
    pub overrides: Overrides,
    /// Whether indirect modules are classified and reported
    pub include_indirect: bool,
}

impl DetectionRequest {
    pub fn new(
        modules: Vec<ModuleRecord>,
        rules: RuleEngine,
        overrides: Overrides,
        include_indirect: bool,
    ) -> Self {
        Self {
            modules,
            rules,
            overrides,
            include_indirect,
        }
    }
}
