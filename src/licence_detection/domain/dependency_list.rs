use super::DependencyInfo;
use serde::Serialize;

/// DependencyList aggregate - the result of a detection run
///
/// Both buckets are sorted by module path. `indirect` is empty when the
/// run was asked to leave indirect dependencies out.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct DependencyList {
    pub direct: Vec<DependencyInfo>,
    pub indirect: Vec<DependencyInfo>,
}

impl DependencyList {
    /// Builds a list from unsorted buckets, sorting each by module path
    pub fn new(mut direct: Vec<DependencyInfo>, mut indirect: Vec<DependencyInfo>) -> Self {
        direct.sort_by(|a, b| a.module_path.cmp(&b.module_path));
        indirect.sort_by(|a, b| a.module_path.cmp(&b.module_path));
        Self { direct, indirect }
    }

    pub fn direct_count(&self) -> usize {
        self.direct.len()
    }

    pub fn indirect_count(&self) -> usize {
        self.indirect.len()
    }

    pub fn total_count(&self) -> usize {
        self.direct.len() + self.indirect.len()
    }

    /// Iterates over all dependencies, direct ones first
    pub fn iter(&self) -> impl Iterator<Item = &DependencyInfo> {
        self.direct.iter().chain(self.indirect.iter())
    }
}
