use crate::licence_detection::domain::DependencyList;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// JsonFormatter adapter for machine-readable reports
///
/// Emits the dependency list as pretty-printed JSON with `direct` and
/// `indirect` arrays. The output carries no timestamp, so identical input
/// always renders identically.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, dependencies: &DependencyList) -> Result<String> {
        let mut json = serde_json::to_string_pretty(dependencies)
            .map_err(|e| anyhow::anyhow!("Failed to serialize report: {}", e))?;
        json.push('\n');
        Ok(json)
    }
}
