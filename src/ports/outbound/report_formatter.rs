use crate::licence_detection::domain::DependencyList;
use crate::shared::Result;

/// ReportFormatter port for rendering the dependency report
///
/// This port abstracts the output format (JSON, Markdown, NOTICE text).
pub trait ReportFormatter {
    /// Renders the validated dependency list
    ///
    /// # Errors
    /// Returns an error if serialization fails or referenced licence
    /// texts cannot be read
    fn format(&self, dependencies: &DependencyList) -> Result<String>;
}
