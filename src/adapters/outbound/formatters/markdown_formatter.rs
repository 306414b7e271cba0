use crate::licence_detection::domain::{DependencyInfo, DependencyList};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use chrono::{DateTime, Utc};

/// Markdown table header for dependency information
const TABLE_HEADER: &str = "| Module | Version | Version Time | Licence |\n";

/// Markdown table separator line
const TABLE_SEPARATOR: &str = "|--------|---------|--------------|---------|\n";

/// MarkdownFormatter adapter for human-readable dependency reports
///
/// Renders one table per bucket; each module links to its source URL.
pub struct MarkdownFormatter {
    generated_at: DateTime<Utc>,
}

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self::with_timestamp(Utc::now())
    }

    /// Creates a formatter stamping reports with a fixed generation time
    pub fn with_timestamp(generated_at: DateTime<Utc>) -> Self {
        Self { generated_at }
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    fn render_header(&self, output: &mut String, dependencies: &DependencyList) {
        output.push_str("# Third-Party Dependency Licences\n\n");
        output.push_str(&format!(
            "Generated at {} for {} dependencies ({} direct, {} indirect).\n\n",
            self.generated_at.to_rfc3339(),
            dependencies.total_count(),
            dependencies.direct_count(),
            dependencies.indirect_count()
        ));
    }

    fn render_section(
        &self,
        output: &mut String,
        title: &str,
        empty_note: &str,
        entries: &[DependencyInfo],
    ) {
        output.push_str(&format!("## {}\n\n", title));

        if entries.is_empty() {
            output.push_str(&format!("*{}*\n\n", empty_note));
            return;
        }

        output.push_str(TABLE_HEADER);
        output.push_str(TABLE_SEPARATOR);
        for dep in entries {
            output.push_str(&format!(
                "| [{}]({}) | {} | {} | {} |\n",
                Self::escape_markdown_table_cell(&dep.name),
                dep.url,
                Self::escape_markdown_table_cell(&dep.version),
                Self::escape_markdown_table_cell(&dep.version_time),
                Self::escape_markdown_table_cell(&dep.licence_type)
            ));
        }
        output.push('\n');
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for MarkdownFormatter {
    fn format(&self, dependencies: &DependencyList) -> Result<String> {
        let mut output = String::new();
        self.render_header(&mut output, dependencies);
        self.render_section(
            &mut output,
            "Direct Dependencies",
            "No direct dependencies",
            &dependencies.direct,
        );
        self.render_section(
            &mut output,
            "Indirect Dependencies",
            "No indirect dependencies",
            &dependencies.indirect,
        );
        Ok(output)
    }
}
