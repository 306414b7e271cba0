/// Output format enumeration for dependency reports
///
/// This enum represents the supported report formats.
/// It belongs in the application layer as it represents an application-level
/// concern that both the CLI (inbound adapter) and formatters (outbound adapters)
/// need to understand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Machine-readable JSON
    Json,
    /// Human-readable Markdown tables (default)
    #[default]
    Markdown,
    /// NOTICE text with every licence reproduced verbatim
    Notice,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "notice" => Ok(OutputFormat::Notice),
            _ => Err(format!(
                "Invalid format: {}. Please specify 'json', 'markdown' or 'notice'",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Markdown => write!(f, "markdown"),
            OutputFormat::Notice => write!(f, "notice"),
        }
    }
}
