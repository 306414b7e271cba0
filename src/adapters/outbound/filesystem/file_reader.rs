use crate::licence_detection::domain::{ModuleRecord, Override, Overrides};
use crate::licence_detection::policies::{RuleEngine, RulesDocument};
use crate::ports::outbound::{ModuleGraphReader, PolicyReader, STDIN_SOURCE};
use crate::shared::error::DetectorError;
use crate::shared::security::read_text_file;
use crate::shared::Result;
use serde::Deserialize;
use std::collections::HashMap;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Rules used when no rules file is supplied
const DEFAULT_RULES: &str = include_str!("../../../../assets/default_rules.json");

/// Name reported for the built-in rules in error messages
const DEFAULT_RULES_NAME: &str = "<built-in rules>";

/// One object of the `go list -m -json all` stream
///
/// Fields this tool has no use for (GoMod, GoVersion, Update, ...) are ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct GoModule {
    path: String,
    #[serde(default)]
    version: String,
    #[serde(default)]
    time: Option<String>,
    #[serde(default)]
    dir: Option<String>,
    #[serde(default)]
    indirect: bool,
    #[serde(default)]
    main: bool,
    #[serde(default)]
    replace: Option<Box<GoModule>>,
}

impl GoModule {
    /// Converts to a record, taking version data from the replacement if any
    fn into_record(self) -> ModuleRecord {
        let source = match self.replace {
            Some(replacement) => *replacement,
            None => GoModule {
                path: String::new(),
                version: self.version,
                time: self.time,
                dir: self.dir,
                indirect: false,
                main: false,
                replace: None,
            },
        };

        ModuleRecord::new(
            self.path,
            source.version,
            source.time.unwrap_or_default(),
            source.dir.map(PathBuf::from).unwrap_or_default(),
            self.indirect,
        )
    }
}

/// FileSystemReader adapter for reading detection inputs
///
/// This adapter implements both ModuleGraphReader and PolicyReader ports,
/// reading the module graph, the rules file and the overrides file with
/// the shared file-safety checks applied.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    fn read_file(&self, path: &Path, file_type: &str) -> Result<String> {
        read_text_file(path, file_type).map_err(|e| {
            DetectorError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }

    fn read_source(&self, source: &Path) -> Result<String> {
        if source == Path::new(STDIN_SOURCE) {
            let mut content = String::new();
            io::stdin()
                .read_to_string(&mut content)
                .map_err(|e| anyhow::anyhow!("Failed to read module graph from stdin: {}", e))?;
            return Ok(content);
        }
        self.read_file(source, "module graph")
    }

    /// Parses a concatenated stream of module JSON objects
    pub fn parse_module_graph(content: &str, source_name: &str) -> Result<Vec<ModuleRecord>> {
        let stream = serde_json::Deserializer::from_str(content).into_iter::<GoModule>();

        let mut records = Vec::new();
        for item in stream {
            let module = item.map_err(|e| DetectorError::ModuleGraphParseError {
                source_name: source_name.to_string(),
                details: e.to_string(),
            })?;
            if module.main {
                continue;
            }
            records.push(module.into_record());
        }
        Ok(records)
    }

    /// Parses a rules document and compiles it
    pub fn parse_rules(content: &str, path: &Path) -> Result<RuleEngine> {
        let parse_error = |details: String| DetectorError::RulesParseError {
            path: path.to_path_buf(),
            details,
        };

        let document: RulesDocument =
            serde_json::from_str(content).map_err(|e| parse_error(e.to_string()))?;
        RuleEngine::from_document(document).map_err(|e| parse_error(e.to_string()).into())
    }

    /// Parses newline-delimited override objects
    pub fn parse_overrides(content: &str, path: &Path) -> Result<Overrides> {
        let parse_error = |line: usize, details: String| DetectorError::OverridesParseError {
            path: path.to_path_buf(),
            line,
            details,
        };

        let mut overrides = Overrides::new();
        let mut first_seen: HashMap<String, usize> = HashMap::new();

        for (idx, raw) in content.lines().enumerate() {
            let line_no = idx + 1;
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }

            let entry: Override = serde_json::from_str(line)
                .map_err(|e| parse_error(line_no, e.to_string()))?;
            let entry = entry.normalized();

            let name = entry
                .name
                .clone()
                .ok_or_else(|| parse_error(line_no, "missing field `name`".to_string()))?;

            if let Some(previous) = first_seen.insert(name.clone(), line_no) {
                return Err(parse_error(
                    line_no,
                    format!(
                        "duplicate override for {} (first defined on line {})",
                        name, previous
                    ),
                )
                .into());
            }
            overrides.insert(name, entry);
        }

        Ok(overrides)
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ModuleGraphReader for FileSystemReader {
    fn read_module_graph(&self, source: &Path) -> Result<Vec<ModuleRecord>> {
        let content = self.read_source(source)?;
        let source_name = if source == Path::new(STDIN_SOURCE) {
            "<stdin>".to_string()
        } else {
            source.display().to_string()
        };
        Self::parse_module_graph(&content, &source_name)
    }
}

impl PolicyReader for FileSystemReader {
    fn read_rules(&self, path: Option<&Path>) -> Result<RuleEngine> {
        match path {
            Some(path) => {
                let content = self.read_file(path, "rules file")?;
                Self::parse_rules(&content, path)
            }
            None => Self::parse_rules(DEFAULT_RULES, Path::new(DEFAULT_RULES_NAME)),
        }
    }

    fn read_overrides(&self, path: &Path) -> Result<Overrides> {
        let content = self.read_file(path, "overrides file")?;
        Self::parse_overrides(&content, path)
    }
}
