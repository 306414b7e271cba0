mod cli;
mod config;

use cli::Args;
use config::ConfigFile;
use licence_detector::adapters::outbound::classifier::TextLicenceClassifier;
use licence_detector::adapters::outbound::console::StderrProgressReporter;
use licence_detector::adapters::outbound::filesystem::FileSystemReader;
use licence_detector::application::dto::{DetectionRequest, OutputFormat};
use licence_detector::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use licence_detector::application::use_cases::DetectDependenciesUseCase;
use licence_detector::licence_detection::domain::Overrides;
use licence_detector::ports::outbound::{ModuleGraphReader, PolicyReader, STDIN_SOURCE};
use licence_detector::shared::error::ExitCode;
use licence_detector::shared::Result;
use std::path::PathBuf;
use std::process;

/// Settings for one run after merging CLI flags over the config file
#[derive(Debug)]
struct Settings {
    input: PathBuf,
    rules: Option<PathBuf>,
    overrides: Option<PathBuf>,
    include_indirect: bool,
    format: OutputFormat,
    output: Option<PathBuf>,
}

impl Settings {
    fn merge(args: Args, config: ConfigFile) -> Result<Self> {
        let config_format = config.output_format()?;
        Ok(Self {
            input: args
                .input
                .or(config.input)
                .unwrap_or_else(|| PathBuf::from(STDIN_SOURCE)),
            rules: args.rules.or(config.rules),
            overrides: args.overrides.or(config.overrides),
            include_indirect: args.include_indirect || config.include_indirect.unwrap_or(false),
            format: args.format.or(config_format).unwrap_or_default(),
            output: args.output.or(config.output),
        })
    }
}

fn main() {
    if let Err(e) = run() {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::for_error(&e).as_i32());
    }
}

fn run() -> Result<()> {
    // Parse command-line arguments
    let mut args = Args::parse_args();

    // Load configuration; CLI flags take precedence
    let config = match args.config.take() {
        Some(path) => config::load_config_from_path(&path)?,
        None => config::discover_config(&std::env::current_dir()?)?.unwrap_or_default(),
    };
    let settings = Settings::merge(args, config)?;

    // Create adapters (Dependency Injection)
    let reader = FileSystemReader::new();
    let progress_reporter = StderrProgressReporter::new();

    // Load inputs
    let modules = reader.read_module_graph(&settings.input)?;
    let rules = reader.read_rules(settings.rules.as_deref())?;
    let overrides = match settings.overrides.as_deref() {
        Some(path) => reader.read_overrides(path)?,
        None => Overrides::new(),
    };

    // Execute use case
    let use_case = DetectDependenciesUseCase::new(TextLicenceClassifier::new(), progress_reporter);
    let request = DetectionRequest::new(modules, rules, overrides, settings.include_indirect);
    let dependencies = use_case.execute(request)?;

    // Format and present the report
    eprintln!("{}", FormatterFactory::progress_message(settings.format));
    let formatter = FormatterFactory::create(settings.format);
    let report = formatter.format(&dependencies)?;

    let presenter = PresenterFactory::create(PresenterType::from_output(settings.output));
    presenter.present(&report)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn args(argv: &[&str]) -> Args {
        let mut full = vec!["licence-detector"];
        full.extend_from_slice(argv);
        Args::try_parse_from(full).unwrap()
    }

    #[test]
    fn test_defaults_without_config() {
        let settings = Settings::merge(args(&[]), ConfigFile::default()).unwrap();
        assert_eq!(settings.input, PathBuf::from("-"));
        assert!(settings.rules.is_none());
        assert!(settings.overrides.is_none());
        assert!(!settings.include_indirect);
        assert_eq!(settings.format, OutputFormat::Markdown);
        assert!(settings.output.is_none());
    }

    #[test]
    fn test_config_fills_unset_flags() {
        let config = ConfigFile {
            input: Some(PathBuf::from("deps.json")),
            rules: Some(PathBuf::from("rules.json")),
            include_indirect: Some(true),
            format: Some("json".to_string()),
            ..ConfigFile::default()
        };
        let settings = Settings::merge(args(&[]), config).unwrap();
        assert_eq!(settings.input, PathBuf::from("deps.json"));
        assert_eq!(settings.rules, Some(PathBuf::from("rules.json")));
        assert!(settings.include_indirect);
        assert_eq!(settings.format, OutputFormat::Json);
    }

    #[test]
    fn test_cli_flags_beat_config() {
        let config = ConfigFile {
            input: Some(PathBuf::from("deps.json")),
            format: Some("json".to_string()),
            output: Some(PathBuf::from("report.json")),
            ..ConfigFile::default()
        };
        let settings = Settings::merge(
            args(&["-i", "other.json", "-f", "notice", "-o", "NOTICE.txt"]),
            config,
        )
        .unwrap();
        assert_eq!(settings.input, PathBuf::from("other.json"));
        assert_eq!(settings.format, OutputFormat::Notice);
        assert_eq!(settings.output, Some(PathBuf::from("NOTICE.txt")));
    }

    #[test]
    fn test_invalid_config_format() {
        let config = ConfigFile {
            format: Some("yaml".to_string()),
            ..ConfigFile::default()
        };
        assert!(Settings::merge(args(&[]), config).is_err());
    }
}
