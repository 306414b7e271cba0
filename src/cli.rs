use clap::Parser;
use licence_detector::application::dto::OutputFormat;
use std::path::PathBuf;

/// Detect, classify and validate the licences of Go module dependencies
#[derive(Parser, Debug)]
#[command(name = "licence-detector")]
#[command(version)]
#[command(
    about = "Detect, classify and validate the licences of Go module dependencies",
    long_about = "Reads the output of `go list -m -json all`, determines the licence of every \
                  dependency, checks it against the licence rules and renders a report.\n\n\
                  Exit codes: 0 success, 1 licence policy violation, 2 invalid arguments, \
                  3 any other error."
)]
pub struct Args {
    /// Module graph produced by `go list -m -json all` ("-" reads stdin)
    #[arg(short = 'i', long = "in", value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Licence rules JSON file (defaults to the built-in rules)
    #[arg(short, long, value_name = "PATH")]
    pub rules: Option<PathBuf>,

    /// Overrides file: one JSON object per line
    #[arg(long, value_name = "PATH")]
    pub overrides: Option<PathBuf>,

    /// Include indirect dependencies
    #[arg(long)]
    pub include_indirect: bool,

    /// Report format: json, markdown or notice [default: markdown]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Configuration file (defaults to licence-detector.config.yml in the current directory)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
