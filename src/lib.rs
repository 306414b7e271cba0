//! licence-detector - licence compliance for Go module dependencies
//!
//! This library inventories the dependencies listed by `go list -m -json all`,
//! determines each dependency's licence, validates it against an allow/deny
//! policy and produces a report, following hexagonal architecture and
//! Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`licence_detection`): Value objects, the licence rule engine,
//!   URL resolution and licence-file lookup
//! - **Application Layer** (`application`): The detection use case and factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use licence_detector::prelude::*;
//! use std::path::Path;
//!
//! # fn main() -> Result<()> {
//! // Create adapters
//! let reader = FileSystemReader::new();
//! let modules = reader.read_module_graph(Path::new("deps.json"))?;
//! let rules = reader.read_rules(None)?;
//!
//! // Create use case
//! let use_case = DetectDependenciesUseCase::new(
//!     TextLicenceClassifier::new(),
//!     StderrProgressReporter::new(),
//! );
//!
//! // Execute
//! let request = DetectionRequest::new(modules, rules, Overrides::new(), true);
//! let dependencies = use_case.execute(request)?;
//!
//! // Format output
//! let output = JsonFormatter::new().format(&dependencies)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod licence_detection;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::classifier::TextLicenceClassifier;
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{
        JsonFormatter, MarkdownFormatter, NoticeFormatter,
    };
    pub use crate::application::dto::{DetectionRequest, OutputFormat};
    pub use crate::application::use_cases::{detect, DetectDependenciesUseCase};
    pub use crate::licence_detection::domain::{
        DependencyInfo, DependencyList, ModuleRecord, Override, Overrides, UNKNOWN_LICENCE,
    };
    pub use crate::licence_detection::policies::{LicenceAlias, Rule, RuleAction, RuleEngine};
    pub use crate::licence_detection::services::{LicenceFileLocator, UrlResolver};
    pub use crate::ports::outbound::{
        LicenceClassifier, ModuleGraphReader, OutputPresenter, PolicyReader, ProgressReporter,
        ReportFormatter,
    };
    pub use crate::shared::error::{DetectorError, ExitCode};
    pub use crate::shared::Result;
}
