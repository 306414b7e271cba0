/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, console, classifier backend).
pub mod licence_classifier;
pub mod module_graph_reader;
pub mod output_presenter;
pub mod policy_reader;
pub mod progress_reporter;
pub mod report_formatter;

pub use licence_classifier::LicenceClassifier;
pub use module_graph_reader::{ModuleGraphReader, STDIN_SOURCE};
pub use output_presenter::OutputPresenter;
pub use policy_reader::PolicyReader;
pub use progress_reporter::ProgressReporter;
pub use report_formatter::ReportFormatter;
