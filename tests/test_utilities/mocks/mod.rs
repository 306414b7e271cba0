/// Mock implementations for testing
mod mock_licence_classifier;
mod mock_progress_reporter;

pub use mock_licence_classifier::MockLicenceClassifier;
pub use mock_progress_reporter::MockProgressReporter;
