use licence_detector::prelude::*;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Mock LicenceClassifier keyed by licence file name
///
/// Files with no registered answer are reported as unrecognized. Every
/// path handed to the classifier is recorded, including empty ones.
#[derive(Default, Clone)]
pub struct MockLicenceClassifier {
    licences: HashMap<String, String>,
    failing: Option<String>,
    pub calls: Arc<Mutex<Vec<PathBuf>>>,
}

impl MockLicenceClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_licence(mut self, file_name: &str, licence: &str) -> Self {
        self.licences
            .insert(file_name.to_string(), licence.to_string());
        self
    }

    /// Makes classification of `file_name` fail with an I/O error
    pub fn failing_on(mut self, file_name: &str) -> Self {
        self.failing = Some(file_name.to_string());
        self
    }

    pub fn get_calls(&self) -> Vec<PathBuf> {
        self.calls.lock().unwrap().clone()
    }
}

impl LicenceClassifier for MockLicenceClassifier {
    fn classify(&self, licence_file: &Path) -> Result<Option<String>> {
        self.calls.lock().unwrap().push(licence_file.to_path_buf());

        let file_name = licence_file
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default();

        if self.failing.as_deref() == Some(file_name) {
            return Err(DetectorError::ClassificationIoFailure {
                module: String::new(),
                path: licence_file.to_path_buf(),
                details: "Permission denied (os error 13)".to_string(),
            }
            .into());
        }

        Ok(self.licences.get(file_name).cloned())
    }
}
