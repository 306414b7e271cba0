use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to tell a licence policy failure apart
/// from a broken invocation or an environment problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - every dependency passed the licence policy
    Success = 0,
    /// At least one dependency carries a licence the policy rejects
    PolicyViolation = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (unreadable input, bad override, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Chooses the exit code for an error returned by the application
    pub fn for_error(error: &anyhow::Error) -> Self {
        match error.downcast_ref::<DetectorError>() {
            Some(DetectorError::LicencePolicyViolation { .. }) => ExitCode::PolicyViolation,
            _ => ExitCode::ApplicationError,
        }
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::PolicyViolation => write!(f, "Policy Violation (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for dependency licence detection.
///
/// The first three variants abort a detection run; the remaining ones are
/// raised by the adapters that feed the run or write its report.
#[derive(Debug, Error)]
pub enum DetectorError {
    #[error("Override licence file for {module} cannot be used: {path}\nReason: {reason}\n\n💡 Hint: licenceFile is resolved relative to the module directory and must name an existing, readable file inside it")]
    UnreadableLicenceOverride {
        module: String,
        path: PathBuf,
        reason: String,
    },

    #[error("Licence {licence} used by {module} is not allowed by the licence rules\n\n💡 Hint: Add an override with the correct licenceType, or an allow rule if this licence is acceptable")]
    LicencePolicyViolation { module: String, licence: String },

    #[error("Failed to read licence data for {module}: {path}\nDetails: {details}")]
    ClassificationIoFailure {
        module: String,
        path: PathBuf,
        details: String,
    },

    #[error("Failed to parse module graph: {source_name}\nDetails: {details}\n\n💡 Hint: Provide the output of `go list -m -json all`")]
    ModuleGraphParseError { source_name: String, details: String },

    #[error("Failed to parse rules file: {path}\nDetails: {details}")]
    RulesParseError { path: PathBuf, details: String },

    #[error("Failed to parse overrides file: {path} (line {line})\nDetails: {details}\n\n💡 Hint: Each line must be a JSON object with at least a \"name\" field")]
    OverridesParseError {
        path: PathBuf,
        line: usize,
        details: String,
    },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },
}

impl DetectorError {
    /// Names the module behind a classification failure raised by a
    /// backend that only knew the file path
    pub fn for_module(self, module_path: &str) -> Self {
        match self {
            DetectorError::ClassificationIoFailure { module, path, details } if module.is_empty() => {
                DetectorError::ClassificationIoFailure {
                    module: module_path.to_string(),
                    path,
                    details,
                }
            }
            other => other,
        }
    }
}
