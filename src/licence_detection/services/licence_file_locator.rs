use crate::shared::error::DetectorError;
use crate::shared::security::{validate_regular_file, validate_within_dir};
use crate::shared::Result;
use std::fs::{self, File};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Base names conventionally used for licence texts
const LICENCE_STEMS: &[&str] = &["license", "licence", "copying", "unlicense"];

/// Extensions accepted after the base name
const LICENCE_EXTENSIONS: &[&str] = &["txt", "md", "markdown", "rst"];

/// LicenceFileLocator service for finding the licence text of a module
///
/// Only the top level of the module directory is searched. Candidates are
/// visited in sorted order so that the same directory always yields the
/// same file.
pub struct LicenceFileLocator;

impl LicenceFileLocator {
    /// Searches `dir` for a conventionally named licence file
    ///
    /// # Returns
    /// * `Ok(Some(path))` - the first matching regular file
    /// * `Ok(None)` - `dir` is empty, missing or contains no licence file
    ///
    /// # Errors
    /// Returns `ClassificationIoFailure` if `dir` exists but cannot be listed
    pub fn find(module: &str, dir: &Path) -> Result<Option<PathBuf>> {
        if dir.as_os_str().is_empty() {
            return Ok(None);
        }

        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(Self::io_failure(module, dir, &e)),
        };

        let mut candidates = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| Self::io_failure(module, dir, &e))?;
            let is_file = entry.file_type().map(|t| t.is_file()).unwrap_or(false);
            if !is_file {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                if Self::is_licence_file_name(name) {
                    candidates.push(name.to_string());
                }
            }
        }

        candidates.sort();
        Ok(candidates.into_iter().next().map(|name| dir.join(name)))
    }

    /// Resolves an override's licence file against the module directory
    ///
    /// `relative` is joined onto `dir`; a leading `/` does not make it
    /// absolute. The result must be a readable regular file that stays
    /// inside `dir` once symlinks and `..` are resolved.
    ///
    /// # Errors
    /// Returns `UnreadableLicenceOverride` naming the module and the path
    pub fn resolve_override(module: &str, dir: &Path, relative: &str) -> Result<PathBuf> {
        let path = dir.join(relative.trim_start_matches('/'));

        let unreadable = |reason: String| -> anyhow::Error {
            DetectorError::UnreadableLicenceOverride {
                module: module.to_string(),
                path: path.clone(),
                reason,
            }
            .into()
        };

        validate_regular_file(&path, "override licence file")
            .map_err(|e| unreadable(e.to_string()))?;
        File::open(&path).map_err(|e| unreadable(e.to_string()))?;
        validate_within_dir(&path, dir).map_err(|e| unreadable(e.to_string()))?;

        Ok(path)
    }

    /// Whether `name` follows a licence file naming convention
    ///
    /// Accepts e.g. `LICENSE`, `licence.txt`, `COPYING`, `LICENSE-APACHE`,
    /// `LICENSE.rst`; comparison is case-insensitive.
    pub fn is_licence_file_name(name: &str) -> bool {
        let lower = name.to_ascii_lowercase();

        let base = match lower.rsplit_once('.') {
            Some((base, ext)) if LICENCE_EXTENSIONS.contains(&ext) => base,
            Some(_) => return false,
            None => lower.as_str(),
        };

        LICENCE_STEMS.iter().any(|stem| {
            base.strip_prefix(stem)
                .is_some_and(|rest| rest.is_empty() || (rest.len() > 1 && rest.starts_with('-')))
        })
    }

    fn io_failure(module: &str, dir: &Path, error: &std::io::Error) -> anyhow::Error {
        DetectorError::ClassificationIoFailure {
            module: module.to_string(),
            path: dir.to_path_buf(),
            details: error.to_string(),
        }
        .into()
    }
}
