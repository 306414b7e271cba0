use crate::shared::Result;
use std::path::Path;

/// LicenceClassifier port for identifying a licence from its text
///
/// The classifier does not search for licence files; callers hand it a
/// resolved path, or an empty path when the module has none.
pub trait LicenceClassifier {
    /// Classifies the licence text stored at `licence_file`
    ///
    /// # Returns
    /// * `Ok(Some(id))` - the best-guess licence identifier (SPDX short form)
    /// * `Ok(None)` - empty or missing path, or text that matches no known licence
    ///
    /// # Errors
    /// Returns `ClassificationIoFailure` if the file exists but cannot be read.
    /// "Unknown licence" is never an error.
    fn classify(&self, licence_file: &Path) -> Result<Option<String>>;
}

impl<T: LicenceClassifier + ?Sized> LicenceClassifier for &T {
    fn classify(&self, licence_file: &Path) -> Result<Option<String>> {
        (**self).classify(licence_file)
    }
}
