use serde::Serialize;
use std::path::PathBuf;

/// Licence type recorded when neither an override nor the classifier
/// could name the licence. It is still subject to the licence rules.
pub const UNKNOWN_LICENCE: &str = "UNKNOWN";

/// DependencyInfo - a detected, overridden and validated dependency
///
/// A finalized value always carries a non-empty `licence_type` that the
/// rule engine accepted; the resolver never hands out anything else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DependencyInfo {
    /// Module path from the module graph; `name` may be an override
    #[serde(skip)]
    pub module_path: String,
    pub name: String,
    pub version: String,
    pub version_time: String,
    pub dir: PathBuf,
    pub licence_type: String,
    /// Licence text used as evidence; `None` when no file was found
    pub licence_file: Option<PathBuf>,
    pub url: String,
}
