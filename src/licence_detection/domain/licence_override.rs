use serde::Deserialize;
use std::collections::HashMap;

/// Override - operator-supplied corrections for one module
///
/// Every field is optional: `None` means "keep what detection found".
/// A set field replaces the detected value outright.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Override {
    pub name: Option<String>,
    pub version: Option<String>,
    pub licence_type: Option<String>,
    /// Path of the licence text, relative to the module directory
    pub licence_file: Option<String>,
    pub url: Option<String>,
}

/// Overrides keyed by module path
pub type Overrides = HashMap<String, Override>;

impl Override {
    pub fn with_licence_type(mut self, licence_type: impl Into<String>) -> Self {
        self.licence_type = Some(licence_type.into());
        self
    }

    pub fn with_licence_file(mut self, licence_file: impl Into<String>) -> Self {
        self.licence_file = Some(licence_file.into());
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Treats blank strings as unset
    ///
    /// Override files written by hand often carry `"url": ""` for fields
    /// the author did not mean to override.
    pub fn normalized(self) -> Self {
        fn keep(value: Option<String>) -> Option<String> {
            value.filter(|v| !v.trim().is_empty())
        }

        Self {
            name: keep(self.name),
            version: keep(self.version),
            licence_type: keep(self.licence_type),
            licence_file: keep(self.licence_file),
            url: keep(self.url),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_sparse_override() {
        let ov: Override = serde_json::from_str(
            r#"{"name": "github.com/gorhill/cronexpr", "licenceType": "GPL-3.0"}"#,
        )
        .unwrap();
        assert_eq!(ov.name.as_deref(), Some("github.com/gorhill/cronexpr"));
        assert_eq!(ov.licence_type.as_deref(), Some("GPL-3.0"));
        assert!(ov.version.is_none());
        assert!(ov.licence_file.is_none());
        assert!(ov.url.is_none());
    }

    #[test]
    fn test_deserialize_rejects_unknown_fields() {
        let result: Result<Override, _> =
            serde_json::from_str(r#"{"name": "x", "licenseType": "MIT"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_normalized_drops_blank_fields() {
        let ov = Override::default()
            .with_name("github.com/a/b")
            .with_url("")
            .with_licence_type("  ")
            .normalized();
        assert_eq!(ov.name.as_deref(), Some("github.com/a/b"));
        assert!(ov.url.is_none());
        assert!(ov.licence_type.is_none());
    }

    #[test]
    fn test_builders() {
        let ov = Override::default()
            .with_version("v2.0.0")
            .with_licence_file("GPLv3")
            .with_url("http://example.com/go-spew");
        assert_eq!(ov.version.as_deref(), Some("v2.0.0"));
        assert_eq!(ov.licence_file.as_deref(), Some("GPLv3"));
        assert_eq!(ov.url.as_deref(), Some("http://example.com/go-spew"));
    }
}
