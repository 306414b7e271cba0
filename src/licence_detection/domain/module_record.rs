use std::path::PathBuf;

/// ModuleRecord - one resolved module as reported by the module graph
///
/// This is raw input: nothing about it has been classified or validated.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ModuleRecord {
    /// Module path, e.g. `github.com/davecgh/go-spew`
    pub path: String,
    /// Resolved version, possibly a pseudo-version
    pub version: String,
    /// Timestamp of the resolved version (advisory)
    pub version_time: String,
    /// Directory holding the module source; empty when it was never downloaded
    pub dir: PathBuf,
    /// Whether the module is only pulled in transitively
    pub indirect: bool,
}

impl ModuleRecord {
    pub fn new(
        path: impl Into<String>,
        version: impl Into<String>,
        version_time: impl Into<String>,
        dir: impl Into<PathBuf>,
        indirect: bool,
    ) -> Self {
        Self {
            path: path.into(),
            version: version.into(),
            version_time: version_time.into(),
            dir: dir.into(),
            indirect,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_record_new() {
        let record = ModuleRecord::new(
            "github.com/davecgh/go-spew",
            "v1.1.0",
            "2016-10-29T20:57:26Z",
            "/go/pkg/mod/github.com/davecgh/go-spew@v1.1.0",
            true,
        );
        assert_eq!(record.path, "github.com/davecgh/go-spew");
        assert_eq!(record.version, "v1.1.0");
        assert_eq!(record.version_time, "2016-10-29T20:57:26Z");
        assert_eq!(
            record.dir,
            PathBuf::from("/go/pkg/mod/github.com/davecgh/go-spew@v1.1.0")
        );
        assert!(record.indirect);
    }
}
