use crate::licence_detection::domain::ModuleRecord;
use crate::shared::Result;
use std::path::Path;

/// Source name that selects standard input instead of a file
pub const STDIN_SOURCE: &str = "-";

/// ModuleGraphReader port for loading the resolved module list
///
/// This port abstracts where the module graph comes from (a file written
/// by `go list -m -json all`, or the same stream piped on stdin).
pub trait ModuleGraphReader {
    /// Reads every dependency record from `source`, in input order
    ///
    /// # Arguments
    /// * `source` - Path of the module graph, or `-` for stdin
    ///
    /// # Errors
    /// Returns an error if:
    /// - The source cannot be read
    /// - The content is not a stream of module JSON objects
    fn read_module_graph(&self, source: &Path) -> Result<Vec<ModuleRecord>>;
}
