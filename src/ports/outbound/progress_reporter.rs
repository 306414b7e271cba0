/// ProgressReporter port for reporting progress during detection
///
/// This port abstracts user feedback (e.g., to stderr) while the module
/// list is being classified and validated.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports progress through the module list
    ///
    /// # Arguments
    /// * `current` - Number of modules processed so far
    /// * `total` - Number of modules to process
    /// * `message` - Optional message, usually the module path
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports a warning that does not stop the run
    fn report_warning(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
