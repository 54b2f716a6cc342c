/// ProgressReporter port for operator-facing console notices
///
/// Every notice goes to the console only; durable failure details are
/// written separately through the `ErrorLog` port.
pub trait ProgressReporter {
    /// Reports an informational notice (stage started, repository skipped, ...)
    fn report(&self, message: &str);

    /// Reports batch position before a repository is processed
    ///
    /// # Arguments
    /// * `current` - 1-based index of the repository being processed
    /// * `total` - Number of repositories in the batch
    /// * `message` - Optional message to include (usually the repository name)
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports a stage that finished successfully
    fn report_success(&self, message: &str);

    /// Reports a failure notice; the batch keeps going afterwards
    fn report_error(&self, message: &str);

    /// Reports the end of the batch
    fn report_completion(&self, message: &str);
}
