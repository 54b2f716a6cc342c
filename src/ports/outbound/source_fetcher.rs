use crate::shared::Result;
use async_trait::async_trait;
use std::path::Path;

/// SourceFetcher port for acquiring a repository checkout
///
/// # Async Support
/// Calls are awaited one at a time by the batch driver; implementations
/// must be `Send + Sync` so use cases can run on the tokio runtime.
#[async_trait]
pub trait SourceFetcher: Send + Sync {
    /// Performs a shallow (depth 1) checkout of `url` into `destination`
    ///
    /// # Errors
    /// Returns an error carrying the underlying cause if the checkout fails
    async fn fetch(&self, url: &str, destination: &Path) -> Result<()>;
}
