use crate::error::Result;
use async_trait::async_trait;

/// Source of raw search-result pages.
/// The collector only talks to this, so tests can hand it canned markup.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch the results page starting at `offset` and return its body
    async fn fetch_page(&self, offset: u32) -> Result<String>;

    /// Get the name of the source
    fn source_name(&self) -> &'static str;
}
