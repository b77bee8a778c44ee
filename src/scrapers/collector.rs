use crate::error::{Result, ScoutError};
use crate::models::Listing;
use crate::scrapers::page::ResultsPage;
use crate::scrapers::traits::PageFetcher;
use crate::scrapers::types::SearchParams;
use tracing::{debug, info};

enum CollectState {
    Fetching { offset: u32 },
    Done,
}

/// Walks the search result pages one at a time and gathers the eligible listings
pub struct Collector<'a, F: PageFetcher> {
    fetcher: &'a F,
    params: &'a SearchParams,
}

impl<'a, F: PageFetcher> Collector<'a, F> {
    pub fn new(fetcher: &'a F, params: &'a SearchParams) -> Self {
        Self { fetcher, params }
    }

    /// Fetch pages from offset 0 until pagination says stop.
    /// Any fetch or page error ends the run.
    pub async fn collect(&self) -> Result<Vec<Listing>> {
        info!("Starting {} collection", self.fetcher.source_name());

        let mut listings = Vec::new();
        let mut state = CollectState::Fetching { offset: 0 };
        let mut pages = 0;

        while let CollectState::Fetching { offset } = state {
            let html = self.fetcher.fetch_page(offset).await?;
            let page = ResultsPage::parse(&html, self.params.include_nearby)?;
            pages += 1;

            debug!(
                "Page at offset {}: {} listings, range to {} of {}",
                offset,
                page.listings.len(),
                page.pagination.range_to,
                page.pagination.total_count
            );
            listings.extend(page.listings);

            state = if page.pagination.has_more(self.params.max_results) {
                let stride = self.params.page_stride;
                let next = offset
                    .checked_add(stride)
                    .ok_or(ScoutError::OffsetOverflow { offset, stride })?;
                CollectState::Fetching { offset: next }
            } else {
                CollectState::Done
            };
        }

        info!("Collected {} listings from {} pages", listings.len(), pages);
        Ok(listings)
    }
}
