use chrono::{DateTime, Utc};

/// One apartment result row taken from a search page
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    /// Craigslist post id (`data-pid`)
    pub pid: Option<String>,
    pub title: Option<String>,
    pub url: Option<String>,
    /// Raw text of the row's price element, e.g. "$1,250". `None` when the row has no price.
    pub price_text: Option<String>,
    pub scraped_at: DateTime<Utc>,
}
