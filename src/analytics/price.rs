use crate::error::{Result, ScoutError};
use crate::models::Listing;
use tracing::debug;

/// Price of a listing in dollars.
///
/// A listing without a price element yields `Ok(None)` and is left out of
/// the statistics. A price element whose text is not a number is an error,
/// since it means the page no longer looks the way we expect.
pub fn extract_price(listing: &Listing) -> Result<Option<f64>> {
    let Some(text) = listing.price_text.as_deref() else {
        return Ok(None);
    };

    parse_price(text).map(Some).map_err(|err| match err {
        ScoutError::InvalidPrice { text, .. } => ScoutError::InvalidPrice {
            pid: listing.pid.clone(),
            text,
        },
        other => other,
    })
}

/// Parse "$1,250" style text
pub fn parse_price(text: &str) -> Result<f64> {
    let cleaned: String = text
        .trim()
        .trim_start_matches('$')
        .chars()
        .filter(|c| *c != ',')
        .collect();

    match cleaned.parse::<f64>() {
        Ok(price) if price.is_finite() && price >= 0.0 => Ok(price),
        _ => Err(ScoutError::InvalidPrice {
            pid: None,
            text: text.to_string(),
        }),
    }
}

/// Prices of every listing that has one, in listing order
pub fn collect_prices(listings: &[Listing]) -> Result<Vec<f64>> {
    let mut prices = Vec::with_capacity(listings.len());
    for listing in listings {
        match extract_price(listing)? {
            Some(price) => prices.push(price),
            None => debug!(
                "Skipping unpriced listing {} ({}) at {}, scraped {}",
                listing.pid.as_deref().unwrap_or("<no pid>"),
                listing.title.as_deref().unwrap_or("untitled"),
                listing.url.as_deref().unwrap_or("<no url>"),
                listing.scraped_at.to_rfc3339()
            ),
        }
    }
    Ok(prices)
}
