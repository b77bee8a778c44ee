use crate::analytics::price::collect_prices;
use crate::analytics::stats::{average, format_money, median};
use crate::error::Result;
use crate::models::Listing;
use crate::scrapers::types::SearchParams;
use std::fmt;

/// Summary of one run, ready to print
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub query: String,
    pub bedrooms: u32,
    pub bathrooms: u32,
    /// Listings collected, priced or not
    pub listing_count: usize,
    /// Listings that carried a price
    pub priced_count: usize,
    pub average: f64,
    pub median: f64,
}

impl Report {
    /// Price the listings and compute the summary.
    /// Fails on a malformed price or when no listing has a price.
    pub fn build(params: &SearchParams, listings: &[Listing]) -> Result<Self> {
        let prices = collect_prices(listings)?;
        let average = average(&prices)?;

        Ok(Self {
            query: params.query.clone(),
            bedrooms: params.bedrooms,
            bathrooms: params.min_bathrooms,
            listing_count: listings.len(),
            priced_count: prices.len(),
            average,
            median: median(&prices),
        })
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Analyzing {} apartments with the following parameters:",
            self.listing_count
        )?;
        writeln!(f, "\tSearch Query: \"{}\"", self.query)?;
        writeln!(f, "\tBedrooms: {}", self.bedrooms)?;
        writeln!(f, "\tBathrooms: {}", self.bathrooms)?;
        writeln!(f)?;
        writeln!(f, "Average Price: ${}", format_money(self.average))?;
        writeln!(f, "Median Price: ${}", format_money(self.median))?;
        writeln!(f)?;
        write!(f, "Done")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScoutError;
    use chrono::Utc;

    fn listing(price_text: Option<&str>) -> Listing {
        Listing {
            pid: None,
            title: None,
            url: None,
            price_text: price_text.map(str::to_string),
            scraped_at: Utc::now(),
        }
    }

    #[test]
    fn test_build_report() {
        let listings = vec![
            listing(Some("$1,000")),
            listing(None),
            listing(Some("$2,000")),
            listing(Some("$3,000")),
        ];
        let report = Report::build(&SearchParams::default(), &listings).unwrap();

        assert_eq!(report.listing_count, 4);
        assert_eq!(report.priced_count, 3);
        assert_eq!(report.average, 2000.0);
        assert_eq!(report.median, 2000.0);
    }

    #[test]
    fn test_build_report_without_prices_fails() {
        let listings = vec![listing(None)];
        let err = Report::build(&SearchParams::default(), &listings).unwrap_err();
        assert!(matches!(err, ScoutError::NoPrices));
    }

    #[test]
    fn test_display() {
        let report = Report {
            query: "aurora".to_string(),
            bedrooms: 2,
            bathrooms: 1,
            listing_count: 4,
            priced_count: 4,
            average: 1750.0,
            median: 1750.0,
        };

        let expected = "Analyzing 4 apartments with the following parameters:\n\
                        \tSearch Query: \"aurora\"\n\
                        \tBedrooms: 2\n\
                        \tBathrooms: 1\n\
                        \n\
                        Average Price: $1,750.00\n\
                        Median Price: $1,750.00\n\
                        \n\
                        Done";
        assert_eq!(report.to_string(), expected);
    }
}
