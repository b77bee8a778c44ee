//! Reading one Craigslist results page: which rows count, and where the
//! page sits in the overall result set.

use crate::error::{Result, ScoutError};
use crate::models::Listing;
use chrono::{DateTime, Utc};
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;
use tracing::debug;

static RESULT_ROW: LazyLock<Selector> = LazyLock::new(|| Selector::parse(".result-row").unwrap());
static NEARBY_BANNER: LazyLock<Selector> = LazyLock::new(|| Selector::parse(".ban.nearby").unwrap());
static RESULT_TITLE: LazyLock<Selector> = LazyLock::new(|| Selector::parse(".result-title").unwrap());
static RESULT_PRICE: LazyLock<Selector> = LazyLock::new(|| Selector::parse("span.result-price").unwrap());
static RANGE_TO: LazyLock<Selector> = LazyLock::new(|| Selector::parse(".rangeTo").unwrap());
static TOTAL_COUNT: LazyLock<Selector> = LazyLock::new(|| Selector::parse(".totalcount").unwrap());

/// Position of a page within the full result set, as reported by the site
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    /// Index of the last result shown so far
    pub range_to: u32,
    /// Number of results matching the search
    pub total_count: u32,
}

/// Everything the collector needs from one fetched page
#[derive(Debug, Clone)]
pub struct ResultsPage {
    pub listings: Vec<Listing>,
    pub pagination: PaginationState,
}

impl ResultsPage {
    /// Parse raw page markup. Fails if the pagination markers are missing.
    pub fn parse(html: &str, include_nearby: bool) -> Result<Self> {
        let document = Html::parse_document(html);
        let listings = extract_eligible(&document, include_nearby);
        let pagination = read_pagination(&document)?;

        Ok(Self {
            listings,
            pagination,
        })
    }
}

/// Collect the result rows that count toward the analysis.
///
/// With `include_nearby` every row is returned. Without it, only rows that
/// come before the "nearby areas" banner in document order are kept; a page
/// with no banner keeps all of its rows.
pub fn extract_eligible(document: &Html, include_nearby: bool) -> Vec<Listing> {
    let scraped_at = Utc::now();

    let banner = if include_nearby {
        None
    } else {
        document.select(&NEARBY_BANNER).next()
    };

    let rows: Vec<ElementRef> = match banner {
        Some(banner) => document
            .root_element()
            .descendants()
            .take_while(|node| node.id() != banner.id())
            .filter_map(ElementRef::wrap)
            .filter(|element| RESULT_ROW.matches(element))
            .collect(),
        None => {
            if !include_nearby {
                debug!("No nearby section on page, keeping all rows");
            }
            document.select(&RESULT_ROW).collect()
        }
    };

    debug!("Found {} eligible result rows", rows.len());

    rows.into_iter()
        .map(|row| listing_from_row(row, scraped_at))
        .collect()
}

fn listing_from_row(row: ElementRef, scraped_at: DateTime<Utc>) -> Listing {
    let title_el = row.select(&RESULT_TITLE).next();

    Listing {
        pid: row.value().attr("data-pid").map(str::to_string),
        title: title_el
            .map(|el| el.text().collect::<String>().trim().to_string())
            .filter(|title| !title.is_empty()),
        url: title_el
            .and_then(|el| el.value().attr("href"))
            .map(str::to_string),
        price_text: row
            .select(&RESULT_PRICE)
            .next()
            .map(|el| el.text().collect::<String>().trim().to_string()),
        scraped_at,
    }
}

/// Read the "range to" and "total count" markers
pub fn read_pagination(document: &Html) -> Result<PaginationState> {
    Ok(PaginationState {
        range_to: read_count(document, &RANGE_TO, "rangeTo")?,
        total_count: read_count(document, &TOTAL_COUNT, "totalcount")?,
    })
}

fn read_count(document: &Html, selector: &Selector, marker: &'static str) -> Result<u32> {
    let element = document
        .select(selector)
        .next()
        .ok_or(ScoutError::MissingMarker { marker })?;

    let text = element.text().collect::<String>();
    text.trim()
        .replace(',', "")
        .parse()
        .map_err(|_| ScoutError::InvalidMarker {
            marker,
            text: text.clone(),
        })
}
