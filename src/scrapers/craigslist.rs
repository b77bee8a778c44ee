use crate::error::{Result, ScoutError};
use crate::scrapers::traits::PageFetcher;
use crate::scrapers::types::SearchParams;
use async_trait::async_trait;
use reqwest::{Client, Url};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Fetches Craigslist apartment ("apa") search pages over HTTPS
pub struct CraigslistClient {
    client: Client,
    params: SearchParams,
}

impl CraigslistClient {
    pub fn new(params: SearchParams) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent("Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36")
            .build()
            .map_err(|source| ScoutError::Http {
                url: params.site_root(),
                source,
            })?;

        Ok(Self { client, params })
    }

    /// Build the search URL for the page starting at `offset`.
    ///
    /// Parameter order is fixed: query, min/max bedrooms, min/max bathrooms, s.
    /// Bathrooms go out as min=max, which makes the filter exact.
    pub fn search_url(&self, offset: u32) -> Result<Url> {
        let raw = format!(
            "{}/search/{}/apa",
            self.params.site_root(),
            self.params.subdomain
        );
        let mut url = Url::parse(&raw).map_err(|e| ScoutError::InvalidUrl(format!("{raw}: {e}")))?;

        let bedrooms = self.params.bedrooms.to_string();
        let bathrooms = self.params.min_bathrooms.to_string();
        url.query_pairs_mut()
            .append_pair("query", &self.params.query)
            .append_pair("min_bedrooms", &bedrooms)
            .append_pair("max_bedrooms", &bedrooms)
            .append_pair("min_bathrooms", &bathrooms)
            .append_pair("max_bathrooms", &bathrooms)
            .append_pair("s", &offset.to_string());

        Ok(url)
    }
}

#[async_trait]
impl PageFetcher for CraigslistClient {
    async fn fetch_page(&self, offset: u32) -> Result<String> {
        let url = self.search_url(offset)?;
        info!("Querying Craigslist at {}", url);

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|source| ScoutError::Http {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!("Craigslist returned status: {}", status);
            return Err(ScoutError::Status {
                url: url.to_string(),
                status,
            });
        }

        let html = response.text().await.map_err(|source| ScoutError::Http {
            url: url.to_string(),
            source,
        })?;

        debug!("Downloaded {} bytes of HTML", html.len());
        Ok(html)
    }

    fn source_name(&self) -> &'static str {
        "Craigslist"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_url_parameter_order() {
        let client = CraigslistClient::new(SearchParams::default()).unwrap();
        let url = client.search_url(200).unwrap();

        assert_eq!(
            url.as_str(),
            "https://chicago.craigslist.org/search/wcl/apa?query=aurora\
             &min_bedrooms=2&max_bedrooms=2&min_bathrooms=1&max_bathrooms=1&s=200"
        );
    }

    #[test]
    fn test_search_url_encodes_query() {
        let params = SearchParams {
            query: "river north".to_string(),
            ..SearchParams::default()
        };
        let client = CraigslistClient::new(params).unwrap();
        let url = client.search_url(0).unwrap();

        assert!(url.as_str().contains("query=river+north"));
        assert!(!url.as_str().contains(' '));
    }

    #[test]
    fn test_search_url_uses_base_url_override() {
        let params = SearchParams {
            base_url: Some("http://127.0.0.1:9999".to_string()),
            ..SearchParams::default()
        };
        let client = CraigslistClient::new(params).unwrap();
        let url = client.search_url(0).unwrap();

        assert!(url.as_str().starts_with("http://127.0.0.1:9999/search/wcl/apa?"));
    }

    #[test]
    fn test_search_url_rejects_bad_base_url() {
        let params = SearchParams {
            base_url: Some("not a url".to_string()),
            ..SearchParams::default()
        };
        let client = CraigslistClient::new(params).unwrap();
        assert!(matches!(client.search_url(0), Err(ScoutError::InvalidUrl(_))));
    }
}
