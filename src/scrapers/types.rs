use crate::error::{Result, ScoutError};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Environment variable naming an optional JSON file of search parameters
pub const CONFIG_ENV: &str = "RENT_SCOUT_CONFIG";

/// Search parameters for one apartment-price run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchParams {
    /// Craigslist site, e.g. "chicago" for chicago.craigslist.org
    pub domain: String,
    /// Sub-area within the site, e.g. "wcl" (west chicagoland)
    pub subdomain: String,
    /// Free-text search query
    pub query: String,
    /// Exact bedroom count (sent as both min and max)
    pub bedrooms: u32,
    /// Bathroom count. Sent as both min and max, so it filters exactly.
    pub min_bathrooms: u32,
    /// Stop paginating once this many results have been shown
    pub max_results: u32,
    /// Offset increment between page fetches
    pub page_stride: u32,
    /// Keep the "nearby areas" rows Craigslist appends after the real results
    pub include_nearby: bool,
    /// Replaces `https://{domain}.craigslist.org` when set
    pub base_url: Option<String>,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            domain: "chicago".to_string(),
            subdomain: "wcl".to_string(),
            query: "aurora".to_string(),
            bedrooms: 2,
            min_bathrooms: 1,
            max_results: 1000,
            page_stride: 100,
            include_nearby: true,
            base_url: None,
        }
    }
}

impl SearchParams {
    /// Load parameters from the file named by `RENT_SCOUT_CONFIG`, or use the defaults
    pub fn load() -> Result<Self> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::from_path(path),
            None => {
                info!("{} not set, using default search parameters", CONFIG_ENV);
                Ok(Self::default())
            }
        }
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading search parameters from {}", path.display());
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    /// Parse and validate a JSON document. Missing fields take their defaults.
    pub fn from_json(raw: &str) -> Result<Self> {
        let params: Self = serde_json::from_str(raw)?;
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<()> {
        let reason = if self.domain.trim().is_empty() {
            "domain must not be empty"
        } else if self.subdomain.trim().is_empty() {
            "subdomain must not be empty"
        } else if self.page_stride == 0 {
            "page_stride must be greater than zero"
        } else if self.max_results == 0 {
            "max_results must be greater than zero"
        } else {
            return Ok(());
        };

        Err(ScoutError::InvalidConfig {
            reason: reason.to_string(),
        })
    }

    /// Scheme and host that search URLs are built on
    pub fn site_root(&self) -> String {
        match &self.base_url {
            Some(base) => base.trim_end_matches('/').to_string(),
            None => format!("https://{}.craigslist.org", self.domain),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_search() {
        let params = SearchParams::default();
        assert_eq!(params.domain, "chicago");
        assert_eq!(params.subdomain, "wcl");
        assert_eq!(params.query, "aurora");
        assert_eq!(params.bedrooms, 2);
        assert_eq!(params.min_bathrooms, 1);
        assert_eq!(params.max_results, 1000);
        assert_eq!(params.page_stride, 100);
        assert!(params.include_nearby);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_from_json_fills_missing_fields() {
        let params = SearchParams::from_json(r#"{"domain": "boston", "bedrooms": 3}"#).unwrap();
        assert_eq!(params.domain, "boston");
        assert_eq!(params.bedrooms, 3);
        assert_eq!(params.subdomain, "wcl");
        assert_eq!(params.page_stride, 100);
    }

    #[test]
    fn test_from_json_rejects_zero_stride() {
        let err = SearchParams::from_json(r#"{"page_stride": 0}"#).unwrap_err();
        assert!(matches!(err, ScoutError::InvalidConfig { .. }));
    }

    #[test]
    fn test_from_json_rejects_malformed_document() {
        let err = SearchParams::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ScoutError::Config(_)));
    }

    #[test]
    fn test_site_root() {
        let mut params = SearchParams::default();
        assert_eq!(params.site_root(), "https://chicago.craigslist.org");

        params.base_url = Some("http://127.0.0.1:8080/".to_string());
        assert_eq!(params.site_root(), "http://127.0.0.1:8080");
    }
}
