//! Average and median apartment rents from Craigslist search results.

pub mod analytics;
pub mod error;
pub mod models;
pub mod scrapers;

pub use error::{Result, ScoutError};
