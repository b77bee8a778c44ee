pub mod price;
pub mod report;
pub mod stats;

pub use price::{collect_prices, extract_price};
pub use report::Report;
pub use stats::{average, format_money, median};
