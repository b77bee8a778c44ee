pub mod collector;
pub mod craigslist;
pub mod page;
pub mod pagination;
pub mod traits;
pub mod types;

pub use collector::Collector;
pub use craigslist::CraigslistClient;
pub use page::{PaginationState, ResultsPage};
pub use pagination::should_continue;
pub use traits::PageFetcher;
pub use types::SearchParams;
