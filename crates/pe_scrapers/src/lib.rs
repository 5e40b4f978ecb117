pub mod fetch;
pub mod logging;
pub mod manager;
pub mod scrapers;

pub use fetch::{HttpFetcher, StaticFetcher, DEFAULT_USER_AGENT};
pub use logging::init_logging;
pub use manager::SourceManager;
pub use scrapers::{SiteConfig, SiteScraper};
