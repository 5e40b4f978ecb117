use std::sync::Arc;

use pe_core::{EditorialSource, PageFetcher, Result};

use super::{SiteConfig, SiteScraper};

pub mod hani;
pub mod khan;

/// Korean outlets, the first one being the default.
pub static SITES: [&SiteConfig; 2] = [&hani::SITE, &khan::SITE];

/// Returns one scraper per configured outlet
pub fn get_scrapers(fetcher: Arc<dyn PageFetcher>) -> Result<Vec<Arc<dyn EditorialSource>>> {
    SITES
        .iter()
        .copied()
        .map(|site| {
            SiteScraper::new(site, fetcher.clone())
                .map(|scraper| Arc::new(scraper) as Arc<dyn EditorialSource>)
        })
        .collect()
}
