use std::time::Duration;

use url::Url;

use crate::error::SetupError;

pub const DEFAULT_BASE_URL: &str = "https://www.fda.moph.go.th/";
pub const DEFAULT_INPUT: &str = "fda_list.txt";
pub const DEFAULT_OUTPUT: &str = "fda_list.xlsx";

/// Knobs for one scraping run. Defaults mirror the behaviour the FDA site tolerates.
#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    /// Site root the search query is appended to.
    pub base_url: String,
    /// Total requests per identifier, including the first.
    pub max_attempts: u32,
    pub request_timeout: Duration,
    /// Fixed part of the pause after a failed request; up to one extra second is added.
    pub retry_delay: Duration,
    /// Fixed part of the pause after every identifier; up to one extra second is added.
    pub politeness_delay: Duration,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            max_attempts: 3,
            request_timeout: Duration::from_secs(10),
            retry_delay: Duration::from_secs(2),
            politeness_delay: Duration::from_secs(1),
        }
    }
}

impl ScrapeConfig {
    pub fn parsed_base_url(&self) -> Result<Url, SetupError> {
        Url::parse(&self.base_url).map_err(|source| SetupError::BaseUrl {
            url: self.base_url.clone(),
            source,
        })
    }
}

/// Builds the keyword search URL for one identifier.
///
/// Any query already present on `base` is replaced.
pub fn search_url(base: &Url, identifier: &str) -> Url {
    let mut url = base.clone();
    url.query_pairs_mut()
        .clear()
        .append_pair("op", "kwssl")
        .append_pair("lang", "1")
        .append_pair("skin", "s")
        .append_pair("db", "Main")
        .append_pair("ww", identifier);
    url
}
