use log::{debug, error, warn};
use reqwest::blocking::Client;
use std::time::Duration;
use url::Url;

use crate::config::{search_url, ScrapeConfig};
use crate::delay_manager::{self, Sleeper};
use crate::error::{FetchError, SetupError};
use crate::extractor::{Extractor, RESULT_TABLE_ID};
use crate::results::DetailLink;

/// Performs a single GET and hands back the body of a 2xx response.
///
/// Anything that is not a successful response (transport error, timeout, non-2xx
/// status) is a [`FetchError`] and is retried by the [`Fetcher`].
pub trait Transport {
    fn get(&self, url: &Url) -> Result<String, FetchError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn get(&self, url: &Url) -> Result<String, FetchError> {
        (**self).get(url)
    }
}

/// Blocking reqwest client with a per-request timeout and no extra headers.
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> Result<Self, SetupError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(SetupError::Client)?;
        Ok(HttpTransport { client })
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &Url) -> Result<String, FetchError> {
        let resp = self.client.get(url.as_str()).send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }
        Ok(resp.text()?)
    }
}

/// What a single request attempt ended in.
enum Attempt {
    Success(String),
    /// The page loaded but carries no link; asking again will not change that.
    PermanentAbsence,
    RetryableFailure(FetchError),
}

/// Looks up the detail link for one identifier at a time, retrying transient failures.
pub struct Fetcher<T, S> {
    transport: T,
    sleeper: S,
    extractor: Extractor,
    base_url: Url,
    max_attempts: u32,
    retry_delay: Duration,
}

impl<T: Transport, S: Sleeper> Fetcher<T, S> {
    pub fn new(config: &ScrapeConfig, transport: T, sleeper: S) -> Result<Self, SetupError> {
        Ok(Fetcher {
            transport,
            sleeper,
            extractor: Extractor::new()?,
            base_url: config.parsed_base_url()?,
            // at least one request is always made
            max_attempts: config.max_attempts.max(1),
            retry_delay: config.retry_delay,
        })
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Runs the request loop for `identifier`.
    ///
    /// Returns [`DetailLink::NotFound`] as soon as a page without a link is seen, or
    /// after `max_attempts` failed requests. Every failed request is followed by a
    /// retry delay, the last one included.
    pub fn fetch(&self, identifier: &str) -> DetailLink {
        let url = search_url(&self.base_url, identifier);
        debug!("{}: requesting {}", identifier, url);

        for attempt in 1..=self.max_attempts {
            match self.attempt(&url) {
                Attempt::Success(href) => return DetailLink::Found(href),
                Attempt::PermanentAbsence => {
                    warn!("{}: #{} or link not found", identifier, RESULT_TABLE_ID);
                    return DetailLink::NotFound;
                }
                Attempt::RetryableFailure(e) => {
                    warn!(
                        "{}: attempt {}/{} failed: {}",
                        identifier, attempt, self.max_attempts, e
                    );
                    delay_manager::retry_delay(&self.sleeper, self.retry_delay);
                }
            }
        }

        error!(
            "{}: giving up after {} attempts",
            identifier, self.max_attempts
        );
        DetailLink::NotFound
    }

    fn attempt(&self, url: &Url) -> Attempt {
        match self.transport.get(url) {
            Ok(body) => match self.extractor.detail_link(&body) {
                Some(href) => Attempt::Success(href),
                None => Attempt::PermanentAbsence,
            },
            Err(e) => Attempt::RetryableFailure(e),
        }
    }
}
