use std::time::Duration;

use log::debug;
use reqwest::blocking::Client;
use reqwest::StatusCode;
use url::Url;

use crate::error::FetchError;

/// Default timeout for HTTP requests in seconds
const DEFAULT_TIMEOUT: u64 = 30;

/// User agent sent with every subscription request
pub const DEFAULT_USER_AGENT: &str = "ClashSubscriptionParser/1.0";

#[derive(Debug, Clone)]
pub struct FetchOptions {
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for FetchOptions {
    fn default() -> Self {
        FetchOptions {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Source of subscription documents.
pub trait SubscriptionFetcher {
    /// Retrieve the body served at `url`.
    fn fetch(&self, url: &Url) -> Result<String, FetchError>;
}

/// Fetches subscriptions with a single blocking GET request.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(options: &FetchOptions) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(options.timeout)
            .user_agent(options.user_agent.as_str())
            .build()
            .map_err(FetchError::Client)?;
        Ok(HttpFetcher { client })
    }
}

impl SubscriptionFetcher for HttpFetcher {
    /// # Returns
    /// * `Ok(String)` - The response body, only for `200 OK`
    /// * `Err(FetchError)` - Transport failure, timeout or any other status
    fn fetch(&self, url: &Url) -> Result<String, FetchError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .map_err(FetchError::Transport)?;

        let status = response.status();
        debug!("GET {} -> {}", url, status);
        if status != StatusCode::OK {
            return Err(FetchError::Status {
                code: status.as_u16(),
                status: status.to_string(),
            });
        }

        response.text().map_err(FetchError::Body)
    }
}
