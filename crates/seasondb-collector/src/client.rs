//! HTTP client for fetching the source page.

use std::time::Duration;

use reqwest::Client;

use crate::error::CollectorError;

/// Fetches source pages with a bounded timeout and a browser-like
/// `User-Agent`. Non-2xx statuses and network failures are typed errors;
/// there is no retry.
pub struct PageClient {
    client: Client,
}

impl PageClient {
    /// Creates a `PageClient` with the configured timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectorError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, CollectorError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// Fetches the raw HTML body of `url` with a single GET.
    ///
    /// # Errors
    ///
    /// - [`CollectorError::UnexpectedStatus`] — any non-2xx status.
    /// - [`CollectorError::Http`] — network error or timeout.
    pub async fn fetch_page(&self, url: &str) -> Result<String, CollectorError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(CollectorError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_owned(),
            });
        }

        Ok(response.text().await?)
    }
}
