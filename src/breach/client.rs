//! Transport for range queries.

use std::future::Future;

use super::{BreachConfig, BreachError};

/// Fetches the raw `SUFFIX:COUNT` body for a 5-character hash prefix.
///
/// Implementations only ever see the prefix.
pub trait RangeClient: Send + Sync {
    fn fetch_range(&self, prefix: &str) -> impl Future<Output = Result<String, BreachError>> + Send;
}

/// `reqwest`-backed client for the Pwned Passwords range API.
#[derive(Debug, Clone)]
pub struct HttpRangeClient {
    http: reqwest::Client,
    endpoint: String,
    add_padding: bool,
}

impl HttpRangeClient {
    pub fn new(config: &BreachConfig) -> Result<Self, BreachError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(BreachError::ClientBuild)?;

        Ok(Self {
            http,
            endpoint: config.endpoint.clone(),
            add_padding: config.add_padding,
        })
    }

    fn range_url(&self, prefix: &str) -> String {
        format!("{}{}", self.endpoint, prefix)
    }

    fn range_request(&self, prefix: &str) -> reqwest::RequestBuilder {
        let request = self.http.get(self.range_url(prefix));
        if self.add_padding {
            request.header("Add-Padding", "true")
        } else {
            request
        }
    }
}

impl RangeClient for HttpRangeClient {
    async fn fetch_range(&self, prefix: &str) -> Result<String, BreachError> {
        let response = self.range_request(prefix).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(BreachError::Status(status.as_u16()));
        }

        Ok(response.text().await?)
    }
}
