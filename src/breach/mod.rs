//! Breach checker - k-anonymity lookup against the Pwned Passwords corpus.
//!
//! The password is hashed with SHA-1 and only the first five hex
//! characters of the digest are sent over the wire. The remote service
//! answers with every known suffix under that prefix and the match is
//! done locally.

mod client;

use std::fmt;
use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use sha1::{Digest, Sha1};
use thiserror::Error;

use crate::types::BreachResult;

pub use client::{HttpRangeClient, RangeClient};

pub const DEFAULT_ENDPOINT: &str = "https://api.pwnedpasswords.com/range/";
pub const PREFIX_LEN: usize = 5;

#[derive(Error, Debug)]
pub enum BreachError {
    #[error("Range request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Range endpoint answered with status {0}")]
    Status(u16),
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),
    #[error("Refusing to query with malformed prefix {0:?}")]
    InvalidPrefix(String),
}

/// Settings for the remote range lookup.
#[derive(Debug, Clone)]
pub struct BreachConfig {
    /// Base URL; the prefix is appended directly.
    pub endpoint: String,
    pub timeout: Duration,
    pub user_agent: String,
    /// Ask the service to pad responses with zero-count decoys.
    pub add_padding: bool,
}

impl Default for BreachConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: Duration::from_secs(10),
            user_agent: concat!("pwd-audit/", env!("CARGO_PKG_VERSION")).to_string(),
            add_padding: true,
        }
    }
}

impl BreachConfig {
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        let mut endpoint = endpoint.into();
        if !endpoint.ends_with('/') {
            endpoint.push('/');
        }
        self.endpoint = endpoint;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_padding(mut self, add_padding: bool) -> Self {
        self.add_padding = add_padding;
        self
    }
}

/// Uppercase hex SHA-1 of a password, split at the k-anonymity boundary.
pub struct HashRange {
    prefix: String,
    suffix: String,
}

impl HashRange {
    pub fn split(password: &SecretString) -> Self {
        let digest = Sha1::digest(password.expose_secret().as_bytes());
        let mut hash = hex::encode_upper(digest);
        let suffix = hash.split_off(PREFIX_LEN);
        Self {
            prefix: hash,
            suffix,
        }
    }

    /// The only part of the hash that leaves the process.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }
}

impl fmt::Debug for HashRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashRange")
            .field("prefix", &self.prefix)
            .field("suffix", &"[REDACTED]")
            .finish()
    }
}

fn is_valid_prefix(prefix: &str) -> bool {
    prefix.len() == PREFIX_LEN
        && prefix
            .chars()
            .all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c))
}

/// Looks up `suffix` in a range response body.
///
/// Zero counts are padding decoys. A matching line with an unreadable
/// count is still a hit.
pub fn parse_range(body: &str, suffix: &str) -> BreachResult {
    for line in body.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let Some((hash_suffix, count)) = line.split_once(':') else {
            continue;
        };
        if !hash_suffix.eq_ignore_ascii_case(suffix) {
            continue;
        }

        return match count.trim().parse::<u64>() {
            Ok(0) => BreachResult::safe(),
            Ok(n) => BreachResult::pwned(n),
            Err(_) => {
                #[cfg(feature = "tracing")]
                tracing::warn!("Matched range entry has an unreadable count");
                BreachResult::pwned(0)
            }
        };
    }
    BreachResult::safe()
}

/// Checks passwords against the breach corpus through a [`RangeClient`].
#[derive(Debug, Clone)]
pub struct BreachChecker<C = HttpRangeClient> {
    client: C,
}

impl BreachChecker<HttpRangeClient> {
    pub fn new(config: &BreachConfig) -> Result<Self, BreachError> {
        Ok(Self::with_client(HttpRangeClient::new(config)?))
    }
}

impl<C: RangeClient> BreachChecker<C> {
    pub fn with_client(client: C) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Performs the lookup and reports any failure.
    pub async fn try_check(&self, password: &SecretString) -> Result<BreachResult, BreachError> {
        let range = HashRange::split(password);
        if !is_valid_prefix(range.prefix()) {
            return Err(BreachError::InvalidPrefix(range.prefix().to_string()));
        }

        #[cfg(feature = "tracing")]
        tracing::debug!("Requesting breach range for prefix {}", range.prefix());

        let body = self.client.fetch_range(range.prefix()).await?;
        Ok(parse_range(&body, range.suffix()))
    }

    /// Fail-closed lookup: any error yields a "not breached" result.
    ///
    /// A failed lookup does not mean the password is safe; it only keeps
    /// evaluation from blocking. The error is logged.
    pub async fn check(&self, password: &SecretString) -> BreachResult {
        match self.try_check(password).await {
            Ok(result) => result,
            Err(_e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!("Could not check pwned password: {}", _e);
                BreachResult::safe()
            }
        }
    }
}


#[cfg(test)]
mod tests {
    use super::stub::StubRangeClient;
    use super::*;

    const PASSWORD_PREFIX: &str = "5BAA6";
    const PASSWORD_SUFFIX: &str = "1E4C9B93F3F0682250B6CF8331B7EE68FD8";

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_hash_range_split() {
        let range = HashRange::split(&secret("password"));
        assert_eq!(range.prefix(), PASSWORD_PREFIX);
        assert_eq!(range.suffix(), PASSWORD_SUFFIX);
        assert_eq!(range.suffix().len(), 35);
    }

    #[test]
    fn test_hash_range_debug_redacts_suffix() {
        let range = HashRange::split(&secret("password"));
        let rendered = format!("{:?}", range);
        assert!(rendered.contains(PASSWORD_PREFIX));
        assert!(!rendered.contains(PASSWORD_SUFFIX));
    }

    #[test]
    fn test_parse_range_crlf_and_case() {
        let body = format!(
            "0018A45C4D1DEF81644B54AB7F969B88D65:1\r\n{}:3861493\r\n",
            PASSWORD_SUFFIX.to_lowercase()
        );
        assert_eq!(parse_range(&body, PASSWORD_SUFFIX), BreachResult::pwned(3861493));
    }

    #[test]
    fn test_parse_range_padding_entry() {
        let body = format!("{}:0\n", PASSWORD_SUFFIX);
        assert_eq!(parse_range(&body, PASSWORD_SUFFIX), BreachResult::safe());
    }

    #[test]
    fn test_parse_range_unreadable_count() {
        let body = format!("{}:lots\n", PASSWORD_SUFFIX);
        assert_eq!(parse_range(&body, PASSWORD_SUFFIX), BreachResult::pwned(0));
    }

    #[test]
    fn test_parse_range_no_match() {
        let body = "0018A45C4D1DEF81644B54AB7F969B88D65:1\n\ngarbage\n";
        assert_eq!(parse_range(body, PASSWORD_SUFFIX), BreachResult::safe());
    }

    #[test]
    fn test_config_endpoint_gets_trailing_slash() {
        let config = BreachConfig::default().with_endpoint("http://localhost/range");
        assert_eq!(config.endpoint, "http://localhost/range/");
    }

    #[tokio::test]
    async fn test_check_hit() {
        let body = format!(
            "003D68EB55068C33ACE09247EE4C639306B:3\n{}:3\n",
            PASSWORD_SUFFIX
        );
        let checker = BreachChecker::with_client(StubRangeClient::body(body));
        let result = checker.check(&secret("password")).await;
        assert_eq!(result, BreachResult { is_pwned: true, count: 3 });
    }

    #[tokio::test]
    async fn test_check_server_error_fails_closed() {
        let checker = BreachChecker::with_client(StubRangeClient::status(500));
        let result = checker.check(&secret("password")).await;
        assert_eq!(result, BreachResult { is_pwned: false, count: 0 });

        let err = checker.try_check(&secret("password")).await.unwrap_err();
        assert!(matches!(err, BreachError::Status(500)));
    }

    #[tokio::test]
    async fn test_only_prefix_is_sent() {
        let checker = BreachChecker::with_client(StubRangeClient::body(""));
        let _ = checker.check(&secret("password")).await;
        assert_eq!(checker.client().requested(), vec![PASSWORD_PREFIX.to_string()]);
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_fails_closed() {
        let config = BreachConfig::default()
            .with_endpoint("http://127.0.0.1:9/range/")
            .with_timeout(Duration::from_millis(500));
        let checker = BreachChecker::new(&config).unwrap();

        let err = checker.try_check(&secret("password")).await.unwrap_err();
        assert!(matches!(err, BreachError::Http(_)));
        assert_eq!(checker.check(&secret("password")).await, BreachResult::safe());
    }
}
