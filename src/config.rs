//! Configuration types for yammer-matches

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

/// Main configuration for [`GroupClient`](crate::GroupClient) and
/// [`PlatformService`](crate::PlatformService)
///
/// Every field has a serde default, so an empty JSON object is a valid config
/// pointing at the public Yammer API.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    /// Platform base URL (default: "https://www.yammer.com/")
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Permit a plain `http://` base URL (default: false)
    ///
    /// Only meant for local mock servers. The platform itself must be reached over TLS.
    #[serde(default)]
    pub allow_insecure_http: bool,

    /// Per-request timeout (default: 30 seconds)
    #[serde(default = "default_request_timeout", with = "duration_serde")]
    pub request_timeout: Duration,

    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Post body length after which the current block is closed (default: 9500)
    ///
    /// The platform rejects message bodies somewhere around 10000 characters; the
    /// check runs after a whole line is appended, so a block may overshoot this
    /// by at most one line.
    #[serde(default = "default_flush_threshold")]
    pub flush_threshold: usize,

    /// Hard ceiling on member-listing pages (None = trust `more_available`)
    #[serde(default)]
    pub max_pages: Option<u32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            allow_insecure_http: false,
            request_timeout: default_request_timeout(),
            user_agent: default_user_agent(),
            flush_threshold: default_flush_threshold(),
            max_pages: None,
        }
    }
}

impl Config {
    /// Parse and check the base URL, returning it normalized with a trailing slash
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the URL is unparseable, is not https (and
    /// `allow_insecure_http` is off), or if `flush_threshold` or `max_pages` is zero.
    pub fn validate(&self) -> Result<Url> {
        let mut url = Url::parse(&self.base_url).map_err(|e| Error::Config {
            message: format!("invalid base URL '{}': {}", self.base_url, e),
            key: Some("base_url".to_string()),
        })?;

        match url.scheme() {
            "https" => {}
            "http" if self.allow_insecure_http => {}
            other => {
                return Err(Error::Config {
                    message: format!("base URL must use https, got '{}'", other),
                    key: Some("base_url".to_string()),
                });
            }
        }

        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }

        if self.flush_threshold == 0 {
            return Err(Error::Config {
                message: "flush threshold must be greater than zero".to_string(),
                key: Some("flush_threshold".to_string()),
            });
        }

        if self.max_pages == Some(0) {
            return Err(Error::Config {
                message: "max_pages must be greater than zero when set".to_string(),
                key: Some("max_pages".to_string()),
            });
        }

        Ok(url)
    }

    /// Build the HTTP client described by this config
    pub(crate) fn http_client(&self) -> Result<reqwest::Client> {
        reqwest::Client::builder()
            .timeout(self.request_timeout)
            .user_agent(&self.user_agent)
            .build()
            .map_err(Error::Network)
    }
}

fn default_base_url() -> String {
    "https://www.yammer.com/".to_string()
}

fn default_request_timeout() -> Duration {
    Duration::from_secs(30)
}

fn default_user_agent() -> String {
    format!("yammer-matches/{}", env!("CARGO_PKG_VERSION"))
}

fn default_flush_threshold() -> usize {
    crate::batcher::FLUSH_THRESHOLD
}

// Duration as whole seconds
mod duration_serde {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(duration.as_secs())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}
