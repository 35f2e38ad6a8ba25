//! Platform-backed [`ActiveUserSource`].

use crate::client::GroupClient;
use crate::config::Config;
use crate::error::Result;
use crate::formatter::PostFormatter;
use crate::traits::ActiveUserSource;
use crate::types::{BearerToken, GroupId};
use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

/// Group-keyed access to the platform with one token
///
/// Builds a short-lived [`GroupClient`] per call, sharing one HTTP client.
#[derive(Clone, Debug)]
pub struct PlatformService {
    config: Config,
    http: reqwest::Client,
    token: BearerToken,
    formatter: PostFormatter,
}

impl PlatformService {
    /// Create a service; `formatter` titles plain-text posts
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`](crate::Error::Config) if `config` does not
    /// validate, or [`Error::Network`](crate::Error::Network) if the HTTP client
    /// cannot be built.
    pub fn new(config: Config, token: BearerToken, formatter: PostFormatter) -> Result<Self> {
        config.validate()?;
        let http = config.http_client()?;

        Ok(Self {
            config,
            http,
            token,
            formatter,
        })
    }

    /// Client for `group_id` sharing this service's HTTP client and token
    pub fn group(&self, group_id: GroupId) -> Result<GroupClient> {
        GroupClient::with_http_client(
            &self.config,
            self.http.clone(),
            group_id,
            self.token.clone(),
            self.formatter.clone(),
        )
    }
}

#[async_trait]
impl ActiveUserSource for PlatformService {
    async fn active_user_ids(
        &self,
        group_id: GroupId,
        cancel: &CancellationToken,
    ) -> Result<Vec<i64>> {
        let members = self.group(group_id)?.fetch_active_members(cancel).await?;
        Ok(members.into_iter().map(|m| m.remote_id).collect())
    }

    async fn post_to_group(
        &self,
        group_id: GroupId,
        text: &str,
        cancel: &CancellationToken,
    ) -> Result<()> {
        self.group(group_id)?.post_text(text, cancel).await
    }
}
