//! Client for one Yammer group: member listing and match announcements.
//!
//! A [`GroupClient`] owns a group id, a bearer token and an HTTP client. Every
//! public operation starts by validating the identity (group id first, then
//! token) and fails with [`Error::Validation`] before any request goes out.
//! Pages are fetched one at a time and posts are sent one at a time; the first
//! failure ends the operation.

mod pagination;
mod posting;

use crate::batcher::PostBatcher;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::formatter::PostFormatter;
use crate::traits::{Group, Notifiable};
use crate::types::{BearerToken, GroupId, MatchPair, Member, PostBlock};
use async_trait::async_trait;
use std::future::Future;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};
use url::Url;

use pagination::PaginatedFetcher;
use posting::Poster;

pub(crate) const GROUP_ID_ZERO: &str = "'Group Id' must not be '0'.";
pub(crate) const TOKEN_EMPTY: &str = "'Bearer Token' must not be empty.";
pub(crate) const MATCHES_MISSING: &str = "'Matches' must not be empty.";

/// Client bound to one group and one bearer token
///
/// Not meant to be driven by several tasks at once; create one per request.
#[derive(Clone, Debug)]
pub struct GroupClient {
    id: GroupId,
    token: BearerToken,
    formatter: PostFormatter,
    http: reqwest::Client,
    base_url: Url,
    batcher: PostBatcher,
    max_pages: Option<u32>,
}

impl GroupClient {
    /// Create a client with its own HTTP client built from `config`
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if `config` does not validate, or
    /// [`Error::Network`] if the HTTP client cannot be built. The group id and
    /// token are not checked here; each operation checks them.
    pub fn new(
        config: &Config,
        id: GroupId,
        token: BearerToken,
        formatter: PostFormatter,
    ) -> Result<Self> {
        let http = config.http_client()?;
        Self::with_http_client(config, http, id, token, formatter)
    }

    /// Create a client sharing an existing HTTP client
    pub fn with_http_client(
        config: &Config,
        http: reqwest::Client,
        id: GroupId,
        token: BearerToken,
        formatter: PostFormatter,
    ) -> Result<Self> {
        let base_url = config.validate()?;

        Ok(Self {
            id,
            token,
            formatter,
            http,
            base_url,
            batcher: PostBatcher::new(config.flush_threshold),
            max_pages: config.max_pages,
        })
    }

    /// The group this client talks to
    pub fn id(&self) -> GroupId {
        self.id
    }

    /// Check the group identity
    ///
    /// The group id is checked before the token, so a client with both wrong
    /// reports the group id.
    pub fn validate(&self) -> Result<()> {
        if self.id.is_zero() {
            return Err(Error::validation(GROUP_ID_ZERO));
        }
        if self.token.is_empty() {
            return Err(Error::validation(TOKEN_EMPTY));
        }
        Ok(())
    }

    /// All active members of the group, across every page
    ///
    /// Keeps requesting pages while the platform reports `more_available`. Only
    /// members whose state is `"active"` are returned, in page order.
    ///
    /// # Errors
    ///
    /// - [`Error::Validation`] for a zero group id or empty token (nothing is sent)
    /// - [`Error::RemoteFetch`] if any page fails; earlier pages are discarded
    /// - [`Error::PageLimitExceeded`] if `max_pages` is configured and reached
    /// - [`Error::Cancelled`] if `cancel` fires
    pub async fn fetch_active_members(&self, cancel: &CancellationToken) -> Result<Vec<Member>> {
        self.validate()?;

        let fetcher = PaginatedFetcher {
            http: &self.http,
            base_url: &self.base_url,
            group_id: self.id,
            token: &self.token,
            max_pages: self.max_pages,
        };

        let members = fetcher.fetch_all(cancel).await?;
        info!(
            group_id = self.id.0,
            active_members = members.len(),
            "fetched group members"
        );
        Ok(members)
    }

    /// Announce `matches` to the group
    ///
    /// `None` is rejected; an empty slice returns without contacting the
    /// platform. Matches are split into blocks by [`PostBatcher`] and each block
    /// is posted in order. With more than one block, titles get a " k of n"
    /// suffix.
    ///
    /// # Errors
    ///
    /// - [`Error::Validation`] for a zero group id, empty token, or `None` matches
    /// - [`Error::RemotePost`] on the first non-success response, carrying the
    ///   response body; later blocks are not sent and earlier ones stay posted
    /// - [`Error::Network`] if a post cannot be delivered at all
    /// - [`Error::Cancelled`] if `cancel` fires
    pub async fn notify(
        &self,
        matches: Option<&[MatchPair]>,
        cancel: &CancellationToken,
    ) -> Result<()> {
        self.validate()?;
        let matches = matches.ok_or_else(|| Error::validation(MATCHES_MISSING))?;

        if matches.is_empty() {
            debug!(group_id = self.id.0, "no matches to announce");
            return Ok(());
        }

        let blocks = self.batcher.blocks(matches);
        let title = self.formatter.title();
        let poster = self.poster();

        for block in &blocks {
            poster.post(&block.title(&title), block, cancel).await?;
        }

        info!(
            group_id = self.id.0,
            matches = matches.len(),
            posts = blocks.len(),
            "announced matches"
        );
        Ok(())
    }

    /// Post `text` as one unnumbered message titled by the formatter
    pub async fn post_text(&self, text: &str, cancel: &CancellationToken) -> Result<()> {
        self.validate()?;

        let block = PostBlock {
            body: text.to_string(),
            sequence_index: 1,
            total_blocks: 1,
        };
        self.poster()
            .post(&block.title(&self.formatter.title()), &block, cancel)
            .await
    }

    fn poster(&self) -> Poster<'_> {
        Poster {
            http: &self.http,
            base_url: &self.base_url,
            group_id: self.id,
            token: &self.token,
        }
    }
}

#[async_trait]
impl Notifiable for GroupClient {
    async fn notify_matches(
        &self,
        matches: &[MatchPair],
        cancel: &CancellationToken,
    ) -> Result<()> {
        self.notify(Some(matches), cancel).await
    }
}

#[async_trait]
impl Group for GroupClient {
    async fn members(&self, cancel: &CancellationToken) -> Result<Vec<Member>> {
        self.fetch_active_members(cancel).await
    }
}

/// Race `fut` against `cancel`
///
/// A token that is already cancelled wins before `fut` is first polled, so no
/// request leaves the process.
pub(crate) async fn cancellable<F, T>(cancel: &CancellationToken, fut: F) -> Result<T>
where
    F: Future<Output = T>,
{
    tokio::select! {
        biased;
        _ = cancel.cancelled() => Err(Error::Cancelled),
        out = fut => Ok(out),
    }
}

// unwrap/expect are acceptable in tests for concise failure-on-error assertions
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests;
