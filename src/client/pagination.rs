//! Member-listing pagination loop.
//!
//! Termination depends entirely on the platform clearing `more_available`. A
//! listing that never clears it runs forever unless `max_pages` is configured.

use crate::error::{Error, Result};
use crate::types::{BearerToken, GroupId, Member, MemberPage};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};
use url::Url;

use super::cancellable;

const USERS_IN_GROUP_PATH: &str = "api/v1/users/in_group/";

/// URL of one listing page
pub(super) fn page_url(base_url: &Url, group_id: GroupId, page: u32) -> Result<Url> {
    let mut url = base_url.join(&format!("{}{}", USERS_IN_GROUP_PATH, group_id))?;
    url.query_pairs_mut().append_pair("page", &page.to_string());
    Ok(url)
}

pub(super) struct PaginatedFetcher<'a> {
    pub(super) http: &'a reqwest::Client,
    pub(super) base_url: &'a Url,
    pub(super) group_id: GroupId,
    pub(super) token: &'a BearerToken,
    pub(super) max_pages: Option<u32>,
}

impl PaginatedFetcher<'_> {
    /// Walk pages 1, 2, ... until one reports no more, collecting active members
    pub(super) async fn fetch_all(&self, cancel: &CancellationToken) -> Result<Vec<Member>> {
        let mut members = Vec::new();
        let mut page: u32 = 1;

        loop {
            if let Some(limit) = self.max_pages
                && page > limit
            {
                warn!(
                    group_id = self.group_id.0,
                    limit, "member listing still reports more pages, giving up"
                );
                return Err(Error::PageLimitExceeded {
                    group_id: self.group_id.0,
                    limit,
                });
            }

            let current = self.fetch_page(page, cancel).await?;
            let more_available = current.more_available;
            let before = members.len();
            members.extend(current.into_active());

            debug!(
                group_id = self.group_id.0,
                page,
                active = members.len() - before,
                more_available,
                "fetched member page"
            );

            if !more_available {
                return Ok(members);
            }

            page = page.checked_add(1).ok_or(Error::PageLimitExceeded {
                group_id: self.group_id.0,
                limit: u32::MAX,
            })?;
        }
    }

    async fn fetch_page(&self, page: u32, cancel: &CancellationToken) -> Result<MemberPage> {
        let url = page_url(self.base_url, self.group_id, page)?;

        let request = self.http.get(url).bearer_auth(self.token.expose()).send();
        let response = cancellable(cancel, request)
            .await?
            .map_err(|e| self.fetch_error(page, describe(&e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = cancellable(cancel, response.text())
                .await?
                .unwrap_or_else(|e| format!("<failed to read response body: {}>", e));
            return Err(self.fetch_error(page, format!("HTTP {}: {}", status.as_u16(), body)));
        }

        cancellable(cancel, response.json::<MemberPage>())
            .await?
            .map_err(|e| self.fetch_error(page, format!("invalid member page: {}", e)))
    }

    fn fetch_error(&self, page: u32, reason: String) -> Error {
        Error::RemoteFetch {
            group_id: self.group_id.0,
            page,
            reason,
        }
    }
}

fn describe(e: &reqwest::Error) -> String {
    if e.is_timeout() {
        format!("timed out: {}", e)
    } else if e.is_connect() {
        format!("connection failed: {}", e)
    } else {
        e.to_string()
    }
}
