//! Capability traits shared by the platform client, the plain-text notifier and
//! the matching pipeline
//!
//! Callers depend on these traits, never on the concrete types, so a rich
//! [`GroupClient`](crate::GroupClient) and a
//! [`PlainTextNotifier`](crate::PlainTextNotifier) are interchangeable wherever a
//! [`Notifiable`] is expected.

use crate::error::Result;
use crate::types::{GroupId, MatchPair, Member, Participant};
use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

/// Something that can announce matches
///
/// # Examples
///
/// ```no_run
/// use tokio_util::sync::CancellationToken;
/// use yammer_matches::{BearerToken, Config, GroupClient, GroupId, MatchPair, Notifiable, PostFormatter};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = GroupClient::new(
///     &Config::default(),
///     GroupId(1234),
///     BearerToken::new("token"),
///     PostFormatter::new("Coffee Club"),
/// )?;
///
/// let notifier: &dyn Notifiable = &client;
/// notifier
///     .notify_matches(&[MatchPair::of_ids(1, 2)], &CancellationToken::new())
///     .await?;
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait Notifiable: Send + Sync {
    /// Announce `matches`; an empty slice is a no-op
    async fn notify_matches(&self, matches: &[MatchPair], cancel: &CancellationToken)
    -> Result<()>;
}

/// A remote group whose members can be listed and notified
#[async_trait]
pub trait Group: Notifiable {
    /// Active members of the group
    async fn members(&self, cancel: &CancellationToken) -> Result<Vec<Member>>;
}

/// Group-keyed access to active user ids and plain-text posting
#[async_trait]
pub trait ActiveUserSource: Send + Sync {
    /// Remote ids of the group's active members
    async fn active_user_ids(
        &self,
        group_id: GroupId,
        cancel: &CancellationToken,
    ) -> Result<Vec<i64>>;

    /// Post `text` to the group as a single message
    async fn post_to_group(
        &self,
        group_id: GroupId,
        text: &str,
        cancel: &CancellationToken,
    ) -> Result<()>;
}

/// The pairing pipeline that turns participants into announced matches
#[async_trait]
pub trait MatchMaker: Send + Sync {
    /// Pair up `participants` and announce the result
    async fn create_matches(
        &self,
        participants: Vec<Participant>,
        cancel: &CancellationToken,
    ) -> Result<()>;
}
