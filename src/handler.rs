//! Command handler that feeds a group's active members to the matching pipeline.

use crate::error::{Error, Result};
use crate::traits::{ActiveUserSource, MatchMaker};
use crate::types::{GroupId, Participant};
use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::client::GROUP_ID_ZERO;

const REQUEST_MISSING: &str = "'Request' must not be empty.";

/// Request to pair up the active members of one group
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateMatchesCommand {
    /// Group whose members are matched
    pub group_id: GroupId,
}

/// Loads active user ids from an [`ActiveUserSource`] and hands them to a
/// [`MatchMaker`]
pub struct CreateGroupMatchesHandler<S, M> {
    source: S,
    match_maker: M,
}

impl<S, M> CreateGroupMatchesHandler<S, M>
where
    S: ActiveUserSource,
    M: MatchMaker,
{
    /// Create a handler
    pub fn new(source: S, match_maker: M) -> Self {
        Self {
            source,
            match_maker,
        }
    }

    /// Run the command
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] for a missing request or a zero group id,
    /// otherwise whatever the source or the match maker fails with.
    pub async fn handle(
        &self,
        request: Option<&CreateMatchesCommand>,
        cancel: &CancellationToken,
    ) -> Result<()> {
        let request = request.ok_or_else(|| Error::validation(REQUEST_MISSING))?;
        if request.group_id.is_zero() {
            return Err(Error::validation(GROUP_ID_ZERO));
        }

        let ids = self
            .source
            .active_user_ids(request.group_id, cancel)
            .await?;
        info!(
            group_id = request.group_id.0,
            participants = ids.len(),
            "creating matches"
        );

        let participants = ids.into_iter().map(Participant::new).collect();
        self.match_maker
            .create_matches(participants, cancel)
            .await
    }
}
