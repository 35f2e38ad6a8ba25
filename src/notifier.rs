//! Plain-text announcement adapter.
//!
//! [`PlainTextNotifier`] implements [`Notifiable`] for sinks that take one
//! plain string per group. Each match becomes a line `"[[a]] and [[b]]."` and
//! the lines are joined with newlines; no numbering, no size splitting.

use crate::error::{Error, Result};
use crate::traits::{ActiveUserSource, Notifiable};
use crate::types::{GroupId, MatchPair, Participant};
use async_trait::async_trait;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::client::GROUP_ID_ZERO;

const PARTICIPANT_ID_ZERO: &str = "'Yammer Id' must not be '0'.";

/// Announces matches for a fixed group through an [`ActiveUserSource`]
#[derive(Clone, Debug)]
pub struct PlainTextNotifier<S> {
    source: S,
    group_id: GroupId,
}

impl<S: ActiveUserSource> PlainTextNotifier<S> {
    /// Bind `source` to `group_id`
    pub fn new(source: S, group_id: GroupId) -> Self {
        Self { source, group_id }
    }

    /// The bound group
    pub fn group_id(&self) -> GroupId {
        self.group_id
    }

    /// The underlying source
    pub fn source(&self) -> &S {
        &self.source
    }
}

/// Render matches as newline-joined `"[[a]] and [[b]]."` lines
///
/// # Errors
///
/// Returns [`Error::Validation`] if any participant has remote id 0.
pub fn render_plain(matches: &[MatchPair]) -> Result<String> {
    let lines = matches
        .iter()
        .map(|pair| {
            Ok(format!(
                "{} and {}.",
                plain_mention(&pair.first)?,
                plain_mention(&pair.second)?
            ))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(lines.join("\n"))
}

fn plain_mention(participant: &Participant) -> Result<String> {
    if participant.remote_id == 0 {
        return Err(Error::validation(PARTICIPANT_ID_ZERO));
    }
    Ok(format!("[[{}]]", participant.remote_id))
}

#[async_trait]
impl<S: ActiveUserSource> Notifiable for PlainTextNotifier<S> {
    async fn notify_matches(
        &self,
        matches: &[MatchPair],
        cancel: &CancellationToken,
    ) -> Result<()> {
        if self.group_id.is_zero() {
            return Err(Error::validation(GROUP_ID_ZERO));
        }
        if matches.is_empty() {
            return Ok(());
        }

        let text = render_plain(matches)?;
        debug!(
            group_id = self.group_id.0,
            matches = matches.len(),
            "posting plain-text matches"
        );
        self.source.post_to_group(self.group_id, &text, cancel).await
    }
}
