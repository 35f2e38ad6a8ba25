//! Core types for yammer-matches

use serde::{Deserialize, Serialize};

/// Remote identifier of a Yammer group
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupId(pub i64);

impl GroupId {
    /// Create a new GroupId
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the inner i64 value
    pub fn get(&self) -> i64 {
        self.0
    }

    /// Zero is never a real group; it is what an unset id looks like
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl From<i64> for GroupId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<GroupId> for i64 {
    fn from(id: GroupId) -> Self {
        id.0
    }
}

impl PartialEq<i64> for GroupId {
    fn eq(&self, other: &i64) -> bool {
        self.0 == *other
    }
}

impl std::fmt::Display for GroupId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for GroupId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

/// OAuth bearer token for the platform
///
/// Acquired elsewhere; this crate only carries it. `Debug` never prints the secret.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct BearerToken(String);

impl BearerToken {
    /// Wrap a token string (may be empty; emptiness is rejected at call time)
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The raw token
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Whether the token is blank
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for BearerToken {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

impl From<String> for BearerToken {
    fn from(token: String) -> Self {
        Self(token)
    }
}

impl std::fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0.is_empty() {
            f.write_str("BearerToken(<empty>)")
        } else {
            f.write_str("BearerToken(<redacted>)")
        }
    }
}

/// One user as returned by the member listing
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Remote numeric user id
    #[serde(rename = "id")]
    pub remote_id: i64,

    /// Display name; absent or null when the platform omits it
    #[serde(rename = "name", default)]
    pub display_name: Option<String>,

    /// Account state; absent or null means inactive
    #[serde(default)]
    pub state: Option<String>,
}

impl Member {
    /// State value of members that are kept
    pub const ACTIVE: &'static str = "active";

    /// Whether this member counts as active
    pub fn is_active(&self) -> bool {
        self.state.as_deref() == Some(Self::ACTIVE)
    }
}

/// One page of `GET api/v1/users/in_group/{id}`
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct MemberPage {
    /// Users on this page, in platform order
    #[serde(default)]
    pub users: Vec<Member>,

    /// Whether another page follows
    #[serde(default)]
    pub more_available: bool,
}

impl MemberPage {
    /// Consume the page, keeping only active members in their original order
    pub fn into_active(self) -> impl Iterator<Item = Member> {
        self.users.into_iter().filter(Member::is_active)
    }
}

/// A participant of a match, identified by their remote user id
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Participant {
    /// Remote numeric user id used for mentions
    pub remote_id: i64,

    /// Optional display name (informational only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

impl Participant {
    /// Participant known only by id
    pub fn new(remote_id: i64) -> Self {
        Self {
            remote_id,
            display_name: None,
        }
    }

    /// Participant with a display name
    pub fn named(remote_id: i64, display_name: impl Into<String>) -> Self {
        Self {
            remote_id,
            display_name: Some(display_name.into()),
        }
    }
}

impl From<&Member> for Participant {
    fn from(member: &Member) -> Self {
        Self {
            remote_id: member.remote_id,
            display_name: member.display_name.clone(),
        }
    }
}

/// Two participants paired for one announcement
///
/// Produced by the matching pipeline. The order of `first` and `second` is kept
/// when rendering.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchPair {
    /// First participant as supplied
    pub first: Participant,
    /// Second participant as supplied
    pub second: Participant,
}

impl MatchPair {
    /// Pair two participants
    pub fn new(first: Participant, second: Participant) -> Self {
        Self { first, second }
    }

    /// Pair two bare user ids
    pub fn of_ids(first: i64, second: i64) -> Self {
        Self::new(Participant::new(first), Participant::new(second))
    }

    /// Both participants, in supplied order
    pub fn participants(&self) -> [&Participant; 2] {
        [&self.first, &self.second]
    }
}

/// One size-bounded chunk of announcement text, destined for exactly one post
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PostBlock {
    /// Rendered lines
    pub body: String,
    /// 1-based position among the blocks of one announcement
    pub sequence_index: usize,
    /// Number of blocks in the announcement
    pub total_blocks: usize,
}

impl PostBlock {
    /// Post title for this block
    ///
    /// The base title is used as-is when the announcement fits in one block;
    /// otherwise " k of n" is appended.
    pub fn title(&self, base: &str) -> String {
        if self.total_blocks > 1 {
            format!("{} {} of {}", base, self.sequence_index, self.total_blocks)
        } else {
            base.to_string()
        }
    }
}
