//! # yammer-matches
//!
//! Member synchronization and bulk match announcements for Yammer groups.
//!
//! ## What it does
//!
//! - **Lists active members** of a group by walking the paginated
//!   `users/in_group` endpoint until the platform stops reporting
//!   `more_available`
//! - **Announces matches** (pairs of members) as multipart posts, splitting long
//!   announcements into numbered posts that stay under the platform's message
//!   size limit
//! - **Fails fast**: input is validated before any request, nothing is retried,
//!   and the first rejected post stops the announcement
//!
//! ## Quick Start
//!
//! ```no_run
//! use tokio_util::sync::CancellationToken;
//! use yammer_matches::{BearerToken, Config, GroupClient, GroupId, MatchPair, PostFormatter};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = GroupClient::new(
//!         &Config::default(),
//!         GroupId(1234),
//!         BearerToken::new("token"),
//!         PostFormatter::new("Coffee Club"),
//!     )?;
//!
//!     let cancel = CancellationToken::new();
//!     let members = client.fetch_active_members(&cancel).await?;
//!     println!("{} active members", members.len());
//!
//!     let matches = vec![MatchPair::of_ids(members[0].remote_id, members[1].remote_id)];
//!     client.notify(Some(&matches), &cancel).await?;
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// Splitting announcements into size-bounded posts
pub mod batcher;
/// Group client: member listing and posting
pub mod client;
/// Configuration types
pub mod config;
/// Error types
pub mod error;
/// Post titles and clocks
pub mod formatter;
/// Command handler feeding the matching pipeline
pub mod handler;
/// Plain-text notifier adapter
pub mod notifier;
/// Platform-backed active user source
pub mod service;
/// Capability traits
pub mod traits;
/// Core types
pub mod types;

// Re-export commonly used types
pub use batcher::{FLUSH_THRESHOLD, PostBatcher};
pub use client::GroupClient;
pub use config::Config;
pub use error::{Error, Result, ToHttpStatus};
pub use formatter::{Clock, FixedClock, PostFormatter, SystemClock};
pub use handler::{CreateGroupMatchesHandler, CreateMatchesCommand};
pub use notifier::PlainTextNotifier;
pub use service::PlatformService;
pub use traits::{ActiveUserSource, Group, MatchMaker, Notifiable};
pub use types::{BearerToken, GroupId, MatchPair, Member, MemberPage, Participant, PostBlock};
