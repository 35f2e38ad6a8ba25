//! Post titles and the clock they are stamped with

use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Source of the current instant
pub trait Clock: Send + Sync {
    /// Current time in UTC
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always reports the same instant
#[derive(Clone, Copy, Debug)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Builds announcement titles for one group
///
/// The title reads `"{group name} matches, {Month yyyy}."`, e.g.
/// `"Coffee Club matches, March 2024."`.
#[derive(Clone)]
pub struct PostFormatter {
    group_name: String,
    clock: Arc<dyn Clock>,
}

impl PostFormatter {
    /// Formatter stamping titles with the system clock
    pub fn new(group_name: impl Into<String>) -> Self {
        Self::with_clock(group_name, Arc::new(SystemClock))
    }

    /// Formatter stamping titles with the given clock
    pub fn with_clock(group_name: impl Into<String>, clock: Arc<dyn Clock>) -> Self {
        Self {
            group_name: group_name.into(),
            clock,
        }
    }

    /// Group name used in titles
    pub fn group_name(&self) -> &str {
        &self.group_name
    }

    /// Title for an announcement posted now
    pub fn title(&self) -> String {
        format!(
            "{} matches, {}.",
            self.group_name,
            self.clock.now().format("%B %Y")
        )
    }
}

impl std::fmt::Debug for PostFormatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PostFormatter")
            .field("group_name", &self.group_name)
            .finish_non_exhaustive()
    }
}
