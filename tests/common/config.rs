//! Test configuration helpers for mock servers and live credentials

use chrono::{TimeZone, Utc};
use std::sync::Arc;
use wiremock::MockServer;
use yammer_matches::{BearerToken, Config, FixedClock, GroupId, PostFormatter};

/// Error type for test configuration
#[derive(Debug)]
pub struct ConfigError(pub String);

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Config error: {}", self.0)
    }
}

impl std::error::Error for ConfigError {}

/// Config pointing at a local mock platform
pub fn mock_config(server: &MockServer) -> Config {
    Config {
        base_url: server.uri(),
        allow_insecure_http: true,
        ..Default::default()
    }
}

/// Formatter whose titles always read "{name} matches, June 2025."
pub fn june_2025(group_name: &str) -> PostFormatter {
    let clock = FixedClock(Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap());
    PostFormatter::with_clock(group_name, Arc::new(clock))
}

/// Live group credentials
pub struct LiveGroup {
    /// Group to read
    pub group_id: GroupId,
    /// Token with read access to the group
    pub token: BearerToken,
}

/// Load live group credentials from environment variables
///
/// Required environment variables:
/// - `YAMMER_GROUP_ID` - Numeric group id
/// - `YAMMER_TOKEN` - Bearer token
pub fn load_live_group() -> Result<LiveGroup, ConfigError> {
    dotenvy::dotenv().ok();

    let group_id = std::env::var("YAMMER_GROUP_ID")
        .map_err(|_| ConfigError("YAMMER_GROUP_ID not set in environment".to_string()))?
        .parse::<GroupId>()
        .map_err(|e| ConfigError(format!("YAMMER_GROUP_ID is not a number: {}", e)))?;

    let token = std::env::var("YAMMER_TOKEN")
        .map_err(|_| ConfigError("YAMMER_TOKEN not set in environment".to_string()))?;

    Ok(LiveGroup {
        group_id,
        token: BearerToken::new(token),
    })
}

/// Whether live credentials are available
pub fn has_live_credentials() -> bool {
    load_live_group().is_ok()
}
