use std::env;
use std::time::Duration;

use persistence::session::repository::DEFAULT_IDLE_TTL;

/// Session store configuration
///
/// Environment variables:
/// - SESSION_IDLE_TTL_SECS: Seconds a settled session may sit untouched before
///   it is dropped (default: 1800)
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub idle_ttl: Duration,
}

impl SessionConfig {
    pub fn from_env() -> Self {
        Self::parse(env::var("SESSION_IDLE_TTL_SECS").ok().as_deref())
    }

    fn parse(raw: Option<&str>) -> Self {
        let idle_ttl = raw
            .and_then(|v| v.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_IDLE_TTL);

        Self { idle_ttl }
    }
}
