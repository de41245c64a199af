use std::time::Duration;

/// Fallback daily goal for records that never set one explicitly.
pub const DEFAULT_DAILY_GOAL: u32 = 3;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Cadence of the full-user background sync.
    pub sync_interval: Duration,
    /// Local wall-clock hour (0-23) of the daily baseline reset.
    pub daily_reset_hour: u32,
    pub leaderboard_ttl: Duration,
    pub leaderboard_cap: usize,
    /// Minimum spacing between outbound calls, per platform.
    pub codeforces_delay: Duration,
    pub leetcode_delay: Duration,
    pub fetch_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        Config {
            port: env_parsed("PORT", 3001),
            sync_interval: Duration::from_secs(env_parsed("SYNC_INTERVAL_SECS", 2 * 60 * 60)),
            daily_reset_hour: env_parsed::<u32>("DAILY_RESET_HOUR", 0).min(23),
            leaderboard_ttl: Duration::from_secs(env_parsed("LEADERBOARD_TTL_SECS", 300)),
            leaderboard_cap: env_parsed("LEADERBOARD_CAP", 50),
            codeforces_delay: Duration::from_millis(env_parsed("CODEFORCES_DELAY_MS", 500)),
            leetcode_delay: Duration::from_millis(env_parsed("LEETCODE_DELAY_MS", 2000)),
            fetch_timeout: Duration::from_secs(env_parsed("FETCH_TIMEOUT_SECS", 8)),
        }
    }
}

fn env_parsed<T: std::str::FromStr>(name: &str, default: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}
