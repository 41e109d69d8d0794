//! Runtime configuration structures and loaders.
use std::env;
use std::time::Duration;

/// Configuration for a client runtime talking to one server.
#[derive(Clone, Debug)]
pub struct RuntimeConfig {
    /// Base URL every API path is joined onto.
    pub api_host: String,
    /// Cadence of each refresh loop.
    pub poll_interval: Duration,
    /// Per-request HTTP timeout, also the deadline for a whole command dispatch.
    pub request_timeout: Duration,
    pub retry: RetryPolicy,
    /// Number of most recent events kept in the log view.
    pub event_log_limit: usize,
    /// Capacity of the notice log shown above the events.
    pub notice_capacity: usize,
    /// Label for this run's log directory.
    pub session_label: Option<String>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            api_host: "http://localhost:8080/api".to_string(),
            poll_interval: Duration::from_secs(1),
            request_timeout: Duration::from_secs(5),
            retry: RetryPolicy::default(),
            event_log_limit: 500,
            notice_capacity: 64,
            session_label: None,
        }
    }
}

impl RuntimeConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `SCONWAR_API_HOST` - Server base URL (default: http://localhost:8080/api)
    /// - `SCONWAR_POLL_INTERVAL_MS` - Refresh cadence (default: 1000)
    /// - `SCONWAR_REQUEST_TIMEOUT_MS` - Request/dispatch timeout (default: 5000)
    /// - `SCONWAR_LOOP_MAX_RETRIES` - Consecutive transient failures tolerated (default: 3)
    /// - `SCONWAR_EVENT_LOG_LIMIT` - Events kept in the log view (default: 500)
    /// - `SCONWAR_NOTICE_CAPACITY` - Notices kept above the events (default: 64)
    /// - `SCONWAR_SESSION_LABEL` - Log directory label (default: auto-generated)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(host) = env::var("SCONWAR_API_HOST")
            .ok()
            .map(|host| host.trim().to_string())
            .filter(|host| !host.is_empty())
        {
            config.api_host = host;
        }

        if let Some(ms) = read_env::<u64>("SCONWAR_POLL_INTERVAL_MS") {
            config.poll_interval = Duration::from_millis(ms.max(1));
        }

        if let Some(ms) = read_env::<u64>("SCONWAR_REQUEST_TIMEOUT_MS") {
            config.request_timeout = Duration::from_millis(ms.max(1));
        }

        if let Some(retries) = read_env::<u32>("SCONWAR_LOOP_MAX_RETRIES") {
            config.retry.max_retries = retries;
        }

        if let Some(limit) = read_env::<usize>("SCONWAR_EVENT_LOG_LIMIT") {
            config.event_log_limit = limit.max(1);
        }

        if let Some(capacity) = read_env::<usize>("SCONWAR_NOTICE_CAPACITY") {
            config.notice_capacity = capacity.max(1);
        }

        config.session_label = env::var("SCONWAR_SESSION_LABEL").ok();

        config
    }
}

/// Bounded exponential backoff for transient refresh failures.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Consecutive transient failures tolerated before a loop gives up.
    pub max_retries: u32,
    pub initial_backoff: Duration,
    pub max_backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_backoff: Duration::from_millis(500),
            max_backoff: Duration::from_secs(8),
        }
    }
}

impl RetryPolicy {
    /// Delay before retry number `attempt` (1-based): doubles from
    /// `initial_backoff`, capped at `max_backoff`.
    pub fn backoff(&self, attempt: u32) -> Duration {
        let exponent = attempt.saturating_sub(1).min(31);
        self.initial_backoff
            .saturating_mul(1 << exponent)
            .min(self.max_backoff)
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
