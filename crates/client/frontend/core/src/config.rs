//! Frontend configuration structures and loaders.
//!
//! UI-specific settings shared across frontend implementations.
use std::env;
use std::time::Duration;

/// Frontend-specific configuration.
#[derive(Clone, Debug)]
pub struct FrontendConfig {
    /// How often the event loop polls the keyboard. A redraw follows only a
    /// handled key or a view change.
    pub frame_interval: Duration,
    /// Submitted lines remembered for history navigation.
    pub history_capacity: usize,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            frame_interval: Duration::from_millis(16),
            history_capacity: 100,
        }
    }
}

impl FrontendConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `CLI_FRAME_INTERVAL_MS` - Keyboard poll interval (default: 16)
    /// - `CLI_HISTORY_CAPACITY` - Input history size (default: 100)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(ms) = read_env::<u64>("CLI_FRAME_INTERVAL_MS") {
            config.frame_interval = Duration::from_millis(ms.max(1));
        }

        if let Some(capacity) = read_env::<usize>("CLI_HISTORY_CAPACITY") {
            config.history_capacity = capacity.max(1);
        }

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
