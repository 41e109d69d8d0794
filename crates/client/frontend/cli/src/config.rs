//! Terminal layout settings.
use std::env;
use std::str::FromStr;

/// Settings that only make sense for the terminal UI.
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    pub ui: UiConfig,
}

impl CliConfig {
    /// Reads `CLI_STATUS_PANEL_HEIGHT` (default 12, at least 3) and
    /// `CLI_LOG_PANEL_PERCENT` (default 50, clamped to 20..=80).
    pub fn from_env() -> Self {
        let defaults = UiConfig::default();
        Self {
            ui: UiConfig {
                status_panel_height: read_env("CLI_STATUS_PANEL_HEIGHT")
                    .map_or(defaults.status_panel_height, |height: u16| height.max(3)),
                log_panel_percent: read_env("CLI_LOG_PANEL_PERCENT")
                    .map_or(defaults.log_panel_percent, |percent: u16| {
                        percent.clamp(20, 80)
                    }),
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UiConfig {
    /// Status panel rows under the board, borders included.
    pub status_panel_height: u16,
    /// Share of the screen width given to the log column.
    pub log_panel_percent: u16,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            status_panel_height: 12,
            log_panel_percent: 50,
        }
    }
}

fn read_env<T: FromStr>(key: &str) -> Option<T> {
    env::var(key).ok()?.trim().parse().ok()
}
