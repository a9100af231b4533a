use thiserror::Error;

use crate::period::StatisticsWindow;

/// Expense list size used by the current backend revision
pub const DEFAULT_EXPENSES_LIMIT: u32 = 30;

pub const KEY_API_BASE_URL: &str = "api-base-url";
pub const KEY_EXPENSES_LIMIT: &str = "expenses-limit";
pub const KEY_STATISTICS_WINDOW: &str = "statistics-window";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("expenses-limit must be a positive integer, got {0:?}")]
    InvalidLimit(String),
    #[error("statistics-window must be \"month\" or \"trailing-days:N\", got {0:?}")]
    InvalidWindow(String),
}

/// Client settings, resolved once at startup
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Prefix for every endpoint path; empty means same origin
    pub api_base_url: String,
    /// Number of recent expenses shown in the expenses table
    pub expenses_limit: u32,
    pub statistics_window: StatisticsWindow,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::new(),
            expenses_limit: DEFAULT_EXPENSES_LIMIT,
            statistics_window: StatisticsWindow::CalendarMonth,
        }
    }
}

impl ClientConfig {
    /// Build a config from a key lookup; missing keys keep their defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(base_url) = lookup(KEY_API_BASE_URL) {
            config.api_base_url = base_url.trim().trim_end_matches('/').to_string();
        }

        if let Some(limit) = lookup(KEY_EXPENSES_LIMIT) {
            config.expenses_limit = match limit.trim().parse::<u32>() {
                Ok(value) if value > 0 => value,
                _ => return Err(ConfigError::InvalidLimit(limit)),
            };
        }

        if let Some(window) = lookup(KEY_STATISTICS_WINDOW) {
            config.statistics_window = parse_window(&window)?;
        }

        Ok(config)
    }

    /// Absolute URL for an endpoint path
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base_url, path)
    }
}

fn parse_window(value: &str) -> Result<StatisticsWindow, ConfigError> {
    let trimmed = value.trim();
    if trimmed == "month" {
        return Ok(StatisticsWindow::CalendarMonth);
    }
    trimmed
        .strip_prefix("trailing-days:")
        .and_then(|days| days.parse::<u32>().ok())
        .filter(|days| *days > 0)
        .map(StatisticsWindow::TrailingDays)
        .ok_or_else(|| ConfigError::InvalidWindow(value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ClientConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.expenses_limit, 30);
        assert_eq!(config.url("/expense"), "/expense");
    }

    #[test]
    fn test_overrides() {
        let config = ClientConfig::from_lookup(lookup_from(&[
            ("api-base-url", "http://localhost:5000/"),
            ("expenses-limit", "10"),
            ("statistics-window", "trailing-days:30"),
        ]))
        .unwrap();

        assert_eq!(config.url("/categories"), "http://localhost:5000/categories");
        assert_eq!(config.expenses_limit, 10);
        assert_eq!(config.statistics_window, StatisticsWindow::TrailingDays(30));
    }

    #[test]
    fn test_invalid_values() {
        assert_eq!(
            ClientConfig::from_lookup(lookup_from(&[("expenses-limit", "0")])),
            Err(ConfigError::InvalidLimit("0".to_string()))
        );
        assert_eq!(
            ClientConfig::from_lookup(lookup_from(&[("statistics-window", "weekly")])),
            Err(ConfigError::InvalidWindow("weekly".to_string()))
        );
        assert!(ClientConfig::from_lookup(lookup_from(&[("statistics-window", "trailing-days:x")])).is_err());
    }
}
