//! Reminder settings
//!
//! Defines how far ahead to look and whose dates to include.

use crate::ReminderError;
use serde::{Deserialize, Serialize};

/// Longest look-ahead accepted; a year covers every recurring date
pub const MAX_WINDOW_DAYS: u32 = 366;

/// Configuration for [`upcoming`](crate::upcoming)
///
/// # Examples
///
/// ```
/// use kinfolk_reminders::ReminderConfig;
///
/// let config = ReminderConfig::default();
/// assert_eq!(config.window_days, 30);
/// assert!(config.skip_deceased);
///
/// let config = ReminderConfig::with_window(7);
/// assert_eq!(config.window_days, 7);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReminderConfig {
    /// Days ahead to include, counting today as day 0
    /// Default: 30
    #[serde(default = "default_window_days")]
    pub window_days: u32,

    /// Leave out birthdays of contacts marked deceased
    /// Default: true
    #[serde(default = "default_skip_deceased")]
    pub skip_deceased: bool,
}

fn default_window_days() -> u32 {
    30
}

fn default_skip_deceased() -> bool {
    true
}

impl Default for ReminderConfig {
    fn default() -> Self {
        Self {
            window_days: default_window_days(),
            skip_deceased: default_skip_deceased(),
        }
    }
}

impl ReminderConfig {
    /// Default settings with a different look-ahead
    pub fn with_window(window_days: u32) -> Self {
        Self {
            window_days,
            ..Self::default()
        }
    }

    /// Check the settings are usable
    pub fn validate(&self) -> Result<(), ReminderError> {
        if self.window_days > MAX_WINDOW_DAYS {
            return Err(ReminderError::Config(format!(
                "window_days must be at most {}, got {}",
                MAX_WINDOW_DAYS, self.window_days
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ReminderConfig::default();
        assert_eq!(config.window_days, 30);
        assert!(config.skip_deceased);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: ReminderConfig = toml::from_str("window_days = 10").unwrap();
        assert_eq!(config.window_days, 10);
        assert!(config.skip_deceased);

        let config: ReminderConfig = toml::from_str("").unwrap();
        assert_eq!(config, ReminderConfig::default());
    }

    #[test]
    fn test_validate_rejects_long_windows() {
        assert!(ReminderConfig::with_window(366).validate().is_ok());
        assert!(matches!(
            ReminderConfig::with_window(400).validate(),
            Err(ReminderError::Config(_))
        ));
    }
}
