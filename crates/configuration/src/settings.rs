use crate::error::ConfigError;
use serde::Deserialize;

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub analytics: AnalyticsSettings,
    #[serde(default)]
    pub alerts: AlertSettings,
}

impl Config {
    /// Rejects settings the engine has no sensible interpretation for.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.analytics.window_days == 0 {
            return Err(ConfigError::ValidationError(
                "analytics.window_days must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Contains parameters for the charting and summary windows.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyticsSettings {
    /// How many days back the dashboard window reaches. The window is
    /// inclusive on both ends.
    #[serde(default = "default_window_days")]
    pub window_days: u32,
}

impl Default for AnalyticsSettings {
    fn default() -> Self {
        Self {
            window_days: default_window_days(),
        }
    }
}

/// Contains parameters for alerting.
#[derive(Debug, Clone, Deserialize)]
pub struct AlertSettings {
    /// Deaths in a single day above this count trigger the high-mortality
    /// warning.
    #[serde(default = "default_high_mortality_threshold")]
    pub high_mortality_threshold: u32,
}

impl Default for AlertSettings {
    fn default() -> Self {
        Self {
            high_mortality_threshold: default_high_mortality_threshold(),
        }
    }
}

fn default_window_days() -> u32 {
    30
}

fn default_high_mortality_threshold() -> u32 {
    15
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_dashboard() {
        let config = Config::default();
        assert_eq!(config.analytics.window_days, 30);
        assert_eq!(config.alerts.high_mortality_threshold, 15);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_day_window_is_rejected() {
        let mut config = Config::default();
        config.analytics.window_days = 0;
        assert!(config.validate().is_err());
    }
}
