use crate::error::{timezone_error, FeederResult};
use chrono_tz::Tz;
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;

/// Default timezone for interpreting schedule wall-clock times
pub const DEFAULT_TIMEZONE: &str = "UTC";

/// Main configuration structure for the feeder core
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// IANA timezone feeding times are entered in
    pub timezone: String,
}

/// Optional overrides read from config/feeder.toml
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    timezone: Option<String>,
}

impl Config {
    /// Load configuration from environment and config file
    pub fn load() -> FeederResult<Self> {
        // Load .env file if it exists
        dotenv().ok();

        // Default timezone
        let mut timezone = env::var("TIMEZONE").unwrap_or_else(|_| String::from(DEFAULT_TIMEZONE));

        // A config file entry overrides the environment
        if let Ok(content) = fs::read_to_string("config/feeder.toml") {
            let file_config: FileConfig = toml::from_str(&content)?;
            if let Some(tz) = file_config.timezone {
                timezone = tz;
            }
        }

        let config = Config { timezone };

        // Validate the timezone up front
        config.tz()?;

        Ok(config)
    }

    /// Parsed timezone for the schedule compiler
    pub fn tz(&self) -> FeederResult<Tz> {
        self.timezone
            .parse()
            .map_err(|_| timezone_error(&self.timezone))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tz_parses_known_zones() {
        let config = Config {
            timezone: "Australia/Sydney".to_string(),
        };
        assert_eq!(config.tz().unwrap(), chrono_tz::Australia::Sydney);

        let config = Config {
            timezone: DEFAULT_TIMEZONE.to_string(),
        };
        assert_eq!(config.tz().unwrap(), chrono_tz::UTC);
    }

    #[test]
    fn test_tz_rejects_unknown_zone() {
        let config = Config {
            timezone: "Atlantis/Lemuria".to_string(),
        };
        assert!(config.tz().is_err());
    }
}
