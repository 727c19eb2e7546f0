use chrono_tz::Tz;
use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::Deserialize;
use std::str::FromStr;

#[derive(Deserialize, Debug)]
pub struct Config {
    /// SQLite database path
    #[serde(default = "default_database_path")]
    pub database_path: String,
    /// User timezone (IANA format); drives date keys and wall-clock anchoring
    #[serde(default = "detect_system_timezone")]
    pub timezone: String,
    /// Day-rollover poll cadence for the daemon mode
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
            timezone: detect_system_timezone(),
            poll_interval_secs: default_poll_interval_secs(),
        }
    }
}

impl Config {
    pub fn new() -> Result<Self, figment::Error> {
        Figment::new()
            .merge(Toml::file("ritual.toml"))
            .merge(Env::prefixed("RITUAL_"))
            .extract()
    }
}

fn default_database_path() -> String {
    "ritual.db".to_string()
}

fn default_poll_interval_secs() -> u64 {
    60
}

/// Validates that a timezone string is a valid IANA timezone name
pub fn validate_timezone(timezone: &str) -> Result<Tz, String> {
    Tz::from_str(timezone).map_err(|_| {
        format!(
            "Invalid timezone: '{}'. Use IANA timezone names like 'America/New_York'",
            timezone
        )
    })
}

/// Detects the system timezone, falling back to UTC if detection fails
pub fn detect_system_timezone() -> String {
    if let Ok(tz) = std::env::var("TZ") {
        if validate_timezone(&tz).is_ok() {
            return tz;
        }
    }

    #[cfg(target_os = "linux")]
    {
        if let Ok(tz) = std::fs::read_to_string("/etc/timezone") {
            let tz = tz.trim();
            if validate_timezone(tz).is_ok() {
                return tz.to_string();
            }
        }
    }

    if let Ok(local_tz) = iana_time_zone::get_timezone() {
        if validate_timezone(&local_tz).is_ok() {
            return local_tz;
        }
    }

    "UTC".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_timezone_accepts_iana_names() {
        assert!(validate_timezone("UTC").is_ok());
        assert!(validate_timezone("Europe/Berlin").is_ok());
        assert!(validate_timezone("Not/AZone").is_err());
    }

    #[test]
    fn detected_timezone_is_always_valid() {
        let tz = detect_system_timezone();
        assert!(validate_timezone(&tz).is_ok());
    }
}
