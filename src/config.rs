use std::env;
use std::path::PathBuf;
use std::time::Duration;

use secrecy::SecretString;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_ADVANCE_DELAY_MS: u64 = 300;
pub const DEFAULT_CLOCK_TICK_MS: u64 = 1000;

#[derive(Clone, Debug)]
pub struct Config {
    pub api_key: Option<SecretString>,
    pub model: String,
    pub base_url: String,
    pub request_timeout: Duration,
    pub advance_delay: Duration,
    pub clock_tick: Duration,
    pub log_file: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            api_key: env::var("GEMINI_API_KEY")
                .ok()
                .filter(|k| !k.trim().is_empty())
                .map(SecretString::from),
            model: env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            base_url: env::var("GEMINI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            request_timeout: Duration::from_secs(
                env::var("QUESTION_REQUEST_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
            ),
            advance_delay: Duration::from_millis(
                env::var("ADVANCE_DELAY_MS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(DEFAULT_ADVANCE_DELAY_MS),
            ),
            clock_tick: Duration::from_millis(
                env::var("CLOCK_TICK_MS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .filter(|ms| *ms > 0)
                    .unwrap_or(DEFAULT_CLOCK_TICK_MS),
            ),
            log_file: env::var("REET_LOG_FILE").ok().map(PathBuf::from),
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            api_key: Some(SecretString::from("test-key".to_string())),
            model: DEFAULT_MODEL.to_string(),
            base_url: "http://127.0.0.1:9".to_string(),
            request_timeout: Duration::from_secs(1),
            advance_delay: Duration::from_millis(DEFAULT_ADVANCE_DELAY_MS),
            clock_tick: Duration::from_millis(DEFAULT_CLOCK_TICK_MS),
            log_file: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env_with_defaults() {
        let config = Config::from_env();

        assert!(!config.model.is_empty());
        assert!(!config.base_url.is_empty());
        assert!(config.clock_tick > Duration::ZERO);
    }

    #[test]
    fn test_test_config() {
        let config = Config::test_config();

        assert_eq!(config.model, "gemini-2.5-flash");
        assert_eq!(config.advance_delay, Duration::from_millis(300));
        assert!(config.api_key.is_some());
    }
}
