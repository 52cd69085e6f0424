use serde::{Deserialize, Serialize};

pub const DEFAULT_API_URL: &str = "http://localhost:8228/api";
pub const DEFAULT_TOAST_DURATION_MS: u32 = 3000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_url: String,
    pub environment: String,
    pub enable_logging: bool,
    pub log_level: String,
    pub toast_duration_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            log_level: "info".to_string(),
            toast_duration_ms: DEFAULT_TOAST_DURATION_MS,
        }
    }
}

impl AppConfig {
    /// Loads the configuration from compile-time environment variables
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("API_URL"),
            option_env!("ENVIRONMENT"),
            option_env!("ENABLE_LOGGING"),
            option_env!("LOG_LEVEL"),
            option_env!("TOAST_DURATION_MS"),
        )
    }

    /// Builds a config from raw values, falling back to defaults for anything
    /// missing or unparseable.
    pub fn from_values(
        api_url: Option<&str>,
        environment: Option<&str>,
        enable_logging: Option<&str>,
        log_level: Option<&str>,
        toast_duration_ms: Option<&str>,
    ) -> Self {
        let defaults = Self::default();

        let api_url = api_url
            .map(|url| url.trim().trim_end_matches('/'))
            .filter(|url| !url.is_empty())
            .map(str::to_string)
            .unwrap_or(defaults.api_url);

        let log_level = log_level
            .map(|level| level.trim().to_lowercase())
            .filter(|level| level.parse::<log::Level>().is_ok())
            .unwrap_or(defaults.log_level);

        Self {
            api_url,
            environment: environment
                .map(|env| env.trim().to_lowercase())
                .filter(|env| !env.is_empty())
                .unwrap_or(defaults.environment),
            enable_logging: enable_logging
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.enable_logging),
            log_level,
            toast_duration_ms: toast_duration_ms
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.toast_duration_ms),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Effective level for the browser console logger
    pub fn log_level(&self) -> log::Level {
        if !self.enable_logging {
            return log::Level::Warn;
        }
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}

// Global config, resolved once
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
