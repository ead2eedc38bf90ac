//! Runtime configuration handed to the single-page application.
//!
//! The backend serves it as `/app-config.json`; every field has a default so
//! a partial or missing document still yields a usable configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const CONFIG_PATH: &str = "/app-config.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Prefix of every REST endpoint, e.g. `/api` or `https://host/api`.
    pub api_base_url: String,
    /// Pause before the admin sign-out request is sent.
    pub logout_delay_ms: u32,
    /// Pause between a successful sign-out and the redirect to the login page.
    pub redirect_delay_ms: u32,
    pub toast_duration_ms: u32,
    /// `error`, `warn`, `info`, `debug` or `trace`.
    pub log_level: String,
    /// External viewer used for PDFs and unknown document types.
    pub document_viewer_base: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: "/api".to_string(),
            logout_delay_ms: 1500,
            redirect_delay_ms: 500,
            toast_duration_ms: 3000,
            log_level: "info".to_string(),
            document_viewer_base: "https://docs.google.com/gview".to_string(),
        }
    }
}

impl ClientConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_base_url.trim().is_empty() {
            return Err(ConfigError::BlankApiBase);
        }
        if self.toast_duration_ms == 0 {
            return Err(ConfigError::ZeroToastDuration);
        }
        self.level_filter().map(|_| ())
    }

    pub fn level_filter(&self) -> Result<log::LevelFilter, ConfigError> {
        self.log_level
            .parse()
            .map_err(|_| ConfigError::UnknownLogLevel(self.log_level.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_documents_fall_back_to_defaults() {
        let config: ClientConfig =
            serde_json::from_str(r#"{"api_base_url": "https://api.newra.in"}"#).unwrap();
        assert_eq!(config.api_base_url, "https://api.newra.in");
        assert_eq!(config.logout_delay_ms, 1500);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn invalid_values_are_reported() {
        let blank = ClientConfig {
            api_base_url: " ".to_string(),
            ..ClientConfig::default()
        };
        assert_eq!(blank.validate(), Err(ConfigError::BlankApiBase));

        let noisy = ClientConfig {
            log_level: "loud".to_string(),
            ..ClientConfig::default()
        };
        assert_eq!(
            noisy.validate(),
            Err(ConfigError::UnknownLogLevel("loud".to_string()))
        );
    }
}
