//! # Server Configuration
//!
//! Settings of the static host, read from `NEWRA_*` environment variables.
//! Every variable is optional; an unparsable value aborts start-up.
//!
//! | Variable                | Default          |
//! |-------------------------|------------------|
//! | `NEWRA_HOST`            | `127.0.0.1`      |
//! | `NEWRA_PORT`            | `8080`           |
//! | `NEWRA_STATIC_DIR`      | `./static/dist`  |
//! | `NEWRA_API_BASE_URL`    | `/api`           |
//! | `NEWRA_OPEN_BROWSER`    | `false`          |
//! | `NEWRA_LOGOUT_DELAY_MS` | `1500`           |

use std::env;
use std::str::FromStr;

use common::config::ClientConfig;

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory holding the built single-page application.
    pub static_dir: String,
    pub api_base_url: String,
    pub open_browser: bool,
    pub logout_delay_ms: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        let client = ClientConfig::default();
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            static_dir: "./static/dist".to_string(),
            api_base_url: client.api_base_url,
            open_browser: false,
            logout_delay_ms: client.logout_delay_ms,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from `lookup`, which returns the value of an
    /// environment variable when it is set.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        let defaults = Self::default();
        Ok(Self {
            host: lookup("NEWRA_HOST").unwrap_or(defaults.host),
            port: parsed(&lookup, "NEWRA_PORT")?.unwrap_or(defaults.port),
            static_dir: lookup("NEWRA_STATIC_DIR").unwrap_or(defaults.static_dir),
            api_base_url: lookup("NEWRA_API_BASE_URL").unwrap_or(defaults.api_base_url),
            open_browser: parsed(&lookup, "NEWRA_OPEN_BROWSER")?.unwrap_or(defaults.open_browser),
            logout_delay_ms: parsed(&lookup, "NEWRA_LOGOUT_DELAY_MS")?
                .unwrap_or(defaults.logout_delay_ms),
        })
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    /// The configuration handed to the browser as `/app-config.json`.
    pub fn client_config(&self) -> Result<ClientConfig, String> {
        let config = ClientConfig {
            api_base_url: self.api_base_url.clone(),
            logout_delay_ms: self.logout_delay_ms,
            ..ClientConfig::default()
        };
        config.validate().map_err(|e| e.to_string())?;
        Ok(config)
    }
}

fn parsed<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> Result<Option<T>, String> {
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| format!("{} has an invalid value: {:?}", key, raw)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.url(), "http://127.0.0.1:8080");
    }

    #[test]
    fn variables_override_defaults() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("NEWRA_PORT", "9000"),
            ("NEWRA_OPEN_BROWSER", "true"),
            ("NEWRA_API_BASE_URL", "https://api.newra.test"),
        ]))
        .unwrap();
        assert_eq!(config.port, 9000);
        assert!(config.open_browser);
        assert_eq!(
            config.client_config().unwrap().api_base_url,
            "https://api.newra.test"
        );
    }

    #[test]
    fn bad_values_are_reported() {
        let err = ServerConfig::from_lookup(lookup(&[("NEWRA_PORT", "eighty")])).unwrap_err();
        assert!(err.contains("NEWRA_PORT"));
    }

    #[test]
    fn blank_api_base_is_refused() {
        let config = ServerConfig {
            api_base_url: " ".to_string(),
            ..ServerConfig::default()
        };
        assert!(config.client_config().is_err());
    }
}
