use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub backend: BackendConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    pub logging: LoggingConfig,
    #[serde(default)]
    pub seed: SeedConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    #[serde(default = "default_num_threads")]
    pub num_threads: usize,
}

/// Which integration mode the service runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendMode {
    /// Delegate auth and persistence to a remote REST API.
    Rest,
    /// Query the in-process table store directly, hashing passwords locally.
    Direct,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BackendConfig {
    pub mode: BackendMode,
    /// Base URL of the remote API; required in rest mode.
    #[serde(default)]
    pub endpoint: String,
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    #[serde(default = "default_bcrypt_cost")]
    pub bcrypt_cost: u32,
    #[serde(default = "default_session_file")]
    pub session_file: PathBuf,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            bcrypt_cost: default_bcrypt_cost(),
            session_file: default_session_file(),
        }
    }
}

/// Rows loaded into the direct-mode table store at boot.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeedConfig {
    /// Category name -> default image URL for the `category_defaults`
    /// collection. Unknown category names are skipped with a warning.
    #[serde(default)]
    pub category_defaults: std::collections::HashMap<String, String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
    #[serde(default = "default_console")]
    pub console: bool,
}

// Default value functions
fn default_num_threads() -> usize {
    num_cpus::get()
}

fn default_request_timeout() -> u64 {
    30
}

fn default_bcrypt_cost() -> u32 {
    10
}

fn default_session_file() -> PathBuf {
    PathBuf::from("session.json")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

fn default_console() -> bool {
    false
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .context("Failed to parse config file")?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            bail!("Server port must be greater than 0");
        }

        if self.server.num_threads == 0 {
            bail!("num_threads must be greater than 0");
        }

        if self.backend.mode == BackendMode::Rest && self.backend.endpoint.is_empty() {
            bail!("backend.endpoint must be set when backend.mode is \"rest\"");
        }

        if self.backend.request_timeout_secs == 0 {
            bail!("request_timeout_secs must be greater than 0");
        }

        // bcrypt rejects costs outside 4..=31
        if !(4..=31).contains(&self.auth.bcrypt_cost) {
            bail!(
                "bcrypt_cost ({}) must be between 4 and 31",
                self.auth.bcrypt_cost
            );
        }

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            bail!(
                "Invalid log level '{}'. Must be one of: trace, debug, info, warn, error",
                self.logging.level
            );
        }

        let valid_formats = ["json", "console"];
        if !valid_formats.contains(&self.logging.format.as_str()) {
            bail!(
                "Invalid log format '{}'. Must be one of: json, console",
                self.logging.format
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(toml_str: &str) -> Config {
        toml::from_str(toml_str).expect("Failed to parse config")
    }

    #[test]
    fn test_direct_mode_minimal_config() {
        let config = parse(
            r#"
            [server]
            port = 8081

            [backend]
            mode = "direct"

            [logging]
            "#,
        );

        config.validate().expect("Config should be valid");
        assert_eq!(config.backend.mode, BackendMode::Direct);
        assert_eq!(config.auth.bcrypt_cost, 10);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_rest_mode_requires_endpoint() {
        let config = parse(
            r#"
            [server]
            port = 8081

            [backend]
            mode = "rest"

            [logging]
            "#,
        );

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rest_mode_with_endpoint() {
        let config = parse(
            r#"
            [server]
            port = 8081

            [backend]
            mode = "rest"
            endpoint = "https://lostandfound-backend.example.com"

            [logging]
            level = "debug"
            format = "console"
            "#,
        );

        config.validate().expect("Config should be valid");
        assert_eq!(config.backend.mode, BackendMode::Rest);
    }

    #[test]
    fn test_rejects_zero_port() {
        let config = parse(
            r#"
            [server]
            port = 0

            [backend]
            mode = "direct"

            [logging]
            "#,
        );

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_out_of_range_bcrypt_cost() {
        let config = parse(
            r#"
            [server]
            port = 8081

            [backend]
            mode = "direct"

            [auth]
            bcrypt_cost = 40

            [logging]
            "#,
        );

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_bad_log_level() {
        let config = parse(
            r#"
            [server]
            port = 8081

            [backend]
            mode = "direct"

            [logging]
            level = "verbose"
            "#,
        );

        assert!(config.validate().is_err());
    }
}
