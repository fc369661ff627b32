//! Engine configuration from environment variables

use crate::binder::MenuUrlConfig;
use std::path::Path;

/// Engine configuration
///
/// # Environment variables
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | MENU_BASE_URL | http://localhost:5173 | Origin of the public QR menu |
/// | LOG_LEVEL | info | Log level when `RUST_LOG` is unset |
/// | LOG_JSON | false | JSON log output |
/// | LOG_DIR | (unset) | Directory for rotating log files |
/// | ENVIRONMENT | development | development, staging or production |
///
/// # Example
///
/// ```ignore
/// MENU_BASE_URL=https://menu.example.com LOG_JSON=true cargo run
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub menu_base_url: String,
    pub log_level: String,
    pub log_json: bool,
    pub log_dir: Option<String>,
    pub environment: String,
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl Config {
    /// Load from the process environment, reading `.env` first when present
    pub fn load() -> Self {
        if let Ok(path) = dotenv::dotenv() {
            tracing::debug!(path = %path.display(), "Loaded .env file");
        }
        Self::from_env()
    }

    /// Load from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup (environment, test tables)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            menu_base_url: lookup("MENU_BASE_URL")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| "http://localhost:5173".into()),
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".into()),
            log_json: lookup("LOG_JSON")
                .and_then(|v| parse_bool(&v))
                .unwrap_or(false),
            log_dir: lookup("LOG_DIR").filter(|v| !v.trim().is_empty()),
            environment: lookup("ENVIRONMENT").unwrap_or_else(|| "development".into()),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn menu_urls(&self) -> MenuUrlConfig {
        MenuUrlConfig::new(self.menu_base_url.as_str())
    }

    /// Install the global logger described by this config
    pub fn init_logging(&self) -> anyhow::Result<()> {
        crate::utils::init_logger_with_file(
            &self.log_level,
            self.log_json,
            self.log_dir.as_deref().map(Path::new),
        )
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
