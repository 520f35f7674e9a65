//! CLI configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Environment variable that overrides `api.origin`.
pub const ORIGIN_ENV: &str = "LAREK_API_ORIGIN";

/// File names searched for, in order.
pub const CONFIG_NAMES: [&str; 3] = ["larek.toml", ".larek.toml", "larek.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Storefront API settings.
    #[serde(default)]
    pub api: ApiConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        Self::parse(path, &content)
    }

    /// Parse config text; the format follows the file extension.
    pub fn parse(path: &str, content: &str) -> Result<Self> {
        if path.ends_with(".json") {
            serde_json::from_str(content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(content).with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Apply overrides from the environment.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(origin) = std::env::var(ORIGIN_ENV) {
            self.apply_origin(&origin);
        }
        self
    }

    fn apply_origin(&mut self, origin: &str) {
        let origin = origin.trim();
        if !origin.is_empty() {
            self.api.origin = origin.to_string();
        }
    }
}

/// Storefront API location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Scheme and host of the API server.
    #[serde(default = "default_origin")]
    pub origin: String,

    /// Path of the REST API under the origin.
    #[serde(default = "default_api_path")]
    pub api_path: String,

    /// Path of the product image CDN under the origin.
    #[serde(default = "default_cdn_path")]
    pub cdn_path: String,

    /// Total request timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_origin() -> String {
    "https://larek-api.nomoreparties.co".to_string()
}

fn default_api_path() -> String {
    "/api/weblarek".to_string()
}

fn default_cdn_path() -> String {
    "/content/weblarek".to_string()
}

fn default_timeout_ms() -> u64 {
    20_000
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            origin: default_origin(),
            api_path: default_api_path(),
            cdn_path: default_cdn_path(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl ApiConfig {
    /// Base URL of the REST API.
    pub fn api_url(&self) -> String {
        join_url(&self.origin, &self.api_path)
    }

    /// Base URL product images are resolved against.
    pub fn cdn_url(&self) -> String {
        join_url(&self.origin, &self.cdn_path)
    }
}

fn join_url(origin: &str, path: &str) -> String {
    format!(
        "{}/{}",
        origin.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Generate a default larek.toml config file.
pub fn generate_default_config() -> String {
    format!(
        r#"# web-larek storefront configuration

[api]
origin = "{origin}"
api_path = "{api_path}"
cdn_path = "{cdn_path}"
timeout_ms = {timeout_ms}
"#,
        origin = default_origin(),
        api_path = default_api_path(),
        cdn_path = default_cdn_path(),
        timeout_ms = default_timeout_ms(),
    )
}
