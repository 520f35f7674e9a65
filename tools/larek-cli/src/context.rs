//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use larek_commerce::Storefront;
use larek_data::{FetchClient, RestApi, TimeoutConfig};

use crate::config::{CliConfig, CONFIG_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// File the configuration came from, if any.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = match config_path {
            Some(path) => (CliConfig::load(path)?, Some(PathBuf::from(path))),
            None => match find_config(&cwd) {
                Some(path) => {
                    let config = CliConfig::load(&path.to_string_lossy())?;
                    (config, Some(path))
                }
                None => (CliConfig::default(), None),
            },
        };

        let config = config.with_env_overrides();
        tracing::debug!(api_url = %config.api.api_url(), path = ?config_path, "Configuration loaded");

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// Open a storefront session against the configured API.
    pub fn storefront(&self) -> Result<Storefront<RestApi>> {
        let client = FetchClient::new()
            .with_base_url(self.config.api.api_url())
            .with_timeout(TimeoutConfig::from_millis(self.config.api.timeout_ms))
            .context("Failed to build HTTP client")?;

        Ok(Storefront::new(RestApi::from_client(client)))
    }
}

/// Find the nearest config file, walking up from `start`.
pub fn find_config(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        for name in &CONFIG_NAMES {
            let candidate = current.join(name);
            if candidate.is_file() {
                return Some(candidate);
            }
        }

        if !current.pop() {
            return None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_config_walks_up() {
        let root = std::env::temp_dir().join(format!("larek-cli-ctx-{}", std::process::id()));
        let nested = root.join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(root.join(".larek.toml"), "").unwrap();

        assert_eq!(find_config(&nested), Some(root.join(".larek.toml")));

        std::fs::write(nested.join("larek.json"), "{}").unwrap();
        assert_eq!(find_config(&nested), Some(nested.join("larek.json")));

        std::fs::remove_dir_all(&root).unwrap();
    }
}
