//! Top-level GoAST configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{ScanConfig, TreeConfig};
use crate::errors::ConfigError;

/// Project config file name, looked up in the project root.
pub const PROJECT_CONFIG_FILE: &str = "goast.toml";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`GOAST_*`)
/// 3. Project config (`goast.toml` in project root)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GoastConfig {
    pub scan: ScanConfig,
    pub tree: TreeConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub scan_max_file_size: Option<u64>,
    pub scan_parallel: Option<bool>,
    pub tree_include_comments: Option<bool>,
    pub tree_max_nesting: Option<u32>,
}

impl GoastConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
            ::tracing::debug!(path = %project_config_path.display(), "loaded project config");
        }

        Self::apply_env_overrides(&mut config);

        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &GoastConfig) -> Result<(), ConfigError> {
        if config.scan.max_file_size == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "scan.max_file_size".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if config.tree.max_nesting == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "tree.max_nesting".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }

    fn merge_toml_file(config: &mut GoastConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: GoastConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; only `Some` values in `other` override.
    fn merge(base: &mut GoastConfig, other: &GoastConfig) {
        if other.scan.max_file_size.is_some() {
            base.scan.max_file_size = other.scan.max_file_size;
        }
        if other.scan.parallel.is_some() {
            base.scan.parallel = other.scan.parallel;
        }
        if other.tree.include_comments.is_some() {
            base.tree.include_comments = other.tree.include_comments;
        }
        if other.tree.max_nesting.is_some() {
            base.tree.max_nesting = other.tree.max_nesting;
        }
    }

    /// Apply environment variable overrides.
    /// Unparseable values are ignored.
    fn apply_env_overrides(config: &mut GoastConfig) {
        if let Ok(val) = std::env::var("GOAST_SCAN_MAX_FILE_SIZE") {
            if let Ok(v) = val.parse::<u64>() {
                config.scan.max_file_size = Some(v);
            }
        }
        if let Ok(val) = std::env::var("GOAST_SCAN_PARALLEL") {
            if let Ok(v) = val.parse::<bool>() {
                config.scan.parallel = Some(v);
            }
        }
        if let Ok(val) = std::env::var("GOAST_TREE_INCLUDE_COMMENTS") {
            if let Ok(v) = val.parse::<bool>() {
                config.tree.include_comments = Some(v);
            }
        }
        if let Ok(val) = std::env::var("GOAST_TREE_MAX_NESTING") {
            if let Ok(v) = val.parse::<u32>() {
                config.tree.max_nesting = Some(v);
            }
        }
    }

    fn apply_cli_overrides(config: &mut GoastConfig, cli: &CliOverrides) {
        if let Some(v) = cli.scan_max_file_size {
            config.scan.max_file_size = Some(v);
        }
        if let Some(v) = cli.scan_parallel {
            config.scan.parallel = Some(v);
        }
        if let Some(v) = cli.tree_include_comments {
            config.tree.include_comments = Some(v);
        }
        if let Some(v) = cli.tree_max_nesting {
            config.tree.max_nesting = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
