use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::core::context::OutputFormat;
use crate::core::data::{DEFAULT_TARGET_FUNCTION, TargetFunction};

pub const CONFIG_FILE_NAME: &str = ".xtractrc.json";

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Target function as `module.Name`.
    #[serde(default = "default_function")]
    pub function: String,
    /// Directory import paths are resolved under. Falls back to
    /// `$GOPATH/src` when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module_root: Option<String>,
    #[serde(default)]
    pub ignores: Vec<String>,
    #[serde(default = "default_true")]
    pub ignore_test_files: bool,
    #[serde(default = "default_true")]
    pub ignore_vendor: bool,
    #[serde(default)]
    pub format: OutputFormat,
}

fn default_function() -> String {
    DEFAULT_TARGET_FUNCTION.to_string()
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            function: default_function(),
            module_root: None,
            ignores: Vec::new(),
            ignore_test_files: true,
            ignore_vendor: true,
            format: OutputFormat::default(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if the target function or any `ignores` glob is
    /// invalid.
    pub fn validate(&self) -> Result<()> {
        TargetFunction::parse(&self.function)
            .with_context(|| format!("Invalid 'function': \"{}\"", self.function))?;

        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Where the config was read from; `None` when using defaults.
    pub path: Option<PathBuf>,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                path: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}
