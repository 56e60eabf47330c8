// Copyright 2025 JiangLong.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::infrastructure::api::WaitSettings;
use crate::infrastructure::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_ENV, CONFIG_FILE_NAME, DEFAULT_IAAS_URL,
    DEFAULT_MONGODBFLEX_URL, DEFAULT_REGION, ENV_ACCESS_TOKEN, ENV_PROJECT_ID, ENV_REGION,
    IAAS_WAIT_TIMEOUT, MONGODBFLEX_WAIT_TIMEOUT, WAIT_POLL_INTERVAL,
};
use crate::shared::error::{CliError, Result};
use serde::{Deserialize, Serialize};
use std::fs::read_to_string;
use std::path::{Path, PathBuf};
use std::time::Duration;

// ============================================================================
// Main CLI configuration
// ============================================================================

/// Settings read from `config.toml`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConf {
    pub project_id: Option<String>,
    pub region: String,
    pub output_format: OutputFormat,
    pub verbosity: Verbosity,
    pub api: ApiConf,
    pub wait: WaitConf,
}

impl Default for CliConf {
    fn default() -> Self {
        Self {
            project_id: None,
            region: DEFAULT_REGION.to_string(),
            output_format: OutputFormat::default(),
            verbosity: Verbosity::default(),
            api: ApiConf::default(),
            wait: WaitConf::default(),
        }
    }
}

impl CliConf {
    pub fn from<T: AsRef<Path>>(path: T) -> Result<Self> {
        let path = path.as_ref();
        let content = read_to_string(path).map_err(|e| {
            CliError::config_error(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let conf: Self = toml::from_str(&content)?;
        Ok(conf)
    }

    /// Load from `path`, `$FLEXCTL_CONFIG_FILE` or the user config directory,
    /// falling back to defaults, then apply environment overrides.
    pub fn load(path: Option<&str>) -> Result<Self> {
        let explicit = path
            .map(PathBuf::from)
            .or_else(|| std::env::var_os(CONFIG_FILE_ENV).map(PathBuf::from));

        let mut conf = match explicit {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading config file");
                Self::from(path)?
            }
            None => match default_config_path().filter(|p| p.is_file()) {
                Some(path) => {
                    tracing::debug!(path = %path.display(), "loading config file");
                    Self::from(path)?
                }
                None => Self::default(),
            },
        };

        conf.apply_env_overrides(|key| std::env::var(key).ok());
        Ok(conf)
    }

    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(project_id) = lookup(ENV_PROJECT_ID).filter(|v| !v.is_empty()) {
            self.project_id = Some(project_id);
        }
        if let Some(region) = lookup(ENV_REGION).filter(|v| !v.is_empty()) {
            self.region = region;
        }
        if let Some(token) = lookup(ENV_ACCESS_TOKEN).filter(|v| !v.is_empty()) {
            self.api.access_token = Some(token);
        }
    }
}

/// `$XDG_CONFIG_HOME/flexctl/config.toml`, or `~/.config/flexctl/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

// ============================================================================
// Sections
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConf {
    pub mongodbflex_url: String,
    pub iaas_url: String,
    pub access_token: Option<String>,
}

impl Default for ApiConf {
    fn default() -> Self {
        Self {
            mongodbflex_url: DEFAULT_MONGODBFLEX_URL.to_string(),
            iaas_url: DEFAULT_IAAS_URL.to_string(),
            access_token: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaitConf {
    pub poll_interval_secs: u64,
    pub mongodbflex_timeout_secs: u64,
    pub iaas_timeout_secs: u64,
}

impl Default for WaitConf {
    fn default() -> Self {
        Self {
            poll_interval_secs: WAIT_POLL_INTERVAL,
            mongodbflex_timeout_secs: MONGODBFLEX_WAIT_TIMEOUT,
            iaas_timeout_secs: IAAS_WAIT_TIMEOUT,
        }
    }
}

impl From<&WaitConf> for WaitSettings {
    fn from(conf: &WaitConf) -> Self {
        Self {
            interval: Duration::from_secs(conf.poll_interval_secs),
            mongodbflex_timeout: Duration::from_secs(conf.mongodbflex_timeout_secs),
            iaas_timeout: Duration::from_secs(conf.iaas_timeout_secs),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Default,
    Json,
    Yaml,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Error,
    Warning,
    #[default]
    Info,
    Debug,
}

impl Verbosity {
    pub fn level(&self) -> tracing::Level {
        match self {
            Verbosity::Error => tracing::Level::ERROR,
            Verbosity::Warning => tracing::Level::WARN,
            Verbosity::Info => tracing::Level::INFO,
            Verbosity::Debug => tracing::Level::DEBUG,
        }
    }
}
