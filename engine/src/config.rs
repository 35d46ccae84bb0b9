//! Configuration loading.
//!
//! Read from `{config_dir}/skillet/config.toml`; a missing file is fine
//! (everything has a default), an unreadable or unparsable file is reported.
//! The `GEMINI_API_KEY` environment variable overrides the file's key.

use std::path::{Path, PathBuf};
use std::{env, fs};

use serde::Deserialize;
use skillet_judge::{ApiKey, JudgeConfig};
use thiserror::Error;

const ENV_API_KEY: &str = "GEMINI_API_KEY";

#[derive(Debug, Default, Deserialize)]
pub struct SkilletConfig {
    pub app: Option<AppConfig>,
    pub api_keys: Option<ApiKeys>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    /// Gemini model used for judging. Defaults to the judge crate's model.
    pub model: Option<String>,
}

#[derive(Default, Deserialize)]
pub struct ApiKeys {
    pub google: Option<String>,
}

// Manual Debug impl to prevent leaking API keys in logs.
impl std::fmt::Debug for ApiKeys {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiKeys")
            .field(
                "google",
                &if self.google.is_some() {
                    "[REDACTED]"
                } else {
                    "None"
                },
            )
            .finish()
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("no Gemini API key; set {ENV_API_KEY} or `google` under [api_keys] in {path}")]
    MissingApiKey { path: PathBuf },
}

impl SkilletConfig {
    #[must_use]
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("skillet")
            .join("config.toml")
    }

    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Resolve the judging client configuration, preferring the environment
    /// over the config file for the API key.
    pub fn judge_config(&self) -> Result<JudgeConfig, ConfigError> {
        let env_key = env::var(ENV_API_KEY)
            .ok()
            .filter(|k| !k.trim().is_empty());
        self.judge_config_with_key(env_key)
    }

    fn judge_config_with_key(&self, env_key: Option<String>) -> Result<JudgeConfig, ConfigError> {
        let key = env_key
            .or_else(|| {
                self.api_keys
                    .as_ref()
                    .and_then(|keys| keys.google.clone())
                    .filter(|k| !k.trim().is_empty())
            })
            .ok_or_else(|| ConfigError::MissingApiKey {
                path: Self::config_path(),
            })?;

        let mut config = JudgeConfig::new(ApiKey::new(key));
        if let Some(model) = self.app.as_ref().and_then(|app| app.model.clone()) {
            config = config.with_model(model);
        }
        Ok(config)
    }
}
