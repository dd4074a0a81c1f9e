use moviequeue_catalog::DEFAULT_API_BASE_URL;
use moviequeue_message::SplitConfig;
use moviequeue_providers::DEFAULT_WOSTREAM_BASE_URL;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_POLL_OPTION: &str = "Mir egal";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("`{0}` must be set")]
    Missing(&'static str),

    #[error("`{key}` has an invalid value: {value:?}")]
    Invalid { key: &'static str, value: String },
}

/// Optional TOML file. Every value can be overridden from the environment.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FileConfig {
    api: ApiSection,
    telegram: TelegramSection,
    wostream: WostreamSection,
    poll: PollSection,
    message: Option<SplitConfig>,
    app_version: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ApiSection {
    base_url: Option<String>,
    token: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TelegramSection {
    token: Option<String>,
    poll_chat_id: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct WostreamSection {
    base_url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PollSection {
    default_options: Option<Vec<String>>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: String,
    pub api_token: Option<String>,
    pub telegram_token: Option<String>,
    pub poll_chat_id: Option<i64>,
    pub wostream_base_url: String,
    pub app_version: String,
    pub poll_default_options: Vec<String>,
    pub message: SplitConfig,
}

impl Config {
    /// Reads the optional config file, then applies the process environment on top.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let file = match path {
            Some(path) => {
                let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })?;
                toml::from_str(&raw)?
            }
            None => FileConfig::default(),
        };
        Self::from_sources(file, |key| std::env::var(key).ok())
    }

    fn from_sources(
        file: FileConfig,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let env = |key: &str| env(key).filter(|value| !value.trim().is_empty());

        let poll_chat_id = match env("TELEGRAM_POLL_CHAT_ID") {
            Some(raw) => Some(raw.trim().parse::<i64>().map_err(|_| ConfigError::Invalid {
                key: "TELEGRAM_POLL_CHAT_ID",
                value: raw,
            })?),
            None => file.telegram.poll_chat_id,
        };

        let poll_default_options = env("POLL_DEFAULT_OPTIONS")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|opt| !opt.is_empty())
                    .map(str::to_string)
                    .collect::<Vec<_>>()
            })
            .or(file.poll.default_options)
            .unwrap_or_else(|| vec![DEFAULT_POLL_OPTION.to_string()]);

        Ok(Self {
            api_base_url: env("API_BASE_URL")
                .or(file.api.base_url)
                .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
            api_token: env("API_TOKEN").or(file.api.token),
            telegram_token: env("TELEGRAM_TOKEN").or(file.telegram.token),
            poll_chat_id,
            wostream_base_url: env("WOSTREAM_BASE_URL")
                .or(file.wostream.base_url)
                .unwrap_or_else(|| DEFAULT_WOSTREAM_BASE_URL.to_string()),
            app_version: env("APP_VERSION")
                .or(file.app_version)
                .unwrap_or_else(|| "dev".to_string()),
            poll_default_options,
            message: file.message.unwrap_or_default(),
        })
    }

    pub fn telegram_token(&self) -> Result<&str, ConfigError> {
        self.telegram_token
            .as_deref()
            .ok_or(ConfigError::Missing("TELEGRAM_TOKEN"))
    }

    pub fn poll_chat_id(&self) -> Result<i64, ConfigError> {
        self.poll_chat_id
            .ok_or(ConfigError::Missing("TELEGRAM_POLL_CHAT_ID"))
    }
}
