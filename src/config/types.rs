use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::ui::pane::DEFAULT_PREVIEW_LEN;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub seed: SeedConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Remote broker API settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL; `/brokers` and `/brokers/details` are appended to it.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Total request timeout in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// Where the store's initial data comes from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SeedConfig {
    /// JSON seed file. Built-in demo data is used when absent.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Rendering settings for list views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Rows shown before "Show More" (default: 2).
    #[serde(default = "default_preview_len")]
    pub preview_len: usize,
}

fn default_base_url() -> String {
    "https://n47wv61fpe.execute-api.eu-west-1.amazonaws.com/pro".to_string()
}

fn default_timeout() -> u32 {
    30
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_preview_len() -> usize {
    DEFAULT_PREVIEW_LEN
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            preview_len: default_preview_len(),
        }
    }
}
