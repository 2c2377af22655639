use std::{
    fs,
    path::{Path, PathBuf},
    str::FromStr,
    time::Duration,
};

use crate::{domain::skin::regions::VARIANT_COUNT, shared::result::AppResult};

pub const DEFAULT_CONFIG_FILE: &str = "skin-heads.json";

pub const API_KEY_ENV: &str = "MINESKIN_API_KEY";
pub const TIMEOUT_ENV: &str = "SKIN_HEADS_TIMEOUT_SECS";
pub const CONCURRENCY_ENV: &str = "SKIN_HEADS_CONCURRENCY";

const DEFAULT_TIMEOUT_SECS: u64 = 30;
const MIN_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api_key: Option<String>,
    pub request_timeout_secs: u64,
    pub max_concurrent_uploads: usize,
    pub export_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            max_concurrent_uploads: 1,
            export_dir: None,
        }
    }
}

impl AppConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(MIN_TIMEOUT_SECS))
    }

    pub fn concurrency(&self) -> usize {
        self.max_concurrent_uploads.clamp(1, VARIANT_COUNT)
    }
}

pub fn load_config(path: &Path) -> AppResult<AppConfig> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }

    let raw = fs::read_to_string(path)
        .map_err(|err| format!("No se pudo leer {}: {err}", path.display()))?;

    serde_json::from_str::<AppConfig>(&raw)
        .map_err(|err| format!("No se pudo parsear {}: {err}", path.display()))
}

fn parsed<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Option<T> {
    let raw = lookup(name)?;
    match raw.trim().parse::<T>() {
        Ok(value) => Some(value),
        Err(_) => {
            log::warn!("ignoring {name}={raw}: not a valid number");
            None
        }
    }
}

pub fn apply_overrides(mut config: AppConfig, lookup: impl Fn(&str) -> Option<String>) -> AppConfig {
    if let Some(api_key) = lookup(API_KEY_ENV).filter(|key| !key.trim().is_empty()) {
        config.api_key = Some(api_key);
    }
    if let Some(timeout) = parsed::<u64>(&lookup, TIMEOUT_ENV) {
        config.request_timeout_secs = timeout;
    }
    if let Some(concurrency) = parsed::<usize>(&lookup, CONCURRENCY_ENV) {
        config.max_concurrent_uploads = concurrency;
    }
    config
}

pub fn apply_env_overrides(config: AppConfig) -> AppConfig {
    apply_overrides(config, |name| std::env::var(name).ok())
}
