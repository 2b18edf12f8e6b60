//! User preferences that steer period windows, projections, and storage layout.

use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::{
    core::{
        errors::{FinanceError, Result},
        services::DEFAULT_MAX_MONTHS,
        utils::{ensure_dir, PathResolver},
    },
    storage::DEFAULT_KEY_NAMESPACE,
};

const TMP_SUFFIX: &str = "tmp";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "Config::default_namespace")]
    pub key_namespace: String,
    #[serde(default = "Config::default_week_start")]
    pub week_start: Weekday,
    #[serde(default = "Config::default_max_months")]
    pub max_projection_months: u32,
    #[serde(default = "Config::default_extra_payments")]
    pub extra_payment_scenarios: Vec<f64>,
    #[serde(default = "Config::default_currency")]
    pub currency: String,
    /// Overrides where collections are stored. Defaults to `<base>/data`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

impl Config {
    fn default_namespace() -> String {
        DEFAULT_KEY_NAMESPACE.into()
    }

    fn default_week_start() -> Weekday {
        Weekday::Sun
    }

    fn default_max_months() -> u32 {
        DEFAULT_MAX_MONTHS
    }

    fn default_extra_payments() -> Vec<f64> {
        vec![50.0, 100.0, 200.0]
    }

    fn default_currency() -> String {
        "USD".into()
    }

    pub fn validate(&self) -> Result<()> {
        if self.key_namespace.trim().is_empty() {
            return Err(FinanceError::ConfigError(
                "key namespace must not be empty".into(),
            ));
        }
        if self.max_projection_months == 0 {
            return Err(FinanceError::ConfigError(
                "max projection months must be positive".into(),
            ));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            key_namespace: Self::default_namespace(),
            week_start: Self::default_week_start(),
            max_projection_months: Self::default_max_months(),
            extra_payment_scenarios: Self::default_extra_payments(),
            currency: Self::default_currency(),
            data_dir: None,
        }
    }
}

/// Loads and saves [`Config`] under `<base>/config/config.json`.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    base: PathBuf,
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self> {
        Self::with_base_dir(PathResolver::base_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self> {
        ensure_dir(&base)?;
        ensure_dir(&PathResolver::config_dir_in(&base))?;
        Ok(Self {
            path: PathResolver::config_file_in(&base),
            base,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory holding the persisted collections for `config`.
    pub fn data_dir(&self, config: &Config) -> PathBuf {
        config
            .data_dir
            .clone()
            .unwrap_or_else(|| PathResolver::data_dir_in(&self.base))
    }

    pub fn load(&self) -> Result<Config> {
        if !self.path.exists() {
            return Ok(Config::default());
        }
        let data = fs::read_to_string(&self.path)?;
        let config: Config = serde_json::from_str(&data)
            .map_err(|err| FinanceError::ConfigError(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, config: &Config) -> Result<()> {
        config.validate()?;
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        write_file(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        tracing::debug!(path = %self.path.display(), "configuration saved");
        Ok(())
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_file(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
