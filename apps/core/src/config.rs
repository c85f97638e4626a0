use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::geocoding::mapsco;

pub const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    pub language: Option<String>,
    pub placeholder: Option<String>,
    pub collapsed: bool,
    pub clear_and_blur_on_esc: bool,
    pub clear_on_blur: bool,
    pub types: Option<String>,
    pub limit: u16,
    pub debounce_ms: u64,
    pub api_key: String,
    pub endpoint: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            language: None,
            placeholder: None,
            collapsed: false,
            clear_and_blur_on_esc: false,
            clear_on_blur: false,
            types: None,
            limit: 5,
            debounce_ms: 200,
            api_key: String::new(),
            endpoint: mapsco::DEFAULT_ENDPOINT.to_string(),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(String),
    Invalid(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(error) => write!(f, "io error: {error}"),
            Self::Parse(error) => write!(f, "parse error: {error}"),
            Self::Invalid(error) => write!(f, "invalid option: {error}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

pub fn stable_app_data_dir() -> PathBuf {
    std::env::temp_dir().join("geofind")
}

pub fn default_config_path() -> PathBuf {
    stable_app_data_dir().join(CONFIG_FILE_NAME)
}

pub fn validate(options: &Options) -> Result<(), ConfigError> {
    if options.limit < 1 || options.limit > 10 {
        return Err(ConfigError::Invalid(
            "limit must be between 1 and 10".to_string(),
        ));
    }

    if options.debounce_ms > 5_000 {
        return Err(ConfigError::Invalid(
            "debounce_ms must be at most 5000".to_string(),
        ));
    }

    if options.endpoint.is_empty() {
        return Err(ConfigError::Invalid("endpoint is required".to_string()));
    }

    Ok(())
}

pub fn load(path: Option<&Path>) -> Result<Options, ConfigError> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
    if !path.exists() {
        return Ok(Options::default());
    }

    let raw = fs::read_to_string(&path)?;
    let options: Options =
        toml::from_str(&raw).map_err(|e| ConfigError::Parse(e.to_string()))?;
    validate(&options)?;
    Ok(options)
}

pub fn save(options: &Options, path: Option<&Path>) -> Result<(), ConfigError> {
    validate(options)?;
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let raw =
        toml::to_string_pretty(options).map_err(|e| ConfigError::Parse(e.to_string()))?;
    fs::write(&path, raw)?;
    Ok(())
}
