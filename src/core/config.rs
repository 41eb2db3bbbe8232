// src/core/config.rs
use std::collections::HashMap;
use std::env;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use log::LevelFilter;
use thiserror::Error;

use crate::generators::token::DEFAULT_TOKEN_LENGTH;
use crate::models::{Language, Theme, TokenEncoding};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read env file {path}: {source}")]
    EnvFile {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },
}

// Configuration for the generator CLI
#[derive(Debug, Clone)]
pub struct Config {
    // Password Generation
    pub default_password_length: usize,

    // Token Generation
    pub default_token_length: usize,
    pub default_token_encoding: TokenEncoding,

    // Presentation
    pub language: Language,
    pub theme: Theme,

    // Logging
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,

    /// Problems found while loading; reported once logging is up.
    pub warnings: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Password Generation
            default_password_length: 16,

            // Token Generation
            default_token_length: DEFAULT_TOKEN_LENGTH,
            default_token_encoding: TokenEncoding::Hex,

            // Presentation
            language: Language::En,
            theme: Theme::Light,

            // Logging
            log_level: LevelFilter::Warn,
            log_file: None,

            warnings: Vec::new(),
        }
    }
}

impl Config {
    // Load configuration from the environment, falling back to the per-user env file
    pub fn load() -> Self {
        let mut file_values = HashMap::new();
        let mut file_warning = None;

        if let Some(path) = crate::utils::get_config_file_path() {
            if path.exists() {
                match read_env_file(&path) {
                    Ok(values) => file_values = values,
                    Err(e) => file_warning = Some(e.to_string()),
                }
            }
        }

        let mut config = Config::from_source(|key| {
            env::var(key).ok().or_else(|| file_values.get(key).cloned())
        });
        config.warnings.extend(file_warning);
        config
    }

    // Load configuration from a single dotenv-style file, ignoring process env
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let values = read_env_file(path)?;
        Ok(Config::from_source(|key| values.get(key).cloned()))
    }

    pub fn from_source<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        // Password Generation
        if let Some(val) = lookup("DEFAULT_PASSWORD_LENGTH") {
            match val.trim().parse() {
                Ok(length) => config.default_password_length = length,
                Err(_) => config.warn_invalid("DEFAULT_PASSWORD_LENGTH", &val),
            }
        }

        // Token Generation
        if let Some(val) = lookup("DEFAULT_TOKEN_LENGTH") {
            match val.trim().parse() {
                Ok(length) => config.default_token_length = length,
                Err(_) => config.warn_invalid("DEFAULT_TOKEN_LENGTH", &val),
            }
        }

        if let Some(val) = lookup("DEFAULT_TOKEN_ENCODING") {
            match TokenEncoding::from_str(val.trim(), true) {
                Ok(encoding) => config.default_token_encoding = encoding,
                Err(_) => config.warn_invalid("DEFAULT_TOKEN_ENCODING", &val),
            }
        }

        // Presentation
        if let Some(val) = lookup("UI_LANGUAGE") {
            match Language::from_str(val.trim(), true) {
                Ok(language) => config.language = language,
                Err(_) => config.warn_invalid("UI_LANGUAGE", &val),
            }
        }

        if let Some(val) = lookup("UI_THEME") {
            match Theme::from_str(val.trim(), true) {
                Ok(theme) => config.theme = theme,
                Err(_) => config.warn_invalid("UI_THEME", &val),
            }
        }

        // Logging
        if let Some(level) = lookup("LOG_LEVEL") {
            match parse_level(&level) {
                Some(filter) => config.log_level = filter,
                None => config.warn_invalid("LOG_LEVEL", &level),
            }
        }

        if let Some(file) = lookup("LOG_FILE") {
            if !file.trim().is_empty() {
                config.log_file = Some(PathBuf::from(file.trim()));
            }
        }

        config
    }

    fn warn_invalid(&mut self, key: &str, value: &str) {
        self.warnings
            .push(format!("Ignoring invalid {} value '{}', using default", key, value));
    }
}

pub fn parse_level(level: &str) -> Option<LevelFilter> {
    match level.trim().to_lowercase().as_str() {
        "off" => Some(LevelFilter::Off),
        "error" => Some(LevelFilter::Error),
        "warn" => Some(LevelFilter::Warn),
        "info" => Some(LevelFilter::Info),
        "debug" => Some(LevelFilter::Debug),
        "trace" => Some(LevelFilter::Trace),
        _ => None,
    }
}

fn read_env_file(path: &Path) -> Result<HashMap<String, String>, ConfigError> {
    let to_error = |source| ConfigError::EnvFile {
        path: path.to_path_buf(),
        source,
    };

    let mut values = HashMap::new();
    for item in dotenvy::from_path_iter(path).map_err(to_error)? {
        let (key, value) = item.map_err(to_error)?;
        values.insert(key, value);
    }
    Ok(values)
}
