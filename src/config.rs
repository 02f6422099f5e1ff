use anyhow::{Context, Result};
use shorten::font::{FontSpec, FontSpecError};
use shorten::truncate::{clamp_length, Mode, ParseModeError};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Defaults read from the config file; every field is optional
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    pub by: Option<Mode>,
    pub length: Option<usize>,
    pub ellipsis: Option<String>,
    pub font: Option<FontSpec>,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("line {line}: expected key = value")]
    MissingEquals { line: usize },

    #[error("line {line}: unknown key '{key}'")]
    UnknownKey { line: usize, key: String },

    #[error("line {line}: {source}")]
    Mode {
        line: usize,
        source: ParseModeError,
    },

    #[error("line {line}: invalid length '{value}'")]
    Length { line: usize, value: String },

    #[error("line {line}: {source}")]
    Font { line: usize, source: FontSpecError },
}

/// Load the config file, or empty defaults when there is none
pub fn load() -> Result<Config> {
    match config_path() {
        Some(path) => load_from(&path),
        None => Ok(Config::default()),
    }
}

pub fn load_from(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config: {}", path.display()))?;
    parse_config(&contents).with_context(|| format!("Invalid config: {}", path.display()))
}

/// Get the config file path, if one exists
fn config_path() -> Option<PathBuf> {
    let config_dir = env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config")
        });

    let path = config_dir.join("shorten").join("config");
    if path.exists() {
        Some(path)
    } else {
        None
    }
}

/// Parse `key = value` lines.
/// Lines starting with `#`, `//`, or `;` are treated as comments and ignored.
/// Values may be wrapped in double quotes to keep surrounding spaces.
fn parse_config(content: &str) -> Result<Config, ConfigError> {
    let mut config = Config::default();

    for (idx, raw) in content.lines().enumerate() {
        let line = idx + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty()
            || trimmed.starts_with('#')
            || trimmed.starts_with("//")
            || trimmed.starts_with(';')
        {
            continue;
        }

        let (key, value) = trimmed
            .split_once('=')
            .ok_or(ConfigError::MissingEquals { line })?;
        let key = key.trim();
        let value = unquote(value.trim());

        match key {
            "by" => {
                config.by = Some(
                    value
                        .parse()
                        .map_err(|source| ConfigError::Mode { line, source })?,
                )
            }
            "length" => {
                let length: i64 = value.parse().map_err(|_| ConfigError::Length {
                    line,
                    value: value.to_string(),
                })?;
                config.length = Some(clamp_length(length));
            }
            "ellipsis" => config.ellipsis = Some(value.to_string()),
            "font" => {
                config.font = Some(
                    value
                        .parse()
                        .map_err(|source| ConfigError::Font { line, source })?,
                )
            }
            other => {
                return Err(ConfigError::UnknownKey {
                    line,
                    key: other.to_string(),
                })
            }
        }
    }

    Ok(config)
}

fn unquote(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value)
}
