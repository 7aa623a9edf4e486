//! Configuration file loading for the CLI
//!
//! This module handles finding and loading TOML configuration files
//! from various locations (explicit path, local directory, system directory).
//! A file is layered over a base configuration key by key, so it only needs
//! to name the values it changes.

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info, trace};
use thiserror::Error;
use toml::{Table, Value};

use stratus::{StratusError, config::AppConfig};

/// Configuration-related errors for CLI
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),

    #[error("Failed to prepare the base configuration: {0}")]
    Base(String),

    #[error("Invalid value for --{flag}: {message}")]
    InvalidFlag {
        flag: &'static str,
        message: &'static str,
    },
}

impl From<ConfigError> for StratusError {
    fn from(err: ConfigError) -> Self {
        StratusError::Config(err.to_string())
    }
}

/// Find a configuration file and layer it over `base`
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Local project directory (stratus/config.toml)
/// 3. Platform-specific config directory
///
/// Values the file leaves out keep their value from `base`. Without a file,
/// `base` is returned unchanged.
///
/// # Errors
///
/// Returns error if:
/// - Explicit path is provided but file doesn't exist
/// - Config file exists but cannot be parsed
pub fn load_config(
    explicit_path: Option<impl AsRef<Path>>,
    base: &AppConfig,
) -> Result<AppConfig, StratusError> {
    match find_config_file(explicit_path)? {
        Some(path) => load_config_file(&path, base),
        None => {
            debug!("No configuration file found");
            Ok(base.clone())
        }
    }
}

fn find_config_file(
    explicit_path: Option<impl AsRef<Path>>,
) -> Result<Option<PathBuf>, StratusError> {
    // 1. Try the explicitly provided path first if available
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Loading configuration from explicit path");
        if !path.exists() {
            return Err(ConfigError::MissingFile(path.to_path_buf()).into());
        }
        return Ok(Some(path.to_path_buf()));
    }

    // 2. Try the local project directory
    let local_config = Path::new("stratus/config.toml");
    if local_config.exists() {
        info!(path = local_config.display().to_string(); "Loading configuration from local path");
        return Ok(Some(local_config.to_path_buf()));
    }

    // 3. Try the platform-specific config directory
    if let Some(proj_dirs) = ProjectDirs::from("com", "stratus", "stratus") {
        let system_config = proj_dirs.config_dir().join("config.toml");

        if system_config.exists() {
            info!(path = system_config.display().to_string(); "Loading configuration from system path");
            return Ok(Some(system_config));
        }

        debug!(path = system_config.display().to_string(); "System configuration file not found");
    } else {
        debug!("Could not determine platform-specific config directory");
    }

    Ok(None)
}

/// Load a TOML file and layer it over `base`
///
/// # Errors
///
/// Returns error if:
/// - File cannot be read
/// - TOML parsing fails, or the layered result is not a valid configuration
fn load_config_file(path: &Path, base: &AppConfig) -> Result<AppConfig, StratusError> {
    let content = fs::read_to_string(path)?;
    let parse_error = |message: String| ConfigError::Parse {
        path: path.to_path_buf(),
        message,
    };

    let overlay: Table = toml::from_str(&content).map_err(|err| parse_error(err.to_string()))?;

    let mut layered = match Value::try_from(base) {
        Ok(Value::Table(table)) => table,
        Ok(other) => {
            return Err(ConfigError::Base(format!("expected a table, found {}", other.type_str())).into());
        }
        Err(err) => return Err(ConfigError::Base(err.to_string()).into()),
    };
    merge(&mut layered, overlay);
    trace!(layered:% = layered; "Layered configuration");

    let config: AppConfig = Value::Table(layered)
        .try_into()
        .map_err(|err: toml::de::Error| parse_error(err.to_string()))?;

    Ok(config)
}

/// Merge `overlay` into `base`; nested tables merge key by key, every other
/// value replaces what was there.
fn merge(base: &mut Table, overlay: Table) {
    for (key, value) in overlay {
        match value {
            Value::Table(nested) => match base.get_mut(&key) {
                Some(Value::Table(existing)) => merge(existing, nested),
                _ => {
                    base.insert(key, Value::Table(nested));
                }
            },
            value => {
                base.insert(key, value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use stratus::config::{Direction, Format, GraphConfig, LabelLocation, OutputConfig, StyleConfig};

    use super::*;

    fn base() -> AppConfig {
        AppConfig::new(
            GraphConfig::default()
                .with_direction(Direction::TopBottom)
                .with_node_spacing(0.8)
                .with_label_location(LabelLocation::Bottom)
                .with_attribute("splines", "ortho"),
            OutputConfig::default(),
            StyleConfig::default(),
        )
    }

    #[test]
    fn test_explicit_path_is_loaded() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[graph]\ndirection = \"LR\"\n[output]\nformat = \"dot\"\n").unwrap();

        let config = load_config(Some(&path), &base()).unwrap();
        assert_eq!(config.graph().direction(), Direction::LeftRight);
        assert_eq!(config.output().format(), Format::Dot);
    }

    #[test]
    fn test_partial_file_keeps_base_values() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "[graph]\nrank_spacing = 2.0\n[graph.attributes]\nconcentrate = \"true\"\n[output]\nformat = \"dot\"\n",
        )
        .unwrap();

        let config = load_config(Some(&path), &base()).unwrap();
        let graph = config.graph();
        assert_eq!(graph.direction(), Direction::TopBottom);
        assert_eq!(graph.node_spacing(), 0.8);
        assert_eq!(graph.rank_spacing(), 2.0);
        assert_eq!(graph.label_location(), Some(LabelLocation::Bottom));
        let keys: Vec<&str> = graph.attributes().keys().map(String::as_str).collect();
        assert_eq!(keys, ["splines", "concentrate"]);
        assert_eq!(config.output().format(), Format::Dot);
    }

    #[test]
    fn test_empty_file_is_the_base() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "").unwrap();

        assert_eq!(load_config(Some(&path), &base()).unwrap(), base());
    }

    #[test]
    fn test_missing_explicit_path_is_an_error() {
        let dir = tempdir().unwrap();
        let err = load_config(Some(dir.path().join("absent.toml")), &base()).unwrap_err();
        assert!(matches!(err, StratusError::Config(message) if message.contains("absent.toml")));
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[graph\n").unwrap();

        let err = load_config(Some(&path), &base()).unwrap_err();
        assert!(matches!(err, StratusError::Config(_)));
    }

    #[test]
    fn test_invalid_value_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[graph]\ndirection = \"up\"\n").unwrap();

        let err = load_config(Some(&path), &base()).unwrap_err();
        assert!(matches!(err, StratusError::Config(message) if message.contains("config.toml")));
    }
}
