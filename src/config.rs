use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};
use directories::ProjectDirs;
use clap::Parser;
use std::fs;
use thiserror::Error;
use tracing::{info, warn};

/// File name of the SQLite database when no URL is configured
pub const DEFAULT_DATABASE_FILE: &str = "todolist.db";

/// File name of the optional TOML configuration inside the config directory
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Configuration for the todolist server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// URL (or path) of the SQLite database
    pub database_url: String,
    /// Interface the HTTP listener binds to
    pub host: String,
    /// Port the HTTP listener binds to
    pub port: u16,
}

/// Update structure for Config with all fields optional
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ConfigUpdate {
    #[serde(default)]
    pub database_url: Option<String>,
    #[serde(default)]
    pub host: Option<String>,
    #[serde(default)]
    pub port: Option<u16>,
}

/// Errors raised while loading the configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse config file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Command line arguments for the server
#[derive(Parser, Debug)]
#[clap(name = "todolist-server", about = "A todo item service")]
pub struct CliArgs {
    /// Database URL
    #[clap(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Interface to listen on
    #[clap(long, env = "TODOLIST_HOST")]
    pub host: Option<String>,

    /// Port to listen on
    #[clap(long, env = "TODOLIST_PORT")]
    pub port: Option<u16>,

    /// Path to a TOML config file
    #[clap(long, env = "TODOLIST_CONFIG")]
    pub config: Option<PathBuf>,

    /// Debug mode
    #[clap(long, env = "TODOLIST_DEBUG", default_value_t = false)]
    pub debug: bool,

    /// Emit logs as JSON lines
    #[clap(long, env = "TODOLIST_JSON_LOGS", default_value_t = false)]
    pub json_logs: bool,
}

impl Config {
    /// Applies a config update to the current configuration
    pub fn apply_update(self, update: ConfigUpdate) -> Self {
        Self {
            database_url: update.database_url.unwrap_or(self.database_url),
            host: update.host.unwrap_or(self.host),
            port: update.port.unwrap_or(self.port),
        }
    }

    /// Returns the `host:port` pair the listener binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Returns the base (default) configuration
///
/// When a config directory is known the database lives next to the config
/// file, otherwise in the working directory.
pub fn base_config(config_dir: Option<&Path>) -> Config {
    let database_url = config_dir.map_or(DEFAULT_DATABASE_FILE.to_string(), |path| {
        path.join(DEFAULT_DATABASE_FILE).to_string_lossy().to_string()
    });

    Config {
        database_url,
        host: "0.0.0.0".to_string(),
        port: 8000,
    }
}

/// Returns the platform config directory, if it exists
pub fn get_config_dir_path() -> Option<PathBuf> {
    let Some(proj_dirs) = ProjectDirs::from("com", "todolist", "todolist") else {
        warn!("Could not determine XDG config directory, skipping config file");
        return None;
    };

    let path = proj_dirs.config_dir().to_path_buf();
    if path.exists() {
        Some(path)
    } else {
        info!("Config path not found at {:?}, using defaults", path);
        None
    }
}

/// Loads configuration from a TOML file
///
/// A missing file is not an error and yields an empty update.
pub fn config_from_file(config_path: Option<&Path>) -> Result<ConfigUpdate, ConfigError> {
    let Some(config_path) = config_path else {
        return Ok(ConfigUpdate::default());
    };

    if !config_path.exists() {
        info!("Config file not found at {:?}, using defaults", config_path);
        return Ok(ConfigUpdate::default());
    }

    let content = fs::read_to_string(config_path).map_err(|source| ConfigError::Read {
        path: config_path.to_path_buf(),
        source,
    })?;

    let update = toml::from_str::<ConfigUpdate>(&content).map_err(|source| ConfigError::Parse {
        path: config_path.to_path_buf(),
        source,
    })?;

    info!("Loaded configuration from {:?}", config_path);
    Ok(update)
}

/// Loads configuration from command line arguments
pub fn config_from_args(args: &CliArgs) -> ConfigUpdate {
    ConfigUpdate {
        database_url: args.database_url.clone(),
        host: args.host.clone(),
        port: args.port,
    }
}

/// Gets the complete configuration by combining defaults with
/// values from config file, environment variables, and command line arguments
/// in order of increasing precedence
pub fn get_config(args: &CliArgs) -> Config {
    let config_dir = get_config_dir_path();

    let config_file = args
        .config
        .clone()
        .or_else(|| config_dir.as_ref().map(|dir| dir.join(CONFIG_FILE_NAME)));

    let file_update = config_from_file(config_file.as_deref()).unwrap_or_else(|err| {
        warn!("{}, ignoring it", err);
        ConfigUpdate::default()
    });

    // Apply updates in order of increasing precedence
    let config = base_config(config_dir.as_deref())
        .apply_update(file_update)
        .apply_update(config_from_args(args));

    info!(
        "Final configuration: database_url={}, listen={}",
        config.database_url,
        config.bind_address()
    );

    config
}
