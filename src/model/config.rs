use crate::dialects::DatabaseType;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// The `[database]` section. Absent means no database was configured,
    /// which validation reports as its own error.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<DatabaseConfig>,
}

/// Declarative database configuration, read-only once loaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    #[serde(rename = "type")]
    pub database_type: DatabaseType,

    #[serde(default)]
    pub host: String,

    /// Database (catalog) name.
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub user: String,

    #[serde(default)]
    pub password: String,

    /// Only meaningful for Azure SQL DB; every other dialect is
    /// implicitly password-authenticated.
    #[serde(default)]
    pub auth_method: AuthMethod,

    #[serde(default)]
    pub azure_tenant_id: String,

    #[serde(default)]
    pub azure_client_id: String,

    #[serde(default)]
    pub azure_client_secret: String,

    // Generic pool hints; zero means unset.
    #[serde(default)]
    pub max_idle_connections: u32,

    #[serde(default)]
    pub max_open_connections: u32,

    #[serde(default)]
    pub connection_max_lifetime_seconds: u32,

    // Azure-specific pool overrides; zero means unset.
    #[serde(default)]
    pub azure_max_idle_conns: u32,

    #[serde(default)]
    pub azure_max_open_conns: u32,

    #[serde(default)]
    pub azure_conn_max_lifetime_seconds: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            database_type: DatabaseType::Postgres,
            host: String::new(),
            name: String::new(),
            user: String::new(),
            password: String::new(),
            auth_method: AuthMethod::default(),
            azure_tenant_id: String::new(),
            azure_client_id: String::new(),
            azure_client_secret: String::new(),
            max_idle_connections: 0,
            max_open_connections: 0,
            connection_max_lifetime_seconds: 0,
            azure_max_idle_conns: 0,
            azure_max_open_conns: 0,
            azure_conn_max_lifetime_seconds: 0,
        }
    }
}

/// Authentication scheme for the database login.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AuthMethod {
    #[default]
    Password,
    ServicePrincipal,
}

impl Config {
    /// Load configuration from file with environment override support
    pub fn load(config_path: Option<&str>, environment: Option<&str>) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        // Load base configuration file
        if let Some(path) = config_path {
            config = Self::load_from_file(path)?;
        } else {
            for standard_path in Self::standard_config_paths() {
                if standard_path.exists() {
                    debug!("Loading config from: {}", standard_path.display());
                    config = Self::load_from_file(&standard_path.to_string_lossy())?;
                    break;
                }
            }
        }

        // Load environment-specific overrides
        if let Some(env) = environment {
            if let Ok(env_config) = Self::load_environment_config(env) {
                debug!("Applying environment config for: {}", env);
                config = config.merge(env_config);
            }
        }

        // Load local overrides (always last)
        if let Ok(local_config) = Self::load_from_file("config/local.toml") {
            debug!("Applying local config overrides");
            config = config.merge(local_config);
        }

        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse(path.to_string(), e.to_string()))
    }

    fn load_environment_config(environment: &str) -> Result<Self, ConfigError> {
        let env_path = format!("config/{}.toml", environment);
        Self::load_from_file(&env_path)
    }

    /// Standard configuration file paths in order of precedence
    fn standard_config_paths() -> Vec<PathBuf> {
        vec![
            PathBuf::from("conndial.toml"),
            PathBuf::from("config/default.toml"),
        ]
    }

    /// Merge this config with another, with the other taking precedence.
    /// A file without a `[database]` section never wipes out one that
    /// had it.
    pub fn merge(mut self, other: Self) -> Self {
        if other.database.is_some() {
            self.database = other.database;
        }
        self
    }

    /// Write a starter configuration file with a populated `[database]`
    /// section to edit.
    pub fn generate_default_config(path: &str) -> Result<(), ConfigError> {
        let config = Config {
            database: Some(DatabaseConfig {
                host: "localhost".to_string(),
                name: "app".to_string(),
                user: "app".to_string(),
                ..DatabaseConfig::default()
            }),
        };
        let toml_content =
            toml::to_string_pretty(&config).map_err(|e| ConfigError::Serialize(e.to_string()))?;

        fs::write(path, toml_content)
            .map_err(|e| ConfigError::FileWrite(path.to_string(), e.to_string()))?;

        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{0}': {1}")]
    FileRead(String, String),

    #[error("Failed to parse config file '{0}': {1}")]
    Parse(String, String),

    #[error("Failed to write config file '{0}': {1}")]
    FileWrite(String, String),

    #[error("Failed to serialize config: {0}")]
    Serialize(String),
}
