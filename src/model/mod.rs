pub mod config;

pub use config::{AuthMethod, Config, ConfigError, DatabaseConfig};
