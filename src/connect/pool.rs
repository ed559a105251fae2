use crate::dialects::DatabaseType;
use crate::model::DatabaseConfig;
use std::time::Duration;

// Fallback pool sizing for Azure SQL DB when nothing is configured.
const AZURE_DEFAULT_MAX_IDLE: u32 = 10;
const AZURE_DEFAULT_MAX_OPEN: u32 = 100;
const AZURE_DEFAULT_MAX_LIFETIME_SECONDS: u32 = 3600;

/// Effective pool sizing handed to the external pool manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolSettings {
    pub max_idle: u32,
    pub max_open: u32,
    pub max_lifetime_seconds: u32,
}

impl PoolSettings {
    /// Connection lifetime as a `Duration` for pool APIs that take one.
    pub fn max_lifetime(&self) -> Duration {
        Duration::from_secs(u64::from(self.max_lifetime_seconds))
    }
}

/// Resolve the effective pool settings for a configuration.
///
/// Azure SQL DB gets its own overrides (a zero override means unset) and
/// hard fallbacks for anything still unset. Every other dialect passes
/// the generic configured values through unchanged, zeros included.
pub fn resolve_pool_settings(config: &DatabaseConfig) -> PoolSettings {
    let mut max_idle = config.max_idle_connections;
    let mut max_open = config.max_open_connections;
    let mut max_lifetime_seconds = config.connection_max_lifetime_seconds;

    if config.database_type == DatabaseType::AzureSqlDb {
        if config.azure_max_idle_conns > 0 {
            max_idle = config.azure_max_idle_conns;
        }
        if config.azure_max_open_conns > 0 {
            max_open = config.azure_max_open_conns;
        }
        if config.azure_conn_max_lifetime_seconds > 0 {
            max_lifetime_seconds = config.azure_conn_max_lifetime_seconds;
        }

        if max_idle == 0 {
            max_idle = AZURE_DEFAULT_MAX_IDLE;
        }
        if max_open == 0 {
            max_open = AZURE_DEFAULT_MAX_OPEN;
        }
        if max_lifetime_seconds == 0 {
            max_lifetime_seconds = AZURE_DEFAULT_MAX_LIFETIME_SECONDS;
        }
    }

    PoolSettings {
        max_idle,
        max_open,
        max_lifetime_seconds,
    }
}
