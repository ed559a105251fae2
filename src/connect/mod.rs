//! Connection configuration validation, connection string synthesis and
//! pool-size resolution.
//!
//! Everything here is a pure function over an immutable [`DatabaseConfig`];
//! no network I/O happens below this layer, and every error is a
//! non-retriable configuration-shape error.
//!
//! [`DatabaseConfig`]: crate::model::DatabaseConfig

pub mod builder;
pub mod pool;
pub mod validator;

pub use builder::{build_connection_string, server_short_name};
pub use pool::{PoolSettings, resolve_pool_settings};
pub use validator::validate;

/// Configuration-shape errors.
///
/// One variant per failed precondition, so callers can assert on which
/// requirement was violated rather than just "an error occurred".
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConnectError {
    #[error("database configuration is missing")]
    NullConfig,

    #[error("database host is required")]
    MissingHost,

    #[error("database name is required")]
    MissingDatabaseName,

    #[error("database user is required for basic authentication")]
    MissingUser,

    #[error("azure tenant id is required for service principal authentication")]
    MissingTenantId,

    #[error("azure client id is required for service principal authentication")]
    MissingClientId,

    #[error("azure client secret is required for service principal authentication")]
    MissingClientSecret,
}
