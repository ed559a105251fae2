//! conndial — multi-dialect database connectivity abstraction.
//!
//! Validates declarative database configurations, synthesizes driver-ready
//! connection strings for plain-credential and Azure service-principal
//! authentication, and resolves dialect-specific SQL syntax facts so a
//! generic data-access layer never hard-codes dialect keywords.

pub mod connect;
pub mod dialects;
pub mod logger;
pub mod model;

pub use connect::{ConnectError, build_connection_string, resolve_pool_settings, validate};
pub use dialects::{DatabaseType, DialectFacts};
pub use model::{AuthMethod, Config, DatabaseConfig};
