//! SQL dialect resolver.
//!
//! Stateless lookups from a [`DatabaseType`] to everything the data-access
//! layer needs to stay database-agnostic: driver name, savepoint phrasing,
//! datetime literal format, and feature flags. Every lookup is a pure
//! function over the closed dialect enum.

pub mod base;
pub mod detect;
pub mod facts;
pub mod savepoint;

pub use base::{DatabaseType, DialectError, SqlSession};
pub use detect::detect;
pub use facts::{DialectFacts, SavepointSyntax, facts};
pub use savepoint::{rollback_to_savepoint, set_savepoint};

use chrono::NaiveDateTime;

/// Physical wire-driver identifier for a dialect. SQL Server and
/// Azure SQL DB both resolve to the single mssql driver.
pub fn driver_name(db_type: DatabaseType) -> &'static str {
    facts(db_type).driver_name
}

/// Whether the dialect supports named transaction savepoints.
pub fn supports_savepoints(db_type: DatabaseType) -> bool {
    facts(db_type).supports_savepoints
}

/// chrono format string for datetime literals on this dialect.
pub fn datetime_format(db_type: DatabaseType) -> &'static str {
    facts(db_type).datetime_format
}

/// True for the SQL-Server family (SQL Server and Azure SQL DB).
pub fn is_mssql(db_type: DatabaseType) -> bool {
    matches!(db_type, DatabaseType::SqlServer | DatabaseType::AzureSqlDb)
}

/// Render a timestamp as a dialect-correct datetime literal body.
pub fn format_datetime(db_type: DatabaseType, timestamp: &NaiveDateTime) -> String {
    timestamp.format(datetime_format(db_type)).to_string()
}
