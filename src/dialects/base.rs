use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported database dialects.
///
/// This is a closed enum on purpose: every resolver function matches
/// exhaustively, so adding a dialect forces every lookup table to be
/// updated at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DatabaseType {
    #[serde(rename = "sqlite")]
    Sqlite,
    #[serde(rename = "mysql")]
    Mysql,
    #[serde(rename = "postgres")]
    Postgres,
    #[serde(rename = "sqlserver")]
    SqlServer,
    #[serde(rename = "azuresqldb")]
    AzureSqlDb,
}

impl DatabaseType {
    /// Canonical configuration name of this dialect.
    pub fn canonical_name(&self) -> &'static str {
        match self {
            DatabaseType::Sqlite => "sqlite",
            DatabaseType::Mysql => "mysql",
            DatabaseType::Postgres => "postgres",
            DatabaseType::SqlServer => "sqlserver",
            DatabaseType::AzureSqlDb => "azuresqldb",
        }
    }

    /// All dialects, in canonical-name order.
    pub fn all() -> &'static [DatabaseType] {
        &[
            DatabaseType::Sqlite,
            DatabaseType::Mysql,
            DatabaseType::Postgres,
            DatabaseType::SqlServer,
            DatabaseType::AzureSqlDb,
        ]
    }
}

impl fmt::Display for DatabaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical_name())
    }
}

impl FromStr for DatabaseType {
    type Err = DialectError;

    /// Parses a dialect name, accepting a few common aliases.
    /// Unknown names are rejected rather than mapped to a fallback.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sqlite" | "sqlite3" => Ok(DatabaseType::Sqlite),
            "mysql" | "mariadb" => Ok(DatabaseType::Mysql),
            "postgres" | "postgresql" => Ok(DatabaseType::Postgres),
            "sqlserver" | "mssql" => Ok(DatabaseType::SqlServer),
            "azuresqldb" | "azure" => Ok(DatabaseType::AzureSqlDb),
            other => Err(DialectError::NotFound(other.to_string())),
        }
    }
}

/// Error types for dialect operations
#[derive(Debug, thiserror::Error)]
pub enum DialectError {
    #[error("Dialect not found: {0}")]
    NotFound(String),

    #[error("Feature not supported: {0}")]
    UnsupportedFeature(String),

    #[error("Statement execution failed: {0}")]
    ExecFailed(String),
}

/// The single capability the savepoint helpers need from a live session.
///
/// The data-access session implements this; the dialect layer never owns
/// a connection of its own.
pub trait SqlSession {
    /// Execute a statement, returning the number of rows affected.
    fn exec(&mut self, sql: &str) -> Result<u64, DialectError>;
}
