use crate::dialects::base::DatabaseType;

/// How a dialect phrases sub-transaction savepoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SavepointSyntax {
    /// ANSI `SAVEPOINT name` / `ROLLBACK TO SAVEPOINT name`.
    Ansi,
    /// T-SQL `SAVE TRANSACTION [name]` / `ROLLBACK TRANSACTION [name]`.
    SaveTransaction,
}

impl SavepointSyntax {
    /// SQL text that sets a named savepoint in the current transaction.
    pub fn set_sql(&self, name: &str) -> String {
        match self {
            SavepointSyntax::Ansi => format!("SAVEPOINT {name}"),
            SavepointSyntax::SaveTransaction => format!("SAVE TRANSACTION [{name}]"),
        }
    }

    /// SQL text that rolls back to a named savepoint without aborting
    /// the enclosing transaction.
    pub fn rollback_sql(&self, name: &str) -> String {
        match self {
            SavepointSyntax::Ansi => format!("ROLLBACK TO SAVEPOINT {name}"),
            SavepointSyntax::SaveTransaction => format!("ROLLBACK TRANSACTION [{name}]"),
        }
    }
}

/// Syntax facts for one dialect, computed by pure lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialectFacts {
    /// Physical wire-driver identifier handed to the driver registry.
    pub driver_name: &'static str,
    pub savepoint_syntax: SavepointSyntax,
    /// chrono format string for datetime literals in generated SQL.
    pub datetime_format: &'static str,
    /// Whether named savepoints work at all on this dialect. Dialects
    /// without support fall back to full-transaction rollback.
    pub supports_savepoints: bool,
}

// Both datetime templates carry the same field order
// (year-month-day, hour:minute:second); only the separator differs.
const DATETIME_FORMAT_ANSI: &str = "%Y-%m-%d %H:%M:%S";
const DATETIME_FORMAT_TSQL: &str = "%Y-%m-%dT%H:%M:%S";

/// Resolve the full facts record for a dialect.
pub fn facts(db_type: DatabaseType) -> DialectFacts {
    match db_type {
        DatabaseType::Sqlite => DialectFacts {
            driver_name: "sqlite3",
            savepoint_syntax: SavepointSyntax::Ansi,
            datetime_format: DATETIME_FORMAT_ANSI,
            supports_savepoints: false,
        },
        DatabaseType::Mysql => DialectFacts {
            driver_name: "mysql",
            savepoint_syntax: SavepointSyntax::Ansi,
            datetime_format: DATETIME_FORMAT_ANSI,
            supports_savepoints: false,
        },
        DatabaseType::Postgres => DialectFacts {
            driver_name: "postgres",
            savepoint_syntax: SavepointSyntax::Ansi,
            datetime_format: DATETIME_FORMAT_ANSI,
            supports_savepoints: true,
        },
        // SQL Server and Azure SQL DB share the single mssql wire driver.
        DatabaseType::SqlServer | DatabaseType::AzureSqlDb => DialectFacts {
            driver_name: "mssql",
            savepoint_syntax: SavepointSyntax::SaveTransaction,
            datetime_format: DATETIME_FORMAT_TSQL,
            supports_savepoints: true,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sql_server_family_shares_one_driver() {
        assert_eq!(
            facts(DatabaseType::SqlServer).driver_name,
            facts(DatabaseType::AzureSqlDb).driver_name
        );
        assert_eq!(facts(DatabaseType::SqlServer).driver_name, "mssql");
    }

    #[test]
    fn savepoint_support_flags() {
        assert!(facts(DatabaseType::Postgres).supports_savepoints);
        assert!(facts(DatabaseType::SqlServer).supports_savepoints);
        assert!(facts(DatabaseType::AzureSqlDb).supports_savepoints);
        assert!(!facts(DatabaseType::Mysql).supports_savepoints);
        assert!(!facts(DatabaseType::Sqlite).supports_savepoints);
    }

    #[test]
    fn datetime_templates() {
        assert_eq!(facts(DatabaseType::Postgres).datetime_format, "%Y-%m-%d %H:%M:%S");
        assert_eq!(facts(DatabaseType::SqlServer).datetime_format, "%Y-%m-%dT%H:%M:%S");
        assert_eq!(facts(DatabaseType::AzureSqlDb).datetime_format, "%Y-%m-%dT%H:%M:%S");
    }

    #[test]
    fn ansi_savepoint_phrasing() {
        assert_eq!(SavepointSyntax::Ansi.set_sql("sp1"), "SAVEPOINT sp1");
        assert_eq!(
            SavepointSyntax::Ansi.rollback_sql("sp1"),
            "ROLLBACK TO SAVEPOINT sp1"
        );
    }

    #[test]
    fn tsql_savepoint_phrasing() {
        assert_eq!(
            SavepointSyntax::SaveTransaction.set_sql("sp1"),
            "SAVE TRANSACTION [sp1]"
        );
        assert_eq!(
            SavepointSyntax::SaveTransaction.rollback_sql("sp1"),
            "ROLLBACK TRANSACTION [sp1]"
        );
    }
}
