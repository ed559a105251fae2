use crate::dialects::base::DatabaseType;
use log::debug;
use regex::Regex;
use std::sync::OnceLock;

static PATTERNS: OnceLock<Vec<(DatabaseType, Regex)>> = OnceLock::new();

// Ordered by specificity: the Azure patterns must win over the generic
// SQL Server ones, since every Azure SQL DB host is also an mssql host.
fn patterns() -> &'static [(DatabaseType, Regex)] {
    PATTERNS.get_or_init(|| {
        [
            (
                DatabaseType::AzureSqlDb,
                r"\.database\.windows\.net|fedauth=",
            ),
            (
                DatabaseType::SqlServer,
                r"^(sqlserver|mssql)://|driver=\{?(odbc driver|sql server)",
            ),
            (DatabaseType::Postgres, r"^postgres(ql)?://|driver=\{?postgre"),
            (DatabaseType::Mysql, r"^(mysql|mariadb)://|driver=\{?(mysql|mariadb)"),
            (
                DatabaseType::Sqlite,
                r"^sqlite3?:|driver=\{?sqlite|\.(db|sqlite3?)$",
            ),
        ]
        .into_iter()
        .map(|(db_type, pattern)| {
            let re = Regex::new(pattern).expect("invalid dialect detection pattern");
            (db_type, re)
        })
        .collect()
    })
}

/// Guess the dialect from a raw connection string.
///
/// Returns `None` when nothing matches; there is no low-confidence
/// fallback here, callers decide what an unrecognized string means.
pub fn detect(connection_string: &str) -> Option<DatabaseType> {
    let conn_lower = connection_string.to_lowercase();

    for (db_type, re) in patterns() {
        if re.is_match(&conn_lower) {
            debug!("Connection string matched dialect '{}'", db_type);
            return Some(*db_type);
        }
    }

    // Last resort: plain substring matching on the canonical names.
    DatabaseType::all()
        .iter()
        .copied()
        .find(|db_type| conn_lower.contains(db_type.canonical_name()))
}
