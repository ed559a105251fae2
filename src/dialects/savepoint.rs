use crate::dialects::base::{DatabaseType, DialectError, SqlSession};
use crate::dialects::facts::facts;
use log::debug;

/// Set a named savepoint in the session's current transaction, using the
/// dialect's own phrasing.
pub fn set_savepoint<S: SqlSession + ?Sized>(
    sess: &mut S,
    db_type: DatabaseType,
    name: &str,
) -> Result<(), DialectError> {
    let dialect = facts(db_type);
    if !dialect.supports_savepoints {
        return Err(DialectError::UnsupportedFeature(format!(
            "{db_type} does not support transaction savepoints"
        )));
    }

    let sql = dialect.savepoint_syntax.set_sql(name);
    debug!("Setting savepoint: {}", sql);
    sess.exec(&sql)?;
    Ok(())
}

/// Roll back to a named savepoint without aborting the whole transaction.
pub fn rollback_to_savepoint<S: SqlSession + ?Sized>(
    sess: &mut S,
    db_type: DatabaseType,
    name: &str,
) -> Result<(), DialectError> {
    let dialect = facts(db_type);
    if !dialect.supports_savepoints {
        return Err(DialectError::UnsupportedFeature(format!(
            "{db_type} does not support transaction savepoints"
        )));
    }

    let sql = dialect.savepoint_syntax.rollback_sql(name);
    debug!("Rolling back to savepoint: {}", sql);
    sess.exec(&sql)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records every statement instead of talking to a database.
    #[derive(Default)]
    struct RecordingSession {
        statements: Vec<String>,
    }

    impl SqlSession for RecordingSession {
        fn exec(&mut self, sql: &str) -> Result<u64, DialectError> {
            self.statements.push(sql.to_string());
            Ok(0)
        }
    }

    struct FailingSession;

    impl SqlSession for FailingSession {
        fn exec(&mut self, _sql: &str) -> Result<u64, DialectError> {
            Err(DialectError::ExecFailed("connection reset".to_string()))
        }
    }

    #[test]
    fn postgres_uses_ansi_keywords() {
        let mut sess = RecordingSession::default();
        set_savepoint(&mut sess, DatabaseType::Postgres, "sp_accounts").unwrap();
        rollback_to_savepoint(&mut sess, DatabaseType::Postgres, "sp_accounts").unwrap();
        assert_eq!(
            sess.statements,
            vec!["SAVEPOINT sp_accounts", "ROLLBACK TO SAVEPOINT sp_accounts"]
        );
    }

    #[test]
    fn sql_server_uses_save_transaction() {
        let mut sess = RecordingSession::default();
        set_savepoint(&mut sess, DatabaseType::SqlServer, "sp_accounts").unwrap();
        rollback_to_savepoint(&mut sess, DatabaseType::AzureSqlDb, "sp_accounts").unwrap();
        assert_eq!(
            sess.statements,
            vec![
                "SAVE TRANSACTION [sp_accounts]",
                "ROLLBACK TRANSACTION [sp_accounts]"
            ]
        );
    }

    #[test]
    fn mysql_is_rejected_without_touching_the_session() {
        let mut sess = RecordingSession::default();
        let err = set_savepoint(&mut sess, DatabaseType::Mysql, "sp1").unwrap_err();
        assert!(matches!(err, DialectError::UnsupportedFeature(_)));
        assert!(sess.statements.is_empty());
    }

    #[test]
    fn session_errors_propagate() {
        let mut sess = FailingSession;
        let err = set_savepoint(&mut sess, DatabaseType::Postgres, "sp1").unwrap_err();
        assert!(matches!(err, DialectError::ExecFailed(_)));
    }
}
