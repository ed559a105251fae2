use crate::connect::{ConnectError, validator};
use crate::dialects::DatabaseType;
use crate::model::{AuthMethod, DatabaseConfig};

/// Build the driver-ready connection string for a configuration.
///
/// Always validates first and propagates validator errors unchanged, so a
/// partially-built string is never handed to the network layer. The output
/// is the semicolon-delimited key-value form the mssql wire driver parses;
/// key case and field order are driver contract and must not change.
///
/// The result carries credentials in the clear. Keeping it out of logs is
/// the caller's responsibility.
pub fn build_connection_string(config: Option<&DatabaseConfig>) -> Result<String, ConnectError> {
    validator::validate(config)?;
    let config = config.ok_or(ConnectError::NullConfig)?;

    if config.database_type == DatabaseType::AzureSqlDb
        && config.auth_method == AuthMethod::ServicePrincipal
    {
        Ok(service_principal_connection_string(config))
    } else {
        basic_connection_string(config)
    }
}

/// Azure AD service-principal form: the client id is the principal
/// identity and the client secret is the credential.
fn service_principal_connection_string(config: &DatabaseConfig) -> String {
    format!(
        "server={};fedauth=ActiveDirectoryServicePrincipal;User ID={};Password={};database={}",
        config.host, config.azure_client_id, config.azure_client_secret, config.name
    )
}

/// Username/password form, shared by SQL Server, Azure SQL DB in password
/// mode, and any future basic-credential dialect.
fn basic_connection_string(config: &DatabaseConfig) -> Result<String, ConnectError> {
    // Reachable when a non-Azure config declares service-principal auth:
    // validation passed on the Azure fields, but this branch still needs
    // a login identity.
    if config.user.is_empty() {
        return Err(ConnectError::MissingUser);
    }

    let mut user = config.user.clone();

    // Azure SQL DB logins must be qualified by the logical server short
    // name unless the caller already supplied a qualified identity.
    if config.database_type == DatabaseType::AzureSqlDb && !user.contains('@') {
        let server = server_short_name(&config.host);
        if !server.is_empty() {
            user = format!("{user}@{server}");
        }
    }

    Ok(format!(
        "server={};user id={};password={};database={}",
        config.host, user, config.password, config.name
    ))
}

/// Extract the logical server short name from a full host address.
///
/// `acct.database.windows.net:1433` -> `acct`,
/// `localhost:1433` -> `localhost`,
/// `127.0.0.1` -> `127.0.0.1`.
pub fn server_short_name(host: &str) -> &str {
    let host = match host.find(':') {
        Some(idx) => &host[..idx],
        None => host,
    };

    match host.find(".database.windows.net") {
        Some(idx) => &host[..idx],
        None => host,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn azure_password_config() -> DatabaseConfig {
        DatabaseConfig {
            database_type: DatabaseType::AzureSqlDb,
            host: "myserver.database.windows.net".to_string(),
            name: "ledger".to_string(),
            user: "alice".to_string(),
            password: "p@ss".to_string(),
            ..DatabaseConfig::default()
        }
    }

    #[test]
    fn sql_server_basic_string() {
        let config = DatabaseConfig {
            database_type: DatabaseType::SqlServer,
            host: "db.internal".to_string(),
            name: "ledger".to_string(),
            user: "svc".to_string(),
            password: "p@ss".to_string(),
            ..DatabaseConfig::default()
        };

        assert_eq!(
            build_connection_string(Some(&config)).unwrap(),
            "server=db.internal;user id=svc;password=p@ss;database=ledger"
        );
    }

    #[test]
    fn azure_user_gets_qualified_with_server_short_name() {
        let conn = build_connection_string(Some(&azure_password_config())).unwrap();
        assert!(conn.contains("user id=alice@myserver;"));
    }

    #[test]
    fn already_qualified_azure_user_is_left_alone() {
        let mut config = azure_password_config();
        config.user = "alice@myserver".to_string();
        let conn = build_connection_string(Some(&config)).unwrap();
        assert!(conn.contains("user id=alice@myserver;"));
        assert!(!conn.contains("alice@myserver@"));
    }

    #[test]
    fn non_azure_user_is_never_qualified() {
        let config = DatabaseConfig {
            database_type: DatabaseType::SqlServer,
            host: "db.database.windows.net".to_string(),
            name: "ledger".to_string(),
            user: "svc".to_string(),
            password: "x".to_string(),
            ..DatabaseConfig::default()
        };

        let conn = build_connection_string(Some(&config)).unwrap();
        assert!(conn.contains("user id=svc;"));
    }

    #[test]
    fn service_principal_string_shape() {
        let config = DatabaseConfig {
            database_type: DatabaseType::AzureSqlDb,
            host: "acct.database.windows.net".to_string(),
            name: "ledger".to_string(),
            auth_method: AuthMethod::ServicePrincipal,
            azure_tenant_id: "tid".to_string(),
            azure_client_id: "cid".to_string(),
            azure_client_secret: "secret".to_string(),
            ..DatabaseConfig::default()
        };

        let conn = build_connection_string(Some(&config)).unwrap();
        assert_eq!(
            conn,
            "server=acct.database.windows.net;fedauth=ActiveDirectoryServicePrincipal;\
             User ID=cid;Password=secret;database=ledger"
        );
        assert!(!conn.contains("password"));
    }

    #[test]
    fn build_is_idempotent() {
        let config = azure_password_config();
        let first = build_connection_string(Some(&config)).unwrap();
        let second = build_connection_string(Some(&config)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn validation_errors_propagate_unchanged() {
        assert_eq!(
            build_connection_string(None),
            Err(ConnectError::NullConfig)
        );

        let mut config = azure_password_config();
        config.host.clear();
        assert_eq!(
            build_connection_string(Some(&config)),
            Err(ConnectError::MissingHost)
        );
    }

    #[test]
    fn server_short_name_extraction() {
        assert_eq!(server_short_name("myserver.database.windows.net"), "myserver");
        assert_eq!(
            server_short_name("myserver.database.windows.net:1433"),
            "myserver"
        );
        assert_eq!(server_short_name("localhost:1433"), "localhost");
        assert_eq!(server_short_name("127.0.0.1"), "127.0.0.1");
    }

    #[test]
    fn empty_short_name_leaves_user_unqualified() {
        let mut config = azure_password_config();
        config.host = ".database.windows.net".to_string();
        let conn = build_connection_string(Some(&config)).unwrap();
        assert!(conn.contains("user id=alice;"));
    }
}
