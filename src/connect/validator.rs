use crate::connect::ConnectError;
use crate::model::{AuthMethod, DatabaseConfig};

/// Check that a database configuration is complete and self-consistent
/// for its declared authentication mode.
///
/// `None` stands for a configuration that was never loaded (the
/// `[database]` section absent from the config file) and is a distinct
/// error from any empty field.
///
/// Service-principal fields are checked in a fixed order
/// (tenant, client id, client secret) so the reported error is
/// deterministic when several are missing.
pub fn validate(config: Option<&DatabaseConfig>) -> Result<(), ConnectError> {
    let config = config.ok_or(ConnectError::NullConfig)?;

    if config.host.is_empty() {
        return Err(ConnectError::MissingHost);
    }

    if config.name.is_empty() {
        return Err(ConnectError::MissingDatabaseName);
    }

    if config.auth_method == AuthMethod::ServicePrincipal {
        if config.azure_tenant_id.is_empty() {
            return Err(ConnectError::MissingTenantId);
        }
        if config.azure_client_id.is_empty() {
            return Err(ConnectError::MissingClientId);
        }
        if config.azure_client_secret.is_empty() {
            return Err(ConnectError::MissingClientSecret);
        }
    } else if config.user.is_empty() {
        return Err(ConnectError::MissingUser);
    }

    Ok(())
}
