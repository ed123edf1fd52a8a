use aws_sdk_ssm::Client as SsmClient;
use tracing::info;

use super::config::AppConfig;
use crate::errors::UserApiError;

/// Returns the database password, reading it from SSM Parameter Store when
/// only `DB_PASSWORD_PARAM` is configured.
///
/// # Errors
///
/// Returns an error if neither source is configured, the SSM call fails, or
/// the parameter has no value.
pub async fn resolve_db_password(config: &AppConfig) -> Result<String, UserApiError> {
    if let Some(password) = &config.db_password {
        return Ok(password.clone());
    }

    let Some(name) = &config.db_password_param else {
        return Err(UserApiError::ConfigError(
            "DB_PASSWORD or DB_PASSWORD_PARAM must be set".to_string(),
        ));
    };

    info!(parameter = %name, "Loading database password from SSM");
    let shared = aws_config::from_env().load().await;
    let client = SsmClient::new(&shared);

    let resp = client
        .get_parameter()
        .name(name)
        .with_decryption(true)
        .send()
        .await
        .map_err(|e| UserApiError::AwsError(format!("ssm get_parameter: {e}")))?;

    resp.parameter
        .and_then(|param| param.value)
        .ok_or_else(|| UserApiError::ConfigError(format!("SSM parameter {name} has no value")))
}
