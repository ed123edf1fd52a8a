use thiserror::Error;

#[derive(Debug, Error)]
pub enum UserApiError {
    #[error("Failed to parse request body: {0}")]
    ParseError(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value for field: {0}")]
    InvalidField(String),

    #[error("Failed to access the database: {0}")]
    DatabaseError(String),

    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error("Failed to interact with AWS services: {0}")]
    AwsError(String),
}

impl From<serde_json::Error> for UserApiError {
    fn from(error: serde_json::Error) -> Self {
        UserApiError::ParseError(error.to_string())
    }
}

impl From<base64::DecodeError> for UserApiError {
    fn from(error: base64::DecodeError) -> Self {
        UserApiError::ParseError(format!("base64 body: {error}"))
    }
}

impl From<std::string::FromUtf8Error> for UserApiError {
    fn from(error: std::string::FromUtf8Error) -> Self {
        UserApiError::ParseError(format!("body is not UTF-8: {error}"))
    }
}

impl From<sqlx::Error> for UserApiError {
    fn from(error: sqlx::Error) -> Self {
        UserApiError::DatabaseError(error.to_string())
    }
}
