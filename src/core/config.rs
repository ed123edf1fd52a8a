use std::env;
use std::fmt;

pub const DEFAULT_DB_PORT: u16 = 3306;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;

#[derive(Clone)]
pub struct AppConfig {
    pub rds_host: String,
    pub db_port: u16,
    pub db_username: String,
    pub db_password: Option<String>,
    pub db_password_param: Option<String>,
    pub db_name: String,
    pub connect_timeout_secs: u64,
}

impl AppConfig {
    /// # Errors
    ///
    /// Returns an error naming the variable that is missing or malformed.
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. `from_env` is this
    /// with `std::env::var`.
    ///
    /// # Errors
    ///
    /// Returns an error naming the variable that is missing or malformed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| lookup(key).ok_or_else(|| format!("{key}: not set"));

        let db_port = match lookup("DB_PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|e| format!("DB_PORT: {e}"))?,
            None => DEFAULT_DB_PORT,
        };

        let connect_timeout_secs = match lookup("DB_CONNECT_TIMEOUT_SECS") {
            Some(raw) => raw
                .parse::<u64>()
                .map_err(|e| format!("DB_CONNECT_TIMEOUT_SECS: {e}"))?,
            None => DEFAULT_CONNECT_TIMEOUT_SECS,
        };

        let db_password = lookup("DB_PASSWORD");
        let db_password_param = lookup("DB_PASSWORD_PARAM");
        if db_password.is_none() && db_password_param.is_none() {
            return Err("DB_PASSWORD or DB_PASSWORD_PARAM must be set".to_string());
        }

        Ok(Self {
            rds_host: required("RDS_HOST")?,
            db_port,
            db_username: required("DB_USERNAME")?,
            db_password,
            db_password_param,
            db_name: required("DB_NAME")?,
            connect_timeout_secs,
        })
    }
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("rds_host", &self.rds_host)
            .field("db_port", &self.db_port)
            .field("db_username", &self.db_username)
            .field("db_password", &self.db_password.as_ref().map(|_| "<redacted>"))
            .field("db_password_param", &self.db_password_param)
            .field("db_name", &self.db_name)
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .finish()
    }
}
