//! MySQL-backed [`UserStore`] holding one long-lived connection.
//!
//! The connection is opened once at process start and reused by every
//! invocation. A mutex serializes access so overlapping invocations never
//! share the connection mid-statement.

use std::time::Duration;

use async_trait::async_trait;
use sqlx::mysql::{MySqlConnectOptions, MySqlConnection};
use sqlx::{Connection, Row};
use tokio::sync::Mutex;
use tracing::{debug, info};

use super::UserStore;
use crate::core::config::AppConfig;
use crate::core::models::{NewUser, User};
use crate::core::secrets;
use crate::errors::UserApiError;

const INSERT_USER: &str = "INSERT INTO User ( email, password ) VALUES ( ?, ? );";
const SELECT_USERS: &str = "SELECT * FROM User;";

// Ordinal positions in `SELECT *`: (id, email, password).
const EMAIL_COLUMN: usize = 1;
const PASSWORD_COLUMN: usize = 2;

pub struct MySqlUserStore {
    conn: Mutex<MySqlConnection>,
}

impl MySqlUserStore {
    /// Resolves the password and opens the connection described by `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the password cannot be resolved, the connect
    /// attempt fails, or it exceeds `connect_timeout_secs`.
    #[tracing::instrument(skip(config), fields(host = %config.rds_host, db = %config.db_name))]
    pub async fn connect(config: &AppConfig) -> Result<Self, UserApiError> {
        let password = secrets::resolve_db_password(config).await?;
        let options = MySqlConnectOptions::new()
            .host(&config.rds_host)
            .port(config.db_port)
            .username(&config.db_username)
            .password(&password)
            .database(&config.db_name);

        let timeout = Duration::from_secs(config.connect_timeout_secs);
        let conn = tokio::time::timeout(timeout, MySqlConnection::connect_with(&options))
            .await
            .map_err(|_| {
                UserApiError::DatabaseError(format!(
                    "connect timed out after {}s",
                    config.connect_timeout_secs
                ))
            })??;

        info!("Connected to MySQL instance");
        Ok(Self::from_connection(conn))
    }

    /// Wraps an already open connection.
    #[must_use]
    pub fn from_connection(conn: MySqlConnection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }
}

#[async_trait]
impl UserStore for MySqlUserStore {
    async fn insert_user(&self, user: &NewUser) -> Result<(), UserApiError> {
        let mut conn = self.conn.lock().await;
        let mut tx = conn.begin().await?;
        sqlx::query(INSERT_USER)
            .bind(&user.email)
            .bind(&user.password)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(())
    }

    async fn list_users(&self) -> Result<Vec<User>, UserApiError> {
        let mut conn = self.conn.lock().await;
        let rows = sqlx::query(SELECT_USERS).fetch_all(&mut *conn).await?;

        rows.iter()
            .map(|row| -> Result<User, UserApiError> {
                let user = User {
                    email: row.try_get::<Option<String>, _>(EMAIL_COLUMN)?,
                    password: row.try_get::<Option<String>, _>(PASSWORD_COLUMN)?,
                };
                debug!(email = ?user.email, "Read user row");
                Ok(user)
            })
            .collect()
    }
}
