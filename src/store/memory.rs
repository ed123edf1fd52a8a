use async_trait::async_trait;
use tokio::sync::Mutex;

use super::UserStore;
use crate::core::models::{NewUser, User};
use crate::errors::UserApiError;

/// In-process store with the same append-only semantics as the `User` table.
#[derive(Debug, Default)]
pub struct MemoryUserStore {
    rows: Mutex<Vec<User>>,
}

impl MemoryUserStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            rows: Mutex::new(users),
        }
    }

    pub async fn len(&self) -> usize {
        self.rows.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.rows.lock().await.is_empty()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn insert_user(&self, user: &NewUser) -> Result<(), UserApiError> {
        self.rows.lock().await.push(User::from(user.clone()));
        Ok(())
    }

    async fn list_users(&self) -> Result<Vec<User>, UserApiError> {
        Ok(self.rows.lock().await.clone())
    }
}
