//! Storage seam for the `User` table.

pub mod memory;
pub mod mysql;

use async_trait::async_trait;

use crate::core::models::{NewUser, User};
use crate::errors::UserApiError;

pub use memory::MemoryUserStore;
pub use mysql::MySqlUserStore;

#[async_trait]
pub trait UserStore: Send + Sync {
    /// Appends one row. Duplicate emails are accepted.
    async fn insert_user(&self, user: &NewUser) -> Result<(), UserApiError>;

    /// Returns every row in storage order.
    async fn list_users(&self) -> Result<Vec<User>, UserApiError>;
}
