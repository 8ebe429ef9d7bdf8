use async_trait::async_trait;

use crate::domain::error::DomainError;
use crate::domain::user::{UpdateUserRequest, User};

#[derive(Debug, Clone)]
pub(crate) struct UserCredentials {
    pub(crate) user: User,
    pub(crate) password_hash: String,
}

#[derive(Debug, Clone)]
pub(crate) struct NewUser {
    pub(crate) username: String,
    pub(crate) email: String,
    pub(crate) first_name: String,
    pub(crate) last_name: String,
    pub(crate) password_hash: String,
}

#[async_trait]
pub(crate) trait UserRepository: Send + Sync {
    async fn create_user(&self, input: NewUser) -> Result<User, DomainError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<UserCredentials>, DomainError>;
    async fn get_user(&self, id: i64) -> Result<Option<User>, DomainError>;
    async fn list_users(&self) -> Result<Vec<User>, DomainError>;
    async fn update_user(
        &self,
        id: i64,
        patch: UpdateUserRequest,
    ) -> Result<Option<User>, DomainError>;
    /// Удаляет пользователя вместе с постами, профилем, лайками, комментариями
    /// и подписками в одной транзакции.
    async fn delete_user(&self, id: i64) -> Result<bool, DomainError>;
}
