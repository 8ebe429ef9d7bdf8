use tracing::info;

use crate::data::user_repository::UserRepository;
use crate::domain::error::DomainError;
use crate::domain::user::{UpdateUserRequest, User};

pub(crate) struct UserService<R: UserRepository> {
    repo: R,
}

impl<R: UserRepository> UserService<R> {
    pub(crate) fn new(repo: R) -> Self {
        Self { repo }
    }

    pub(crate) async fn list_users(&self) -> Result<Vec<User>, DomainError> {
        self.repo.list_users().await
    }

    pub(crate) async fn get_user(&self, id: i64) -> Result<User, DomainError> {
        self.repo
            .get_user(id)
            .await?
            .ok_or_else(|| DomainError::not_found("User"))
    }

    pub(crate) async fn update_user(
        &self,
        id: i64,
        req: UpdateUserRequest,
    ) -> Result<User, DomainError> {
        let req = req.validate()?;
        if req.is_empty() {
            return self.get_user(id).await;
        }
        self.repo
            .update_user(id, req)
            .await?
            .ok_or_else(|| DomainError::not_found("User"))
    }

    pub(crate) async fn delete_user(&self, id: i64) -> Result<(), DomainError> {
        if !self.repo.delete_user(id).await? {
            return Err(DomainError::not_found("User"));
        }
        info!(user_id = id, "user deleted");
        Ok(())
    }
}
