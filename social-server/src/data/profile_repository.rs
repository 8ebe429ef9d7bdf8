use async_trait::async_trait;

use crate::domain::error::DomainError;
use crate::domain::profile::{CreateProfileRequest, Profile, UpdateProfileRequest};

#[async_trait]
pub(crate) trait ProfileRepository: Send + Sync {
    async fn create_profile(&self, input: CreateProfileRequest) -> Result<Profile, DomainError>;
    async fn find_by_user(&self, user_id: i64) -> Result<Option<Profile>, DomainError>;
    async fn list_profiles(&self) -> Result<Vec<Profile>, DomainError>;
    async fn update_by_user(
        &self,
        user_id: i64,
        patch: UpdateProfileRequest,
    ) -> Result<Option<Profile>, DomainError>;
}
