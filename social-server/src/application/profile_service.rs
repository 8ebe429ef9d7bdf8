use tracing::info;

use crate::data::profile_repository::ProfileRepository;
use crate::domain::error::DomainError;
use crate::domain::profile::{CreateProfileRequest, Profile, UpdateProfileRequest};

pub(crate) struct ProfileService<R: ProfileRepository> {
    repo: R,
}

impl<R: ProfileRepository> ProfileService<R> {
    pub(crate) fn new(repo: R) -> Self {
        Self { repo }
    }

    pub(crate) async fn create_profile(
        &self,
        req: CreateProfileRequest,
    ) -> Result<Profile, DomainError> {
        let req = req.validate()?;
        let profile = self.repo.create_profile(req).await?;
        info!(profile_id = profile.id, user_id = profile.user_id, "profile created");
        Ok(profile)
    }

    /// Профиль пользователя; отсутствие профиля не считается ошибкой.
    pub(crate) async fn get_profile(&self, user_id: i64) -> Result<Option<Profile>, DomainError> {
        self.repo.find_by_user(user_id).await
    }

    pub(crate) async fn list_profiles(&self) -> Result<Vec<Profile>, DomainError> {
        self.repo.list_profiles().await
    }

    pub(crate) async fn update_profile(
        &self,
        user_id: i64,
        req: UpdateProfileRequest,
    ) -> Result<Profile, DomainError> {
        let req = req.validate()?;
        self.repo
            .update_by_user(user_id, req)
            .await?
            .ok_or_else(|| DomainError::not_found("Profile"))
    }
}
