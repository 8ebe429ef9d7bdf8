use tracing::info;

use crate::data::like_repository::{LikeFilter, LikeRepository};
use crate::domain::error::DomainError;
use crate::domain::like::{CreateLikeRequest, Like};

pub(crate) struct LikeService<R: LikeRepository> {
    repo: R,
}

impl<R: LikeRepository> LikeService<R> {
    pub(crate) fn new(repo: R) -> Self {
        Self { repo }
    }

    pub(crate) async fn like_post(&self, req: CreateLikeRequest) -> Result<Like, DomainError> {
        let req = req.validate()?;
        let like = self.repo.create_like(req).await?;
        info!(like_id = like.id, user_id = like.user_id, post_id = like.post_id, "post liked");
        Ok(like)
    }

    pub(crate) async fn list_likes(&self, filter: LikeFilter) -> Result<Vec<Like>, DomainError> {
        self.repo.list_likes(filter).await
    }

    pub(crate) async fn remove_like(&self, id: i64) -> Result<(), DomainError> {
        if !self.repo.delete_like(id).await? {
            return Err(DomainError::not_found("Like"));
        }
        info!(like_id = id, "like removed");
        Ok(())
    }
}
