use async_trait::async_trait;

use crate::domain::error::DomainError;
use crate::domain::like::{CreateLikeRequest, Like};

#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct LikeFilter {
    pub(crate) user_id: Option<i64>,
    pub(crate) post_id: Option<i64>,
}

#[async_trait]
pub(crate) trait LikeRepository: Send + Sync {
    async fn create_like(&self, input: CreateLikeRequest) -> Result<Like, DomainError>;
    async fn list_likes(&self, filter: LikeFilter) -> Result<Vec<Like>, DomainError>;
    async fn delete_like(&self, id: i64) -> Result<bool, DomainError>;
}
