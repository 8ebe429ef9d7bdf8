use async_trait::async_trait;

use crate::domain::error::DomainError;
use crate::domain::follow::{CreateFollowRequest, Follow};

#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct FollowFilter {
    pub(crate) follower_id: Option<i64>,
    pub(crate) followed_id: Option<i64>,
}

#[async_trait]
pub(crate) trait FollowRepository: Send + Sync {
    async fn create_follow(&self, input: CreateFollowRequest) -> Result<Follow, DomainError>;
    async fn find_pair(
        &self,
        follower_id: i64,
        followed_id: i64,
    ) -> Result<Option<Follow>, DomainError>;
    async fn list_follows(&self, filter: FollowFilter) -> Result<Vec<Follow>, DomainError>;
    async fn delete_follow(&self, id: i64) -> Result<bool, DomainError>;
}
