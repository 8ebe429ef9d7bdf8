use async_trait::async_trait;

use crate::domain::error::DomainError;
use crate::domain::post::{Post, PostSort, UpdatePostRequest};

#[derive(Debug, Clone)]
pub(crate) struct NewPost {
    pub(crate) title: String,
    pub(crate) body: String,
    pub(crate) image_url: Option<String>,
    pub(crate) author_id: i64,
}

#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct PostFilter {
    pub(crate) author_id: Option<i64>,
    pub(crate) sort: PostSort,
}

#[async_trait]
pub(crate) trait PostRepository: Send + Sync {
    async fn create_post(&self, input: NewPost) -> Result<Post, DomainError>;
    async fn get_post(&self, id: i64) -> Result<Option<Post>, DomainError>;
    async fn update_post(
        &self,
        id: i64,
        patch: UpdatePostRequest,
    ) -> Result<Option<Post>, DomainError>;
    async fn delete_post(&self, id: i64) -> Result<bool, DomainError>;
    async fn list_posts(&self, filter: PostFilter) -> Result<Vec<Post>, DomainError>;
    /// Посты пользователя и всех, на кого он подписан.
    async fn list_feed(&self, user_id: i64, sort: PostSort) -> Result<Vec<Post>, DomainError>;
    async fn user_exists(&self, user_id: i64) -> Result<bool, DomainError>;
}
