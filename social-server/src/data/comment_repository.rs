use async_trait::async_trait;

use crate::domain::comment::Comment;
use crate::domain::error::DomainError;

#[derive(Debug, Clone)]
pub(crate) struct NewComment {
    pub(crate) body: String,
    pub(crate) post_id: i64,
    pub(crate) user_id: i64,
    pub(crate) parent_comment_id: Option<i64>,
}

#[async_trait]
pub(crate) trait CommentRepository: Send + Sync {
    async fn create_comment(&self, input: NewComment) -> Result<Comment, DomainError>;
    async fn get_comment(&self, id: i64) -> Result<Option<Comment>, DomainError>;
    /// Комментарий `id` и все его ответы (до `max_depth` уровней) плоским списком.
    async fn get_subtree(&self, id: i64, max_depth: usize) -> Result<Vec<Comment>, DomainError>;
    async fn list_comments(&self, post_id: Option<i64>) -> Result<Vec<Comment>, DomainError>;
    async fn update_comment(&self, id: i64, body: String) -> Result<Option<Comment>, DomainError>;
    /// Удаляет комментарий и все ответы на него.
    async fn delete_comment(&self, id: i64) -> Result<bool, DomainError>;
}
