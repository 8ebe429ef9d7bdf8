use tracing::info;

use crate::data::comment_repository::{CommentRepository, NewComment};
use crate::domain::comment::{
    Comment, CommentThread, CreateCommentRequest, UpdateCommentRequest, build_thread,
    build_threads,
};
use crate::domain::error::DomainError;

pub(crate) struct CommentService<R: CommentRepository> {
    repo: R,
    max_depth: usize,
}

impl<R: CommentRepository> CommentService<R> {
    pub(crate) fn new(repo: R, max_depth: usize) -> Self {
        Self { repo, max_depth }
    }

    pub(crate) async fn create_comment(
        &self,
        req: CreateCommentRequest,
    ) -> Result<Comment, DomainError> {
        let req = req.validate()?;

        if let Some(parent_id) = req.parent_comment_id {
            let parent = self
                .repo
                .get_comment(parent_id)
                .await?
                .ok_or_else(|| DomainError::not_found("Parent comment"))?;
            parent.accepts_reply_on(req.post_id)?;
        }

        let comment = self
            .repo
            .create_comment(NewComment {
                body: req.body,
                post_id: req.post_id,
                user_id: req.user_id,
                parent_comment_id: req.parent_comment_id,
            })
            .await?;
        info!(
            comment_id = comment.id,
            post_id = comment.post_id,
            parent_comment_id = ?comment.parent_comment_id,
            "comment created"
        );
        Ok(comment)
    }

    pub(crate) async fn get_comment(&self, id: i64) -> Result<CommentThread, DomainError> {
        let subtree = self.repo.get_subtree(id, self.max_depth).await?;
        build_thread(id, subtree, self.max_depth).ok_or_else(|| DomainError::not_found("Comment"))
    }

    pub(crate) async fn list_comments(
        &self,
        post_id: Option<i64>,
    ) -> Result<Vec<CommentThread>, DomainError> {
        let comments = self.repo.list_comments(post_id).await?;
        Ok(build_threads(comments, self.max_depth))
    }

    pub(crate) async fn update_comment(
        &self,
        id: i64,
        req: UpdateCommentRequest,
    ) -> Result<Comment, DomainError> {
        let req = req.validate()?;
        let Some(body) = req.body else {
            return self
                .repo
                .get_comment(id)
                .await?
                .ok_or_else(|| DomainError::not_found("Comment"));
        };
        self.repo
            .update_comment(id, body)
            .await?
            .ok_or_else(|| DomainError::not_found("Comment"))
    }

    pub(crate) async fn delete_comment(&self, id: i64) -> Result<(), DomainError> {
        if !self.repo.delete_comment(id).await? {
            return Err(DomainError::not_found("Comment"));
        }
        info!(comment_id = id, "comment deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use chrono::Utc;

    use super::CommentService;
    use crate::data::comment_repository::{CommentRepository, NewComment};
    use crate::domain::comment::{Comment, CreateCommentRequest};
    use crate::domain::error::DomainError;

    #[derive(Clone, Default)]
    struct FakeCommentRepo {
        stored: Arc<Mutex<Vec<Comment>>>,
        created_input: Arc<Mutex<Option<NewComment>>>,
    }

    impl FakeCommentRepo {
        fn with(comments: Vec<Comment>) -> Self {
            let repo = Self::default();
            *repo.stored.lock().expect("stored mutex poisoned") = comments;
            repo
        }
    }

    #[async_trait]
    impl CommentRepository for FakeCommentRepo {
        async fn create_comment(&self, input: NewComment) -> Result<Comment, DomainError> {
            *self
                .created_input
                .lock()
                .expect("created_input mutex poisoned") = Some(input.clone());
            Comment::new(
                100,
                input.body,
                input.post_id,
                input.user_id,
                input.parent_comment_id,
                Utc::now(),
            )
        }

        async fn get_comment(&self, id: i64) -> Result<Option<Comment>, DomainError> {
            Ok(self
                .stored
                .lock()
                .expect("stored mutex poisoned")
                .iter()
                .find(|comment| comment.id == id)
                .cloned())
        }

        async fn get_subtree(&self, _id: i64, _max_depth: usize) -> Result<Vec<Comment>, DomainError> {
            Ok(self.stored.lock().expect("stored mutex poisoned").clone())
        }

        async fn list_comments(&self, _post_id: Option<i64>) -> Result<Vec<Comment>, DomainError> {
            Ok(self.stored.lock().expect("stored mutex poisoned").clone())
        }

        async fn update_comment(
            &self,
            _id: i64,
            _body: String,
        ) -> Result<Option<Comment>, DomainError> {
            Ok(None)
        }

        async fn delete_comment(&self, _id: i64) -> Result<bool, DomainError> {
            Ok(false)
        }
    }

    fn comment(id: i64, post_id: i64, parent: Option<i64>) -> Comment {
        Comment::new(id, format!("comment {id}"), post_id, 1, parent, Utc::now())
            .expect("sample comment must be valid")
    }

    fn reply(post_id: i64, parent: i64) -> CreateCommentRequest {
        CreateCommentRequest {
            body: "a reply".to_string(),
            post_id,
            user_id: 1,
            parent_comment_id: Some(parent),
        }
    }

    #[tokio::test]
    async fn reply_to_missing_parent_is_not_found() {
        let repo = FakeCommentRepo::default();
        let service = CommentService::new(repo.clone(), 16);

        let err = service
            .create_comment(reply(1, 9))
            .await
            .expect_err("parent is missing");
        assert_eq!(err.to_string(), "Parent comment not found");
        assert!(
            repo.created_input
                .lock()
                .expect("created_input mutex poisoned")
                .is_none()
        );
    }

    #[tokio::test]
    async fn reply_must_target_parent_post() {
        let service = CommentService::new(FakeCommentRepo::with(vec![comment(1, 1, None)]), 16);

        let err = service
            .create_comment(reply(2, 1))
            .await
            .expect_err("post mismatch");
        assert!(matches!(
            err,
            DomainError::Validation {
                field: "parent_comment_id",
                ..
            }
        ));
    }

    #[tokio::test]
    async fn reply_to_existing_parent_is_created() {
        let repo = FakeCommentRepo::with(vec![comment(1, 1, None)]);
        let service = CommentService::new(repo, 16);

        let created = service
            .create_comment(reply(1, 1))
            .await
            .expect("reply must be created");
        assert_eq!(created.parent_comment_id, Some(1));
    }

    #[tokio::test]
    async fn get_comment_nests_replies() {
        let repo = FakeCommentRepo::with(vec![
            comment(1, 1, None),
            comment(2, 1, Some(1)),
            comment(3, 1, Some(2)),
        ]);
        let service = CommentService::new(repo, 16);

        let thread = service.get_comment(1).await.expect("thread must exist");
        assert_eq!(thread.replies.len(), 1);
        assert_eq!(thread.replies[0].replies[0].comment.id, 3);
    }

    #[tokio::test]
    async fn get_missing_comment_is_not_found() {
        let service = CommentService::new(FakeCommentRepo::default(), 16);
        let err = service.get_comment(1).await.expect_err("missing");
        assert_eq!(err.to_string(), "Comment not found");
    }

    #[tokio::test]
    async fn delete_missing_comment_is_not_found() {
        let service = CommentService::new(FakeCommentRepo::default(), 16);
        let err = service.delete_comment(1).await.expect_err("missing");
        assert!(matches!(err, DomainError::NotFound(_)));
    }
}
