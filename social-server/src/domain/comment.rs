use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::rules::{BODY, validate_positive_i64};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct Comment {
    pub(crate) id: i64,
    pub(crate) body: String,
    pub(crate) post_id: i64,
    pub(crate) user_id: i64,
    pub(crate) parent_comment_id: Option<i64>,
    pub(crate) created_at: DateTime<Utc>,
}

/// Комментарий вместе с вложенными ответами.
#[derive(Debug, Clone)]
pub(crate) struct CommentThread {
    pub(crate) comment: Comment,
    pub(crate) replies: Vec<CommentThread>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct CreateCommentRequest {
    pub(crate) body: String,
    pub(crate) post_id: i64,
    pub(crate) user_id: i64,
    pub(crate) parent_comment_id: Option<i64>,
}

impl CreateCommentRequest {
    pub(crate) fn validate(self) -> Result<Self, DomainError> {
        validate_positive_i64("post_id", self.post_id)?;
        validate_positive_i64("user_id", self.user_id)?;
        if let Some(parent_id) = self.parent_comment_id {
            validate_positive_i64("parent_comment_id", parent_id)?;
        }
        Ok(Self {
            body: BODY.normalize(&self.body)?,
            ..self
        })
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub(crate) struct UpdateCommentRequest {
    pub(crate) body: Option<String>,
}

impl UpdateCommentRequest {
    pub(crate) fn validate(self) -> Result<Self, DomainError> {
        Ok(Self {
            body: self.body.map(|body| BODY.normalize(&body)).transpose()?,
        })
    }
}

impl Comment {
    pub(crate) fn new(
        id: i64,
        body: impl Into<String>,
        post_id: i64,
        user_id: i64,
        parent_comment_id: Option<i64>,
        created_at: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        validate_positive_i64("id", id)?;
        validate_positive_i64("post_id", post_id)?;
        validate_positive_i64("user_id", user_id)?;
        if parent_comment_id == Some(id) {
            return Err(DomainError::validation(
                "parent_comment_id",
                "comment cannot reply to itself",
            ));
        }

        Ok(Self {
            id,
            body: BODY.normalize(&body.into())?,
            post_id,
            user_id,
            parent_comment_id,
            created_at,
        })
    }

    /// Ответ должен относиться к тому же посту, что и родительский комментарий.
    pub(crate) fn accepts_reply_on(&self, post_id: i64) -> Result<(), DomainError> {
        if self.post_id != post_id {
            return Err(DomainError::validation(
                "parent_comment_id",
                "parent comment belongs to a different post",
            ));
        }
        Ok(())
    }
}

/// Собирает деревья ответов для каждого комментария из `comments`.
///
/// Каждый комментарий возвращается как корень своего дерева (как и в списке
/// `GET /comments`). Вложенность обрезается на глубине `max_depth`.
pub(crate) fn build_threads(comments: Vec<Comment>, max_depth: usize) -> Vec<CommentThread> {
    let index = ReplyIndex::new(&comments);
    comments
        .iter()
        .map(|comment| index.thread(comment, max_depth))
        .collect()
}

/// Собирает дерево для `root_id`; `None`, если корня нет среди `comments`.
pub(crate) fn build_thread(
    root_id: i64,
    comments: Vec<Comment>,
    max_depth: usize,
) -> Option<CommentThread> {
    let index = ReplyIndex::new(&comments);
    comments
        .iter()
        .find(|comment| comment.id == root_id)
        .map(|root| index.thread(root, max_depth))
}

struct ReplyIndex<'a> {
    children: HashMap<i64, Vec<&'a Comment>>,
}

impl<'a> ReplyIndex<'a> {
    fn new(comments: &'a [Comment]) -> Self {
        let mut children: HashMap<i64, Vec<&'a Comment>> = HashMap::new();
        for comment in comments {
            if let Some(parent_id) = comment.parent_comment_id {
                children.entry(parent_id).or_default().push(comment);
            }
        }
        for replies in children.values_mut() {
            replies.sort_by_key(|reply| (reply.created_at, reply.id));
        }
        Self { children }
    }

    fn thread(&self, comment: &Comment, depth_left: usize) -> CommentThread {
        let replies = match (depth_left, self.children.get(&comment.id)) {
            (0, _) | (_, None) => Vec::new(),
            (_, Some(replies)) => replies
                .iter()
                .map(|reply| self.thread(reply, depth_left - 1))
                .collect(),
        };
        CommentThread {
            comment: comment.clone(),
            replies,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};

    use super::{Comment, CreateCommentRequest, build_thread, build_threads};
    use crate::domain::error::DomainError;

    fn comment(id: i64, parent: Option<i64>, offset_secs: i64) -> Comment {
        Comment::new(
            id,
            format!("comment {id}"),
            1,
            1,
            parent,
            Utc::now() + Duration::seconds(offset_secs),
        )
        .expect("sample comment must be valid")
    }

    #[test]
    fn create_comment_request_rejects_short_body() {
        let req = CreateCommentRequest {
            body: "hey".to_string(),
            post_id: 1,
            user_id: 1,
            parent_comment_id: None,
        };
        let err = req.validate().expect_err("body must be rejected");
        assert_eq!(err.to_string(), "The body must have at least 4 characters.");
    }

    #[test]
    fn comment_cannot_be_its_own_parent() {
        let err = Comment::new(5, "body!", 1, 1, Some(5), Utc::now())
            .expect_err("self parent must fail");
        assert!(matches!(
            err,
            DomainError::Validation {
                field: "parent_comment_id",
                ..
            }
        ));
    }

    #[test]
    fn reply_on_other_post_is_rejected() {
        let parent = comment(1, None, 0);
        assert!(parent.accepts_reply_on(1).is_ok());
        assert!(parent.accepts_reply_on(2).is_err());
    }

    #[test]
    fn build_thread_nests_replies_oldest_first() {
        let comments = vec![
            comment(1, None, 0),
            comment(3, Some(1), 20),
            comment(2, Some(1), 10),
            comment(4, Some(2), 30),
        ];

        let thread = build_thread(1, comments, 16).expect("root must exist");
        let reply_ids: Vec<i64> = thread.replies.iter().map(|r| r.comment.id).collect();
        assert_eq!(reply_ids, vec![2, 3]);
        assert_eq!(thread.replies[0].replies[0].comment.id, 4);
        assert!(thread.replies[1].replies.is_empty());
    }

    #[test]
    fn build_thread_truncates_at_max_depth() {
        let comments = vec![
            comment(1, None, 0),
            comment(2, Some(1), 1),
            comment(3, Some(2), 2),
        ];

        let thread = build_thread(1, comments, 1).expect("root must exist");
        assert_eq!(thread.replies.len(), 1);
        assert!(thread.replies[0].replies.is_empty());
    }

    #[test]
    fn build_thread_returns_none_for_missing_root() {
        assert!(build_thread(9, vec![comment(1, None, 0)], 4).is_none());
    }

    #[test]
    fn build_threads_returns_every_comment_as_root() {
        let comments = vec![comment(1, None, 0), comment(2, Some(1), 1)];
        let threads = build_threads(comments, 4);
        assert_eq!(threads.len(), 2);
        assert_eq!(threads[0].replies.len(), 1);
        assert!(threads[1].replies.is_empty());
    }
}
