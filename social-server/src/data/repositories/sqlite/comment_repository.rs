use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use super::{Violation, violation};
use crate::data::comment_repository::{CommentRepository, NewComment};
use crate::domain::comment::Comment;
use crate::domain::error::DomainError;

#[derive(Debug, Clone)]
pub(crate) struct SqliteCommentRepository {
    pool: SqlitePool,
}

impl SqliteCommentRepository {
    pub(crate) fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct CommentRow {
    id: i64,
    body: String,
    post_id: i64,
    user_id: i64,
    parent_comment_id: Option<i64>,
    created_at: DateTime<Utc>,
}

const COMMENT_COLUMNS: &str = "id, body, post_id, user_id, parent_comment_id, created_at";

#[async_trait]
impl CommentRepository for SqliteCommentRepository {
    async fn create_comment(&self, input: NewComment) -> Result<Comment, DomainError> {
        let row = sqlx::query_as::<_, CommentRow>(&format!(
            r#"
            INSERT INTO comments (body, post_id, user_id, parent_comment_id, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            RETURNING {COMMENT_COLUMNS}
            "#
        ))
        .bind(&input.body)
        .bind(input.post_id)
        .bind(input.user_id)
        .bind(input.parent_comment_id)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(map_comment_db_error)?;

        map_row_to_comment(row)
    }

    async fn get_comment(&self, id: i64) -> Result<Option<Comment>, DomainError> {
        let row = sqlx::query_as::<_, CommentRow>(&format!(
            "SELECT {COMMENT_COLUMNS} FROM comments WHERE id = ?1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_comment_db_error)?;

        row.map(map_row_to_comment).transpose()
    }

    async fn get_subtree(&self, id: i64, max_depth: usize) -> Result<Vec<Comment>, DomainError> {
        let max_depth = i64::try_from(max_depth).unwrap_or(i64::MAX);
        let rows = sqlx::query_as::<_, CommentRow>(&format!(
            r#"
            WITH RECURSIVE thread(id, depth) AS (
                SELECT id, 0 FROM comments WHERE id = ?1
                UNION ALL
                SELECT c.id, t.depth + 1
                FROM comments c
                JOIN thread t ON c.parent_comment_id = t.id
                WHERE t.depth < ?2
            )
            SELECT {COMMENT_COLUMNS}
            FROM comments
            WHERE id IN (SELECT id FROM thread)
            ORDER BY created_at ASC, id ASC
            "#
        ))
        .bind(id)
        .bind(max_depth)
        .fetch_all(&self.pool)
        .await
        .map_err(map_comment_db_error)?;

        rows.into_iter().map(map_row_to_comment).collect()
    }

    async fn list_comments(&self, post_id: Option<i64>) -> Result<Vec<Comment>, DomainError> {
        let rows = sqlx::query_as::<_, CommentRow>(&format!(
            r#"
            SELECT {COMMENT_COLUMNS}
            FROM comments
            WHERE (?1 IS NULL OR post_id = ?1)
            ORDER BY created_at ASC, id ASC
            "#
        ))
        .bind(post_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_comment_db_error)?;

        rows.into_iter().map(map_row_to_comment).collect()
    }

    async fn update_comment(&self, id: i64, body: String) -> Result<Option<Comment>, DomainError> {
        let row = sqlx::query_as::<_, CommentRow>(&format!(
            r#"
            UPDATE comments
            SET body = ?2
            WHERE id = ?1
            RETURNING {COMMENT_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(body)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_comment_db_error)?;

        row.map(map_row_to_comment).transpose()
    }

    async fn delete_comment(&self, id: i64) -> Result<bool, DomainError> {
        let result = sqlx::query(
            r#"
            WITH RECURSIVE doomed(id) AS (
                SELECT id FROM comments WHERE id = ?1
                UNION
                SELECT c.id FROM comments c JOIN doomed d ON c.parent_comment_id = d.id
            )
            DELETE FROM comments WHERE id IN (SELECT id FROM doomed)
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_comment_db_error)?;

        Ok(result.rows_affected() > 0)
    }
}

fn map_row_to_comment(row: CommentRow) -> Result<Comment, DomainError> {
    Comment::new(
        row.id,
        row.body,
        row.post_id,
        row.user_id,
        row.parent_comment_id,
        row.created_at,
    )
    .map_err(|err| DomainError::Unexpected(err.to_string()))
}

fn map_comment_db_error(err: sqlx::Error) -> DomainError {
    if violation(&err) == Some(Violation::ForeignKey) {
        return DomainError::not_found("Post or user");
    }
    DomainError::Unexpected(err.to_string())
}
