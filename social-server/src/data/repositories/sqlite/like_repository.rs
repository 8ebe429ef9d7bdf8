use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use super::{Violation, violation};
use crate::data::like_repository::{LikeFilter, LikeRepository};
use crate::domain::error::DomainError;
use crate::domain::like::{CreateLikeRequest, Like};

#[derive(Debug, Clone)]
pub(crate) struct SqliteLikeRepository {
    pool: SqlitePool,
}

impl SqliteLikeRepository {
    pub(crate) fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct LikeRow {
    id: i64,
    user_id: i64,
    post_id: i64,
    created_at: DateTime<Utc>,
}

impl From<LikeRow> for Like {
    fn from(row: LikeRow) -> Self {
        Self {
            id: row.id,
            user_id: row.user_id,
            post_id: row.post_id,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl LikeRepository for SqliteLikeRepository {
    async fn create_like(&self, input: CreateLikeRequest) -> Result<Like, DomainError> {
        let row = sqlx::query_as::<_, LikeRow>(
            r#"
            INSERT INTO likes (user_id, post_id, created_at)
            VALUES (?1, ?2, ?3)
            RETURNING id, user_id, post_id, created_at
            "#,
        )
        .bind(input.user_id)
        .bind(input.post_id)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(map_like_db_error)?;

        Ok(row.into())
    }

    async fn list_likes(&self, filter: LikeFilter) -> Result<Vec<Like>, DomainError> {
        let rows = sqlx::query_as::<_, LikeRow>(
            r#"
            SELECT id, user_id, post_id, created_at
            FROM likes
            WHERE (?1 IS NULL OR user_id = ?1)
              AND (?2 IS NULL OR post_id = ?2)
            ORDER BY id
            "#,
        )
        .bind(filter.user_id)
        .bind(filter.post_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_like_db_error)?;

        Ok(rows.into_iter().map(Like::from).collect())
    }

    async fn delete_like(&self, id: i64) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM likes WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_like_db_error)?;

        Ok(result.rows_affected() > 0)
    }
}

fn map_like_db_error(err: sqlx::Error) -> DomainError {
    match violation(&err) {
        Some(Violation::Unique(_)) => {
            DomainError::AlreadyExists("Post already liked by this user".to_string())
        }
        Some(Violation::ForeignKey) => DomainError::not_found("User or post"),
        _ => DomainError::Unexpected(err.to_string()),
    }
}
