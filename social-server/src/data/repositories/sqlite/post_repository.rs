use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use super::{Violation, violation};
use crate::data::post_repository::{NewPost, PostFilter, PostRepository};
use crate::domain::error::DomainError;
use crate::domain::post::{Post, PostSort, UpdatePostRequest};

#[derive(Debug, Clone)]
pub(crate) struct SqlitePostRepository {
    pool: SqlitePool,
}

impl SqlitePostRepository {
    pub(crate) fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct PostRow {
    id: i64,
    title: String,
    body: String,
    image_url: Option<String>,
    author_id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

const POST_COLUMNS: &str = "id, title, body, image_url, author_id, created_at, updated_at";

fn order_by(sort: PostSort) -> &'static str {
    match sort {
        PostSort::Newest => "ORDER BY created_at DESC, id DESC",
        PostSort::Oldest => "ORDER BY created_at ASC, id ASC",
    }
}

#[async_trait]
impl PostRepository for SqlitePostRepository {
    async fn create_post(&self, input: NewPost) -> Result<Post, DomainError> {
        let now = Utc::now();
        let row = sqlx::query_as::<_, PostRow>(&format!(
            r#"
            INSERT INTO posts (title, body, image_url, author_id, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?5)
            RETURNING {POST_COLUMNS}
            "#
        ))
        .bind(&input.title)
        .bind(&input.body)
        .bind(&input.image_url)
        .bind(input.author_id)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(map_post_db_error)?;

        map_row_to_post(row)
    }

    async fn get_post(&self, id: i64) -> Result<Option<Post>, DomainError> {
        let row = sqlx::query_as::<_, PostRow>(&format!(
            "SELECT {POST_COLUMNS} FROM posts WHERE id = ?1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_post_db_error)?;

        row.map(map_row_to_post).transpose()
    }

    async fn update_post(
        &self,
        id: i64,
        patch: UpdatePostRequest,
    ) -> Result<Option<Post>, DomainError> {
        // пустой image_url очищает картинку, отсутствующий оставляет как есть
        let row = sqlx::query_as::<_, PostRow>(&format!(
            r#"
            UPDATE posts
            SET title = COALESCE(?2, title),
                body = COALESCE(?3, body),
                image_url = CASE
                    WHEN ?4 IS NULL THEN image_url
                    WHEN ?4 = '' THEN NULL
                    ELSE ?4
                END,
                updated_at = ?5
            WHERE id = ?1
            RETURNING {POST_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(patch.title)
        .bind(patch.body)
        .bind(patch.image_url)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_post_db_error)?;

        row.map(map_row_to_post).transpose()
    }

    async fn delete_post(&self, id: i64) -> Result<bool, DomainError> {
        let mut tx = self.pool.begin().await.map_err(map_post_db_error)?;

        sqlx::query("DELETE FROM likes WHERE post_id = ?1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(map_post_db_error)?;

        sqlx::query("DELETE FROM comments WHERE post_id = ?1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(map_post_db_error)?;

        let result = sqlx::query("DELETE FROM posts WHERE id = ?1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(map_post_db_error)?;

        tx.commit().await.map_err(map_post_db_error)?;
        Ok(result.rows_affected() > 0)
    }

    async fn list_posts(&self, filter: PostFilter) -> Result<Vec<Post>, DomainError> {
        let rows = sqlx::query_as::<_, PostRow>(&format!(
            r#"
            SELECT {POST_COLUMNS}
            FROM posts
            WHERE (?1 IS NULL OR author_id = ?1)
            {}
            "#,
            order_by(filter.sort)
        ))
        .bind(filter.author_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_post_db_error)?;

        rows.into_iter().map(map_row_to_post).collect()
    }

    async fn list_feed(&self, user_id: i64, sort: PostSort) -> Result<Vec<Post>, DomainError> {
        let rows = sqlx::query_as::<_, PostRow>(&format!(
            r#"
            SELECT {POST_COLUMNS}
            FROM posts
            WHERE author_id = ?1
               OR author_id IN (SELECT followed_id FROM follows WHERE follower_id = ?1)
            {}
            "#,
            order_by(sort)
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_post_db_error)?;

        rows.into_iter().map(map_row_to_post).collect()
    }

    async fn user_exists(&self, user_id: i64) -> Result<bool, DomainError> {
        let found: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE id = ?1")
            .bind(user_id)
            .fetch_one(&self.pool)
            .await
            .map_err(map_post_db_error)?;
        Ok(found > 0)
    }
}

fn map_row_to_post(row: PostRow) -> Result<Post, DomainError> {
    Post::new(
        row.id,
        row.title,
        row.body,
        row.image_url,
        row.author_id,
        row.created_at,
        row.updated_at,
    )
    .map_err(|err| DomainError::Unexpected(err.to_string()))
}

fn map_post_db_error(err: sqlx::Error) -> DomainError {
    if violation(&err) == Some(Violation::ForeignKey) {
        return DomainError::not_found("Author");
    }
    DomainError::Unexpected(err.to_string())
}
