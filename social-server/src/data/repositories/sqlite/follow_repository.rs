use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use super::{Violation, violation};
use crate::data::follow_repository::{FollowFilter, FollowRepository};
use crate::domain::error::DomainError;
use crate::domain::follow::{CreateFollowRequest, Follow};

#[derive(Debug, Clone)]
pub(crate) struct SqliteFollowRepository {
    pool: SqlitePool,
}

impl SqliteFollowRepository {
    pub(crate) fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct FollowRow {
    id: i64,
    follower_id: i64,
    followed_id: i64,
    created_at: DateTime<Utc>,
}

impl From<FollowRow> for Follow {
    fn from(row: FollowRow) -> Self {
        Self {
            id: row.id,
            follower_id: row.follower_id,
            followed_id: row.followed_id,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl FollowRepository for SqliteFollowRepository {
    async fn create_follow(&self, input: CreateFollowRequest) -> Result<Follow, DomainError> {
        let row = sqlx::query_as::<_, FollowRow>(
            r#"
            INSERT INTO follows (follower_id, followed_id, created_at)
            VALUES (?1, ?2, ?3)
            RETURNING id, follower_id, followed_id, created_at
            "#,
        )
        .bind(input.follower_id)
        .bind(input.followed_id)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(map_follow_db_error)?;

        Ok(row.into())
    }

    async fn find_pair(
        &self,
        follower_id: i64,
        followed_id: i64,
    ) -> Result<Option<Follow>, DomainError> {
        let row = sqlx::query_as::<_, FollowRow>(
            r#"
            SELECT id, follower_id, followed_id, created_at
            FROM follows
            WHERE follower_id = ?1 AND followed_id = ?2
            "#,
        )
        .bind(follower_id)
        .bind(followed_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_follow_db_error)?;

        Ok(row.map(Follow::from))
    }

    async fn list_follows(&self, filter: FollowFilter) -> Result<Vec<Follow>, DomainError> {
        let rows = sqlx::query_as::<_, FollowRow>(
            r#"
            SELECT id, follower_id, followed_id, created_at
            FROM follows
            WHERE (?1 IS NULL OR follower_id = ?1)
              AND (?2 IS NULL OR followed_id = ?2)
            ORDER BY id
            "#,
        )
        .bind(filter.follower_id)
        .bind(filter.followed_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_follow_db_error)?;

        Ok(rows.into_iter().map(Follow::from).collect())
    }

    async fn delete_follow(&self, id: i64) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM follows WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_follow_db_error)?;

        Ok(result.rows_affected() > 0)
    }
}

fn map_follow_db_error(err: sqlx::Error) -> DomainError {
    match violation(&err) {
        Some(Violation::Unique(_)) => {
            DomainError::AlreadyExists("Already following this user.".to_string())
        }
        Some(Violation::ForeignKey) => DomainError::not_found("User"),
        Some(Violation::Check) => {
            DomainError::validation("followed_id", "User cannot follow themselves.")
        }
        None => DomainError::Unexpected(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::SqliteFollowRepository;
    use crate::data::follow_repository::{FollowFilter, FollowRepository};
    use crate::data::repositories::sqlite::test_support::{insert_user, pool};
    use crate::domain::error::DomainError;
    use crate::domain::follow::CreateFollowRequest;

    #[tokio::test]
    async fn schema_rejects_duplicate_and_self_follow() {
        let pool = pool().await;
        let repo = SqliteFollowRepository::new(pool.clone());
        let a = insert_user(&pool, "user_a").await;
        let b = insert_user(&pool, "user_b").await;

        let pair = CreateFollowRequest {
            follower_id: a,
            followed_id: b,
        };
        repo.create_follow(pair).await.expect("first follow");

        let dup = repo.create_follow(pair).await.expect_err("duplicate must fail");
        assert!(matches!(dup, DomainError::AlreadyExists(_)));

        let own = repo
            .create_follow(CreateFollowRequest {
                follower_id: a,
                followed_id: a,
            })
            .await
            .expect_err("self follow must fail at the store too");
        assert!(matches!(own, DomainError::Validation { .. }));

        let following = repo
            .list_follows(FollowFilter {
                follower_id: Some(a),
                ..FollowFilter::default()
            })
            .await
            .expect("list");
        assert_eq!(following.len(), 1);
        assert!(repo.find_pair(b, a).await.expect("find").is_none());
    }
}
