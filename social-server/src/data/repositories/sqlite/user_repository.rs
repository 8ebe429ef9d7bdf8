use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use tracing::debug;

use super::{Violation, violation};
use crate::data::user_repository::{NewUser, UserCredentials, UserRepository};
use crate::domain::error::DomainError;
use crate::domain::user::{UpdateUserRequest, User};

#[derive(Debug, Clone)]
pub(crate) struct SqliteUserRepository {
    pool: SqlitePool,
}

impl SqliteUserRepository {
    pub(crate) fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    username: String,
    email: String,
    first_name: String,
    last_name: String,
    created_at: DateTime<Utc>,
}

#[derive(sqlx::FromRow)]
struct UserCredentialsRow {
    #[sqlx(flatten)]
    user: UserRow,
    password_hash: String,
}

const USER_COLUMNS: &str = "id, username, email, first_name, last_name, created_at";

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn create_user(&self, input: NewUser) -> Result<User, DomainError> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            r#"
            INSERT INTO users (username, email, password_hash, first_name, last_name, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(&input.username)
        .bind(&input.email)
        .bind(&input.password_hash)
        .bind(&input.first_name)
        .bind(&input.last_name)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(map_user_db_error)?;

        map_row_to_user(row)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserCredentials>, DomainError> {
        let row = sqlx::query_as::<_, UserCredentialsRow>(&format!(
            r#"
            SELECT {USER_COLUMNS}, password_hash
            FROM users
            WHERE email = ?1
            "#
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_user_db_error)?;

        row.map(|r| {
            Ok(UserCredentials {
                user: map_row_to_user(r.user)?,
                password_hash: r.password_hash,
            })
        })
        .transpose()
    }

    async fn get_user(&self, id: i64) -> Result<Option<User>, DomainError> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = ?1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_user_db_error)?;

        row.map(map_row_to_user).transpose()
    }

    async fn list_users(&self) -> Result<Vec<User>, DomainError> {
        let rows = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_user_db_error)?;

        rows.into_iter().map(map_row_to_user).collect()
    }

    async fn update_user(
        &self,
        id: i64,
        patch: UpdateUserRequest,
    ) -> Result<Option<User>, DomainError> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            r#"
            UPDATE users
            SET first_name = COALESCE(?2, first_name),
                last_name = COALESCE(?3, last_name)
            WHERE id = ?1
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(patch.first_name)
        .bind(patch.last_name)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_user_db_error)?;

        row.map(map_row_to_user).transpose()
    }

    async fn delete_user(&self, id: i64) -> Result<bool, DomainError> {
        let mut tx = self.pool.begin().await.map_err(map_user_db_error)?;

        let likes = sqlx::query(
            r#"
            DELETE FROM likes
            WHERE user_id = ?1
               OR post_id IN (SELECT id FROM posts WHERE author_id = ?1)
            "#,
        )
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(map_user_db_error)?;

        // ответы других пользователей на удаляемые комментарии тоже уходят
        let comments = sqlx::query(
            r#"
            WITH RECURSIVE doomed(id) AS (
                SELECT id FROM comments
                WHERE user_id = ?1
                   OR post_id IN (SELECT id FROM posts WHERE author_id = ?1)
                UNION
                SELECT c.id FROM comments c JOIN doomed d ON c.parent_comment_id = d.id
            )
            DELETE FROM comments WHERE id IN (SELECT id FROM doomed)
            "#,
        )
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(map_user_db_error)?;

        let follows = sqlx::query("DELETE FROM follows WHERE follower_id = ?1 OR followed_id = ?1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(map_user_db_error)?;

        sqlx::query("DELETE FROM profiles WHERE user_id = ?1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(map_user_db_error)?;

        let posts = sqlx::query("DELETE FROM posts WHERE author_id = ?1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(map_user_db_error)?;

        let result = sqlx::query("DELETE FROM users WHERE id = ?1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(map_user_db_error)?;

        tx.commit().await.map_err(map_user_db_error)?;

        debug!(
            user_id = id,
            posts = posts.rows_affected(),
            comments = comments.rows_affected(),
            likes = likes.rows_affected(),
            follows = follows.rows_affected(),
            "user cascade finished"
        );
        Ok(result.rows_affected() > 0)
    }
}

fn map_row_to_user(row: UserRow) -> Result<User, DomainError> {
    User::new(
        row.id,
        row.username,
        row.email,
        row.first_name,
        row.last_name,
        row.created_at,
    )
    .map_err(|err| DomainError::Unexpected(err.to_string()))
}

fn map_user_db_error(err: sqlx::Error) -> DomainError {
    if let Some(Violation::Unique(message)) = violation(&err) {
        let message = if message.contains("users.username") {
            "Username already exists"
        } else if message.contains("users.email") {
            "Email already exists"
        } else {
            "User already exists"
        };
        return DomainError::AlreadyExists(message.to_string());
    }
    DomainError::Unexpected(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::SqliteUserRepository;
    use crate::data::repositories::sqlite::test_support::{insert_post, insert_user, pool};
    use crate::data::user_repository::{NewUser, UserRepository};
    use crate::domain::error::DomainError;
    use crate::domain::user::UpdateUserRequest;

    fn new_user(username: &str, email: &str) -> NewUser {
        NewUser {
            username: username.to_string(),
            email: email.to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            password_hash: "hash".to_string(),
        }
    }

    #[tokio::test]
    async fn duplicate_email_is_reported_as_conflict() {
        let repo = SqliteUserRepository::new(pool().await);
        repo.create_user(new_user("first", "same@example.com"))
            .await
            .expect("first insert must succeed");

        let err = repo
            .create_user(new_user("second", "same@example.com"))
            .await
            .expect_err("duplicate email must fail");
        match err {
            DomainError::AlreadyExists(message) => assert_eq!(message, "Email already exists"),
            other => panic!("expected AlreadyExists, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn duplicate_username_is_reported_as_conflict() {
        let repo = SqliteUserRepository::new(pool().await);
        repo.create_user(new_user("same", "one@example.com"))
            .await
            .expect("first insert must succeed");

        let err = repo
            .create_user(new_user("same", "two@example.com"))
            .await
            .expect_err("duplicate username must fail");
        assert!(matches!(err, DomainError::AlreadyExists(m) if m == "Username already exists"));
    }

    #[tokio::test]
    async fn update_user_keeps_absent_fields() {
        let repo = SqliteUserRepository::new(pool().await);
        let user = repo
            .create_user(new_user("patchme", "patch@example.com"))
            .await
            .expect("insert must succeed");

        let updated = repo
            .update_user(
                user.id,
                UpdateUserRequest {
                    first_name: Some("Grace".to_string()),
                    last_name: None,
                },
            )
            .await
            .expect("update must succeed")
            .expect("user must exist");

        assert_eq!(updated.first_name, "Grace");
        assert_eq!(updated.last_name, "Lovelace");
    }

    #[tokio::test]
    async fn delete_user_cascades_to_owned_rows() {
        let pool = pool().await;
        let repo = SqliteUserRepository::new(pool.clone());
        let author = insert_user(&pool, "author").await;
        let reader = insert_user(&pool, "reader").await;
        let post = insert_post(&pool, author, "Author post").await;

        sqlx::query("INSERT INTO likes (user_id, post_id) VALUES (?1, ?2)")
            .bind(reader)
            .bind(post)
            .execute(&pool)
            .await
            .expect("like insert");
        sqlx::query("INSERT INTO follows (follower_id, followed_id) VALUES (?1, ?2)")
            .bind(reader)
            .bind(author)
            .execute(&pool)
            .await
            .expect("follow insert");
        sqlx::query("INSERT INTO comments (body, post_id, user_id) VALUES ('nice post', ?1, ?2)")
            .bind(post)
            .bind(reader)
            .execute(&pool)
            .await
            .expect("comment insert");

        assert!(repo.delete_user(author).await.expect("delete must succeed"));

        for table in ["posts", "likes", "follows", "comments"] {
            let count: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
                .fetch_one(&pool)
                .await
                .expect("count must succeed");
            assert_eq!(count, 0, "{table} must be empty after cascade");
        }
        assert!(repo.get_user(reader).await.expect("get").is_some());
        assert!(!repo.delete_user(author).await.expect("second delete"));
    }
}
