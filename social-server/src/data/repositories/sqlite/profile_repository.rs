use async_trait::async_trait;
use sqlx::SqlitePool;

use super::{Violation, violation};
use crate::data::profile_repository::ProfileRepository;
use crate::domain::error::DomainError;
use crate::domain::profile::{CreateProfileRequest, Profile, UpdateProfileRequest};

#[derive(Debug, Clone)]
pub(crate) struct SqliteProfileRepository {
    pool: SqlitePool,
}

impl SqliteProfileRepository {
    pub(crate) fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct ProfileRow {
    id: i64,
    location: String,
    profile_image: String,
    website: String,
    bio: String,
    user_id: i64,
}

const PROFILE_COLUMNS: &str = "id, location, profile_image, website, bio, user_id";

#[async_trait]
impl ProfileRepository for SqliteProfileRepository {
    async fn create_profile(&self, input: CreateProfileRequest) -> Result<Profile, DomainError> {
        let row = sqlx::query_as::<_, ProfileRow>(&format!(
            r#"
            INSERT INTO profiles (location, profile_image, website, bio, user_id)
            VALUES (?1, ?2, ?3, ?4, ?5)
            RETURNING {PROFILE_COLUMNS}
            "#
        ))
        .bind(&input.location)
        .bind(&input.profile_image)
        .bind(&input.website)
        .bind(&input.bio)
        .bind(input.user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_profile_db_error)?;

        map_row_to_profile(row)
    }

    async fn find_by_user(&self, user_id: i64) -> Result<Option<Profile>, DomainError> {
        let row = sqlx::query_as::<_, ProfileRow>(&format!(
            "SELECT {PROFILE_COLUMNS} FROM profiles WHERE user_id = ?1"
        ))
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_profile_db_error)?;

        row.map(map_row_to_profile).transpose()
    }

    async fn list_profiles(&self) -> Result<Vec<Profile>, DomainError> {
        let rows = sqlx::query_as::<_, ProfileRow>(&format!(
            "SELECT {PROFILE_COLUMNS} FROM profiles ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_profile_db_error)?;

        rows.into_iter().map(map_row_to_profile).collect()
    }

    async fn update_by_user(
        &self,
        user_id: i64,
        patch: UpdateProfileRequest,
    ) -> Result<Option<Profile>, DomainError> {
        let row = sqlx::query_as::<_, ProfileRow>(&format!(
            r#"
            UPDATE profiles
            SET location = COALESCE(?2, location),
                profile_image = COALESCE(?3, profile_image),
                website = COALESCE(?4, website),
                bio = COALESCE(?5, bio)
            WHERE user_id = ?1
            RETURNING {PROFILE_COLUMNS}
            "#
        ))
        .bind(user_id)
        .bind(patch.location)
        .bind(patch.profile_image)
        .bind(patch.website)
        .bind(patch.bio)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_profile_db_error)?;

        row.map(map_row_to_profile).transpose()
    }
}

fn map_row_to_profile(row: ProfileRow) -> Result<Profile, DomainError> {
    Profile::new(
        row.id,
        row.location,
        row.profile_image,
        row.website,
        row.bio,
        row.user_id,
    )
    .map_err(|err| DomainError::Unexpected(err.to_string()))
}

fn map_profile_db_error(err: sqlx::Error) -> DomainError {
    match violation(&err) {
        Some(Violation::Unique(_)) => {
            DomainError::AlreadyExists("Profile already exists for this user".to_string())
        }
        Some(Violation::ForeignKey) => DomainError::not_found("User"),
        _ => DomainError::Unexpected(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::SqliteProfileRepository;
    use crate::data::profile_repository::ProfileRepository;
    use crate::data::repositories::sqlite::test_support::{insert_user, pool};
    use crate::domain::error::DomainError;
    use crate::domain::profile::CreateProfileRequest;

    fn profile_for(user_id: i64) -> CreateProfileRequest {
        CreateProfileRequest {
            location: "New York".to_string(),
            profile_image: "https://img.example.com/me.png".to_string(),
            website: "https://example.com".to_string(),
            bio: "Software engineer passionate about open source.".to_string(),
            user_id,
        }
    }

    #[tokio::test]
    async fn second_profile_for_same_user_is_conflict() {
        let pool = pool().await;
        let repo = SqliteProfileRepository::new(pool.clone());
        let user = insert_user(&pool, "profiled").await;

        repo.create_profile(profile_for(user))
            .await
            .expect("first profile");
        let err = repo
            .create_profile(profile_for(user))
            .await
            .expect_err("second profile must fail");
        assert!(matches!(err, DomainError::AlreadyExists(_)));
    }

    #[tokio::test]
    async fn profile_for_missing_user_is_not_found() {
        let repo = SqliteProfileRepository::new(pool().await);
        let err = repo
            .create_profile(profile_for(77))
            .await
            .expect_err("missing user must fail");
        assert!(matches!(err, DomainError::NotFound(_)));
    }
}
