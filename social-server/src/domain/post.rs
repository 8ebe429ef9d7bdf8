use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::rules::{BODY, POST_TITLE, normalize_optional, validate_positive_i64};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct Post {
    pub(crate) id: i64,
    pub(crate) title: String,
    pub(crate) body: String,
    pub(crate) image_url: Option<String>,
    pub(crate) author_id: i64,
    pub(crate) created_at: DateTime<Utc>,
    pub(crate) updated_at: DateTime<Utc>,
}

/// Порядок выдачи постов по времени создания.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum PostSort {
    #[default]
    Newest,
    Oldest,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct CreatePostRequest {
    pub(crate) title: String,
    pub(crate) body: String,
    pub(crate) author_id: i64,
    pub(crate) image_url: Option<String>,
}

impl CreatePostRequest {
    pub(crate) fn validate(self) -> Result<Self, DomainError> {
        validate_positive_i64("author_id", self.author_id)?;
        Ok(Self {
            title: POST_TITLE.normalize(&self.title)?,
            body: BODY.normalize(&self.body)?,
            author_id: self.author_id,
            image_url: normalize_optional(self.image_url),
        })
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub(crate) struct UpdatePostRequest {
    pub(crate) title: Option<String>,
    pub(crate) body: Option<String>,
    pub(crate) image_url: Option<String>,
}

impl UpdatePostRequest {
    pub(crate) fn validate(self) -> Result<Self, DomainError> {
        Ok(Self {
            title: self
                .title
                .map(|title| POST_TITLE.normalize(&title))
                .transpose()?,
            body: self.body.map(|body| BODY.normalize(&body)).transpose()?,
            image_url: self.image_url.map(|url| url.trim().to_string()),
        })
    }
}

impl Post {
    pub(crate) fn new(
        id: i64,
        title: impl Into<String>,
        body: impl Into<String>,
        image_url: Option<String>,
        author_id: i64,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        validate_positive_i64("id", id)?;
        validate_positive_i64("author_id", author_id)?;
        let title = POST_TITLE.normalize(&title.into())?;
        let body = BODY.normalize(&body.into())?;

        if updated_at < created_at {
            return Err(DomainError::validation("updated_at", "must be >= created_at"));
        }

        Ok(Self {
            id,
            title,
            body,
            image_url: normalize_optional(image_url),
            author_id,
            created_at,
            updated_at,
        })
    }
}
