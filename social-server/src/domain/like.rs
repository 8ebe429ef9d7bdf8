use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::rules::validate_positive_i64;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct Like {
    pub(crate) id: i64,
    pub(crate) user_id: i64,
    pub(crate) post_id: i64,
    pub(crate) created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub(crate) struct CreateLikeRequest {
    pub(crate) user_id: i64,
    pub(crate) post_id: i64,
}

impl CreateLikeRequest {
    pub(crate) fn validate(self) -> Result<Self, DomainError> {
        validate_positive_i64("user_id", self.user_id)?;
        validate_positive_i64("post_id", self.post_id)?;
        Ok(self)
    }
}
