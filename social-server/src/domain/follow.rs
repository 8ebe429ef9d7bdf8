use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::rules::validate_positive_i64;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct Follow {
    pub(crate) id: i64,
    pub(crate) follower_id: i64,
    pub(crate) followed_id: i64,
    pub(crate) created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub(crate) struct CreateFollowRequest {
    pub(crate) follower_id: i64,
    pub(crate) followed_id: i64,
}

impl CreateFollowRequest {
    pub(crate) fn validate(self) -> Result<Self, DomainError> {
        validate_positive_i64("follower_id", self.follower_id)?;
        validate_positive_i64("followed_id", self.followed_id)?;
        if self.follower_id == self.followed_id {
            return Err(DomainError::validation(
                "followed_id",
                "User cannot follow themselves.",
            ));
        }
        Ok(self)
    }
}
