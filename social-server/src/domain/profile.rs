use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::rules::{PROFILE_BIO, PROFILE_LOCATION, validate_positive_i64};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct Profile {
    pub(crate) id: i64,
    pub(crate) location: String,
    pub(crate) profile_image: String,
    pub(crate) website: String,
    pub(crate) bio: String,
    pub(crate) user_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct CreateProfileRequest {
    pub(crate) location: String,
    pub(crate) profile_image: String,
    pub(crate) website: String,
    pub(crate) bio: String,
    pub(crate) user_id: i64,
}

impl CreateProfileRequest {
    pub(crate) fn validate(self) -> Result<Self, DomainError> {
        validate_positive_i64("user_id", self.user_id)?;
        Ok(Self {
            location: PROFILE_LOCATION.normalize(&self.location)?,
            profile_image: self.profile_image.trim().to_string(),
            website: self.website.trim().to_string(),
            bio: PROFILE_BIO.normalize(&self.bio)?,
            user_id: self.user_id,
        })
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub(crate) struct UpdateProfileRequest {
    pub(crate) location: Option<String>,
    pub(crate) profile_image: Option<String>,
    pub(crate) website: Option<String>,
    pub(crate) bio: Option<String>,
}

impl UpdateProfileRequest {
    pub(crate) fn validate(self) -> Result<Self, DomainError> {
        Ok(Self {
            location: self
                .location
                .map(|location| PROFILE_LOCATION.normalize(&location))
                .transpose()?,
            profile_image: self.profile_image.map(|value| value.trim().to_string()),
            website: self.website.map(|value| value.trim().to_string()),
            bio: self
                .bio
                .map(|bio| PROFILE_BIO.normalize(&bio))
                .transpose()?,
        })
    }
}

impl Profile {
    pub(crate) fn new(
        id: i64,
        location: impl Into<String>,
        profile_image: impl Into<String>,
        website: impl Into<String>,
        bio: impl Into<String>,
        user_id: i64,
    ) -> Result<Self, DomainError> {
        validate_positive_i64("id", id)?;
        validate_positive_i64("user_id", user_id)?;
        Ok(Self {
            id,
            location: PROFILE_LOCATION.normalize(&location.into())?,
            profile_image: profile_image.into(),
            website: website.into(),
            bio: PROFILE_BIO.normalize(&bio.into())?,
            user_id,
        })
    }
}
