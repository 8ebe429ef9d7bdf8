use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::error::DomainError;
use crate::domain::profile::{CreateProfileRequest, Profile, UpdateProfileRequest};
use crate::presentation::AppState;
use crate::presentation::http::app_error::AppResult;
use crate::presentation::http::extract::{ApiJson, ApiPath};

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub(crate) struct CreateProfileDto {
    #[validate(required(message = "location is required"))]
    pub(crate) location: Option<String>,
    #[validate(required(message = "profile_image is required"))]
    pub(crate) profile_image: Option<String>,
    #[validate(required(message = "website is required"))]
    pub(crate) website: Option<String>,
    #[validate(required(message = "bio is required"))]
    pub(crate) bio: Option<String>,
    #[validate(required(message = "user_id is required"))]
    pub(crate) user_id: Option<i64>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub(crate) struct UpdateProfileDto {
    pub(crate) location: Option<String>,
    pub(crate) profile_image: Option<String>,
    pub(crate) website: Option<String>,
    pub(crate) bio: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct ProfileDto {
    pub(crate) id: i64,
    pub(crate) location: String,
    pub(crate) profile_image: String,
    pub(crate) website: String,
    pub(crate) bio: String,
    pub(crate) user_id: i64,
}

impl From<Profile> for ProfileDto {
    fn from(profile: Profile) -> Self {
        Self {
            id: profile.id,
            location: profile.location,
            profile_image: profile.profile_image,
            website: profile.website,
            bio: profile.bio,
            user_id: profile.user_id,
        }
    }
}

#[utoipa::path(
    get,
    path = "/profiles",
    tag = "profiles",
    responses(
        (status = 200, description = "Profiles listed", body = [ProfileDto]),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn list_profiles(
    State(state): State<AppState>,
) -> AppResult<(StatusCode, Json<Vec<ProfileDto>>)> {
    let profiles = state.profile_service.list_profiles().await?;
    Ok((
        StatusCode::OK,
        Json(profiles.into_iter().map(ProfileDto::from).collect()),
    ))
}

#[utoipa::path(
    get,
    path = "/profiles/{user_id}",
    tag = "profiles",
    params(
        ("user_id" = i64, Path, description = "Owner user id")
    ),
    responses(
        (status = 200, description = "Profile of the user, or an empty object when there is none", body = ProfileDto),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn get_profile(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<i64>,
) -> AppResult<(StatusCode, Json<Value>)> {
    let body = match state.profile_service.get_profile(user_id).await? {
        Some(profile) => serde_json::to_value(ProfileDto::from(profile))
            .map_err(|err| DomainError::Unexpected(err.to_string()))?,
        None => json!({}),
    };
    Ok((StatusCode::OK, Json(body)))
}

#[utoipa::path(
    post,
    path = "/profiles",
    tag = "profiles",
    request_body = CreateProfileDto,
    responses(
        (status = 201, description = "Profile created", body = ProfileDto),
        (status = 400, description = "Validation error"),
        (status = 404, description = "User not found"),
        (status = 409, description = "User already has a profile"),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn create_profile(
    State(state): State<AppState>,
    ApiJson(dto): ApiJson<CreateProfileDto>,
) -> AppResult<(StatusCode, Json<ProfileDto>)> {
    dto.validate()?;
    let req = CreateProfileRequest {
        location: dto.location.unwrap_or_default(),
        profile_image: dto.profile_image.unwrap_or_default(),
        website: dto.website.unwrap_or_default(),
        bio: dto.bio.unwrap_or_default(),
        user_id: dto.user_id.unwrap_or_default(),
    };

    let profile = state.profile_service.create_profile(req).await?;
    Ok((StatusCode::CREATED, Json(ProfileDto::from(profile))))
}

#[utoipa::path(
    patch,
    path = "/profiles/{user_id}",
    tag = "profiles",
    params(
        ("user_id" = i64, Path, description = "Owner user id")
    ),
    request_body = UpdateProfileDto,
    responses(
        (status = 200, description = "Profile updated", body = ProfileDto),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Profile not found"),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn update_profile(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<i64>,
    ApiJson(dto): ApiJson<UpdateProfileDto>,
) -> AppResult<(StatusCode, Json<ProfileDto>)> {
    let req = UpdateProfileRequest {
        location: dto.location,
        profile_image: dto.profile_image,
        website: dto.website,
        bio: dto.bio,
    };

    let profile = state.profile_service.update_profile(user_id, req).await?;
    Ok((StatusCode::OK, Json(ProfileDto::from(profile))))
}
