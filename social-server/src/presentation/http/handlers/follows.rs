use axum::{Json, extract::State, http::StatusCode};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::MessageDto;
use crate::data::follow_repository::FollowFilter;
use crate::domain::follow::{CreateFollowRequest, Follow};
use crate::presentation::AppState;
use crate::presentation::http::app_error::AppResult;
use crate::presentation::http::extract::{ApiJson, ApiPath, ApiQuery};

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub(crate) struct CreateFollowDto {
    #[validate(required(message = "follower_id is required"))]
    pub(crate) follower_id: Option<i64>,
    #[validate(required(message = "followed_id is required"))]
    pub(crate) followed_id: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ListFollowsQuery {
    pub(crate) follower_id: Option<i64>,
    pub(crate) followed_id: Option<i64>,
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct FollowDto {
    pub(crate) id: i64,
    pub(crate) follower_id: i64,
    pub(crate) followed_id: i64,
    pub(crate) created_at: DateTime<Utc>,
}

impl From<Follow> for FollowDto {
    fn from(follow: Follow) -> Self {
        Self {
            id: follow.id,
            follower_id: follow.follower_id,
            followed_id: follow.followed_id,
            created_at: follow.created_at,
        }
    }
}

#[utoipa::path(
    get,
    path = "/follows",
    tag = "follows",
    params(
        ("follower_id" = Option<i64>, Query, description = "Who this user follows"),
        ("followed_id" = Option<i64>, Query, description = "Who follows this user")
    ),
    responses(
        (status = 200, description = "Follows listed", body = [FollowDto]),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn list_follows(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ListFollowsQuery>,
) -> AppResult<(StatusCode, Json<Vec<FollowDto>>)> {
    let filter = FollowFilter {
        follower_id: query.follower_id,
        followed_id: query.followed_id,
    };

    let follows = state.follow_service.list_follows(filter).await?;
    Ok((
        StatusCode::OK,
        Json(follows.into_iter().map(FollowDto::from).collect()),
    ))
}

#[utoipa::path(
    post,
    path = "/follows",
    tag = "follows",
    request_body = CreateFollowDto,
    responses(
        (status = 201, description = "Now following", body = FollowDto),
        (status = 400, description = "Validation error or self follow"),
        (status = 404, description = "User not found"),
        (status = 409, description = "Already following this user"),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn create_follow(
    State(state): State<AppState>,
    ApiJson(dto): ApiJson<CreateFollowDto>,
) -> AppResult<(StatusCode, Json<FollowDto>)> {
    dto.validate()?;
    let req = CreateFollowRequest {
        follower_id: dto.follower_id.unwrap_or_default(),
        followed_id: dto.followed_id.unwrap_or_default(),
    };

    let follow = state.follow_service.follow(req).await?;
    Ok((StatusCode::CREATED, Json(FollowDto::from(follow))))
}

#[utoipa::path(
    delete,
    path = "/follows/{id}",
    tag = "follows",
    params(
        ("id" = i64, Path, description = "Follow id")
    ),
    responses(
        (status = 200, description = "Follow removed", body = MessageDto),
        (status = 404, description = "Follow not found"),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn delete_follow(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> AppResult<(StatusCode, Json<MessageDto>)> {
    state.follow_service.unfollow(id).await?;
    Ok((StatusCode::OK, Json(MessageDto::new("Follow removed"))))
}
