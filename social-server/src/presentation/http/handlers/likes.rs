use axum::{Json, extract::State, http::StatusCode};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::MessageDto;
use crate::data::like_repository::LikeFilter;
use crate::domain::like::{CreateLikeRequest, Like};
use crate::presentation::AppState;
use crate::presentation::http::app_error::AppResult;
use crate::presentation::http::extract::{ApiJson, ApiPath, ApiQuery};

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub(crate) struct CreateLikeDto {
    #[validate(required(message = "user_id is required"))]
    pub(crate) user_id: Option<i64>,
    #[validate(required(message = "post_id is required"))]
    pub(crate) post_id: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ListLikesQuery {
    pub(crate) user_id: Option<i64>,
    pub(crate) post_id: Option<i64>,
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct LikeDto {
    pub(crate) id: i64,
    pub(crate) user_id: i64,
    pub(crate) post_id: i64,
    pub(crate) created_at: DateTime<Utc>,
}

impl From<Like> for LikeDto {
    fn from(like: Like) -> Self {
        Self {
            id: like.id,
            user_id: like.user_id,
            post_id: like.post_id,
            created_at: like.created_at,
        }
    }
}

#[utoipa::path(
    get,
    path = "/likes",
    tag = "likes",
    params(
        ("user_id" = Option<i64>, Query, description = "Likes given by this user"),
        ("post_id" = Option<i64>, Query, description = "Likes on this post")
    ),
    responses(
        (status = 200, description = "Likes listed", body = [LikeDto]),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn list_likes(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ListLikesQuery>,
) -> AppResult<(StatusCode, Json<Vec<LikeDto>>)> {
    let filter = LikeFilter {
        user_id: query.user_id,
        post_id: query.post_id,
    };

    let likes = state.like_service.list_likes(filter).await?;
    Ok((
        StatusCode::OK,
        Json(likes.into_iter().map(LikeDto::from).collect()),
    ))
}

#[utoipa::path(
    post,
    path = "/likes",
    tag = "likes",
    request_body = CreateLikeDto,
    responses(
        (status = 201, description = "Post liked", body = LikeDto),
        (status = 400, description = "Validation error"),
        (status = 404, description = "User or post not found"),
        (status = 409, description = "Post already liked by this user"),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn create_like(
    State(state): State<AppState>,
    ApiJson(dto): ApiJson<CreateLikeDto>,
) -> AppResult<(StatusCode, Json<LikeDto>)> {
    dto.validate()?;
    let req = CreateLikeRequest {
        user_id: dto.user_id.unwrap_or_default(),
        post_id: dto.post_id.unwrap_or_default(),
    };

    let like = state.like_service.like_post(req).await?;
    Ok((StatusCode::CREATED, Json(LikeDto::from(like))))
}

#[utoipa::path(
    delete,
    path = "/likes/{id}",
    tag = "likes",
    params(
        ("id" = i64, Path, description = "Like id")
    ),
    responses(
        (status = 200, description = "Like removed", body = MessageDto),
        (status = 404, description = "Like not found"),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn delete_like(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> AppResult<(StatusCode, Json<MessageDto>)> {
    state.like_service.remove_like(id).await?;
    Ok((StatusCode::OK, Json(MessageDto::new("Like removed"))))
}
