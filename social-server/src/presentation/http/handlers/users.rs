use axum::{Json, extract::State, http::StatusCode};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::MessageDto;
use super::posts::{PostDto, SortDto};
use crate::domain::post::PostSort;
use crate::domain::user::{UpdateUserRequest, User};
use crate::presentation::AppState;
use crate::presentation::http::app_error::AppResult;
use crate::presentation::http::extract::{ApiJson, ApiPath, ApiQuery};

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct UserDto {
    pub(crate) id: i64,
    pub(crate) username: String,
    pub(crate) email: String,
    pub(crate) first_name: String,
    pub(crate) last_name: String,
    pub(crate) created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub(crate) struct UpdateUserDto {
    pub(crate) first_name: Option<String>,
    pub(crate) last_name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct FeedQuery {
    pub(crate) sort: Option<SortDto>,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            created_at: user.created_at,
        }
    }
}

#[utoipa::path(
    get,
    path = "/users",
    tag = "users",
    responses(
        (status = 200, description = "Users listed", body = [UserDto]),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn list_users(
    State(state): State<AppState>,
) -> AppResult<(StatusCode, Json<Vec<UserDto>>)> {
    let users = state.user_service.list_users().await?;
    Ok((
        StatusCode::OK,
        Json(users.into_iter().map(UserDto::from).collect()),
    ))
}

#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "users",
    params(
        ("id" = i64, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "User found", body = UserDto),
        (status = 404, description = "User not found"),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn get_user(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> AppResult<(StatusCode, Json<UserDto>)> {
    let user = state.user_service.get_user(id).await?;
    Ok((StatusCode::OK, Json(UserDto::from(user))))
}

#[utoipa::path(
    patch,
    path = "/users/{id}",
    tag = "users",
    params(
        ("id" = i64, Path, description = "User id")
    ),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "User updated", body = UserDto),
        (status = 404, description = "User not found"),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn update_user(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(dto): ApiJson<UpdateUserDto>,
) -> AppResult<(StatusCode, Json<UserDto>)> {
    let req = UpdateUserRequest {
        first_name: dto.first_name,
        last_name: dto.last_name,
    };

    let user = state.user_service.update_user(id, req).await?;
    Ok((StatusCode::OK, Json(UserDto::from(user))))
}

#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "users",
    params(
        ("id" = i64, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "User and everything they own deleted", body = MessageDto),
        (status = 404, description = "User not found"),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn delete_user(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> AppResult<(StatusCode, Json<MessageDto>)> {
    state.user_service.delete_user(id).await?;
    Ok((StatusCode::OK, Json(MessageDto::new("User deleted"))))
}

#[utoipa::path(
    get,
    path = "/users/{id}/feed",
    tag = "users",
    params(
        ("id" = i64, Path, description = "User id"),
        ("sort" = Option<SortDto>, Query, description = "newest (default) or oldest")
    ),
    responses(
        (status = 200, description = "Posts of the user and everyone they follow", body = [PostDto]),
        (status = 404, description = "User not found"),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn get_feed(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiQuery(query): ApiQuery<FeedQuery>,
) -> AppResult<(StatusCode, Json<Vec<PostDto>>)> {
    let sort = query.sort.map(PostSort::from).unwrap_or_default();
    let posts = state.post_service.feed(id, sort).await?;
    Ok((
        StatusCode::OK,
        Json(posts.into_iter().map(PostDto::from).collect()),
    ))
}
