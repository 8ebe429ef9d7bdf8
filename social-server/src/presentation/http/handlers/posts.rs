use axum::{Json, extract::State, http::StatusCode};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::MessageDto;
use crate::data::post_repository::PostFilter;
use crate::domain::post::{CreatePostRequest, Post, PostSort, UpdatePostRequest};
use crate::presentation::AppState;
use crate::presentation::http::app_error::AppResult;
use crate::presentation::http::extract::{ApiJson, ApiPath, ApiQuery};

#[derive(Debug, Clone, Copy, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub(crate) enum SortDto {
    Newest,
    Oldest,
}

impl From<SortDto> for PostSort {
    fn from(sort: SortDto) -> Self {
        match sort {
            SortDto::Newest => PostSort::Newest,
            SortDto::Oldest => PostSort::Oldest,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub(crate) struct CreatePostDto {
    #[validate(required(message = "title is required"))]
    pub(crate) title: Option<String>,
    #[validate(required(message = "body is required"))]
    pub(crate) body: Option<String>,
    #[validate(required(message = "author_id is required"))]
    pub(crate) author_id: Option<i64>,
    pub(crate) image_url: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub(crate) struct UpdatePostDto {
    pub(crate) title: Option<String>,
    pub(crate) body: Option<String>,
    /// Пустая строка убирает картинку.
    pub(crate) image_url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ListPostsQuery {
    pub(crate) author_id: Option<i64>,
    pub(crate) sort: Option<SortDto>,
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct PostDto {
    pub(crate) id: i64,
    pub(crate) title: String,
    pub(crate) body: String,
    pub(crate) image_url: Option<String>,
    pub(crate) author_id: i64,
    pub(crate) created_at: DateTime<Utc>,
    pub(crate) updated_at: DateTime<Utc>,
}

impl From<Post> for PostDto {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            title: post.title,
            body: post.body,
            image_url: post.image_url,
            author_id: post.author_id,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

#[utoipa::path(
    get,
    path = "/posts",
    tag = "posts",
    params(
        ("author_id" = Option<i64>, Query, description = "Only posts of this author"),
        ("sort" = Option<SortDto>, Query, description = "newest (default) or oldest")
    ),
    responses(
        (status = 200, description = "Posts listed", body = [PostDto]),
        (status = 400, description = "Invalid query"),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn list_posts(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ListPostsQuery>,
) -> AppResult<(StatusCode, Json<Vec<PostDto>>)> {
    let filter = PostFilter {
        author_id: query.author_id,
        sort: query.sort.map(PostSort::from).unwrap_or_default(),
    };

    let posts = state.post_service.list_posts(filter).await?;
    Ok((
        StatusCode::OK,
        Json(posts.into_iter().map(PostDto::from).collect()),
    ))
}

#[utoipa::path(
    get,
    path = "/posts/{id}",
    tag = "posts",
    params(
        ("id" = i64, Path, description = "Post id")
    ),
    responses(
        (status = 200, description = "Post found", body = PostDto),
        (status = 404, description = "Post not found"),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn get_post(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> AppResult<(StatusCode, Json<PostDto>)> {
    let post = state.post_service.get_post(id).await?;
    Ok((StatusCode::OK, Json(PostDto::from(post))))
}

#[utoipa::path(
    post,
    path = "/posts",
    tag = "posts",
    request_body = CreatePostDto,
    responses(
        (status = 201, description = "Post created", body = PostDto),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Author not found"),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn create_post(
    State(state): State<AppState>,
    ApiJson(dto): ApiJson<CreatePostDto>,
) -> AppResult<(StatusCode, Json<PostDto>)> {
    dto.validate()?;
    let req = CreatePostRequest {
        title: dto.title.unwrap_or_default(),
        body: dto.body.unwrap_or_default(),
        author_id: dto.author_id.unwrap_or_default(),
        image_url: dto.image_url,
    };

    let post = state.post_service.create_post(req).await?;
    Ok((StatusCode::CREATED, Json(PostDto::from(post))))
}

#[utoipa::path(
    patch,
    path = "/posts/{id}",
    tag = "posts",
    params(
        ("id" = i64, Path, description = "Post id")
    ),
    request_body = UpdatePostDto,
    responses(
        (status = 200, description = "Post updated", body = PostDto),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Post not found"),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn update_post(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(dto): ApiJson<UpdatePostDto>,
) -> AppResult<(StatusCode, Json<PostDto>)> {
    let req = UpdatePostRequest {
        title: dto.title,
        body: dto.body,
        image_url: dto.image_url,
    };

    let post = state.post_service.update_post(id, req).await?;
    Ok((StatusCode::OK, Json(PostDto::from(post))))
}

#[utoipa::path(
    delete,
    path = "/posts/{id}",
    tag = "posts",
    params(
        ("id" = i64, Path, description = "Post id")
    ),
    responses(
        (status = 200, description = "Post with its comments and likes deleted", body = MessageDto),
        (status = 404, description = "Post not found"),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn delete_post(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> AppResult<(StatusCode, Json<MessageDto>)> {
    state.post_service.delete_post(id).await?;
    Ok((StatusCode::OK, Json(MessageDto::new("Post deleted"))))
}
