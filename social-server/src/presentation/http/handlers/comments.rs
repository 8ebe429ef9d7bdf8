use axum::{Json, extract::State, http::StatusCode};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::MessageDto;
use crate::domain::comment::{Comment, CommentThread, CreateCommentRequest, UpdateCommentRequest};
use crate::presentation::AppState;
use crate::presentation::http::app_error::AppResult;
use crate::presentation::http::extract::{ApiJson, ApiPath, ApiQuery};

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub(crate) struct CreateCommentDto {
    #[validate(required(message = "body is required"))]
    pub(crate) body: Option<String>,
    #[validate(required(message = "post_id is required"))]
    pub(crate) post_id: Option<i64>,
    #[validate(required(message = "user_id is required"))]
    pub(crate) user_id: Option<i64>,
    pub(crate) parent_comment_id: Option<i64>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub(crate) struct UpdateCommentDto {
    pub(crate) body: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ListCommentsQuery {
    pub(crate) post_id: Option<i64>,
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct CommentDto {
    pub(crate) id: i64,
    pub(crate) body: String,
    pub(crate) post_id: i64,
    pub(crate) user_id: i64,
    pub(crate) parent_comment_id: Option<i64>,
    pub(crate) created_at: DateTime<Utc>,
    /// Ответы, от старых к новым.
    #[schema(value_type = Vec<Object>)]
    pub(crate) replies: Vec<CommentDto>,
}

impl From<Comment> for CommentDto {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id,
            body: comment.body,
            post_id: comment.post_id,
            user_id: comment.user_id,
            parent_comment_id: comment.parent_comment_id,
            created_at: comment.created_at,
            replies: Vec::new(),
        }
    }
}

impl From<CommentThread> for CommentDto {
    fn from(thread: CommentThread) -> Self {
        Self {
            replies: thread.replies.into_iter().map(CommentDto::from).collect(),
            ..CommentDto::from(thread.comment)
        }
    }
}

#[utoipa::path(
    get,
    path = "/comments",
    tag = "comments",
    params(
        ("post_id" = Option<i64>, Query, description = "Only comments of this post")
    ),
    responses(
        (status = 200, description = "Comments with nested replies", body = [CommentDto]),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn list_comments(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ListCommentsQuery>,
) -> AppResult<(StatusCode, Json<Vec<CommentDto>>)> {
    let threads = state.comment_service.list_comments(query.post_id).await?;
    Ok((
        StatusCode::OK,
        Json(threads.into_iter().map(CommentDto::from).collect()),
    ))
}

#[utoipa::path(
    get,
    path = "/comments/{id}",
    tag = "comments",
    params(
        ("id" = i64, Path, description = "Comment id")
    ),
    responses(
        (status = 200, description = "Comment with nested replies", body = CommentDto),
        (status = 404, description = "Comment not found"),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn get_comment(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> AppResult<(StatusCode, Json<CommentDto>)> {
    let thread = state.comment_service.get_comment(id).await?;
    Ok((StatusCode::OK, Json(CommentDto::from(thread))))
}

#[utoipa::path(
    post,
    path = "/comments",
    tag = "comments",
    request_body = CreateCommentDto,
    responses(
        (status = 201, description = "Comment created", body = CommentDto),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Post, user or parent comment not found"),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn create_comment(
    State(state): State<AppState>,
    ApiJson(dto): ApiJson<CreateCommentDto>,
) -> AppResult<(StatusCode, Json<CommentDto>)> {
    dto.validate()?;
    let req = CreateCommentRequest {
        body: dto.body.unwrap_or_default(),
        post_id: dto.post_id.unwrap_or_default(),
        user_id: dto.user_id.unwrap_or_default(),
        parent_comment_id: dto.parent_comment_id,
    };

    let comment = state.comment_service.create_comment(req).await?;
    Ok((StatusCode::CREATED, Json(CommentDto::from(comment))))
}

#[utoipa::path(
    patch,
    path = "/comments/{id}",
    tag = "comments",
    params(
        ("id" = i64, Path, description = "Comment id")
    ),
    request_body = UpdateCommentDto,
    responses(
        (status = 200, description = "Comment updated", body = CommentDto),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Comment not found"),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn update_comment(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(dto): ApiJson<UpdateCommentDto>,
) -> AppResult<(StatusCode, Json<CommentDto>)> {
    let req = UpdateCommentRequest { body: dto.body };

    let comment = state.comment_service.update_comment(id, req).await?;
    Ok((StatusCode::OK, Json(CommentDto::from(comment))))
}

#[utoipa::path(
    delete,
    path = "/comments/{id}",
    tag = "comments",
    params(
        ("id" = i64, Path, description = "Comment id")
    ),
    responses(
        (status = 200, description = "Comment and all replies deleted", body = MessageDto),
        (status = 404, description = "Comment not found"),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn delete_comment(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> AppResult<(StatusCode, Json<MessageDto>)> {
    state.comment_service.delete_comment(id).await?;
    Ok((StatusCode::OK, Json(MessageDto::new("Comment deleted"))))
}
