use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::users::UserDto;
use crate::domain::user::{LoginRequest, SignupRequest};
use crate::presentation::AppState;
use crate::presentation::http::app_error::AppResult;
use crate::presentation::http::extract::ApiJson;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub(crate) struct SignupDto {
    #[validate(required(message = "username is required"))]
    pub(crate) username: Option<String>,
    #[validate(required(message = "email is required"))]
    pub(crate) email: Option<String>,
    #[validate(required(message = "first_name is required"))]
    pub(crate) first_name: Option<String>,
    #[validate(required(message = "last_name is required"))]
    pub(crate) last_name: Option<String>,
    #[validate(required(message = "password is required"))]
    pub(crate) password: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub(crate) struct LoginDto {
    #[validate(required(message = "email is required"))]
    pub(crate) email: Option<String>,
    #[validate(required(message = "password is required"))]
    pub(crate) password: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct AuthResponseDto {
    pub(crate) message: String,
    pub(crate) user: UserDto,
}

#[utoipa::path(
    post,
    path = "/signup",
    tag = "auth",
    request_body = SignupDto,
    responses(
        (status = 201, description = "User created", body = AuthResponseDto),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Username or email already exists"),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn signup(
    State(state): State<AppState>,
    ApiJson(dto): ApiJson<SignupDto>,
) -> AppResult<(StatusCode, Json<AuthResponseDto>)> {
    dto.validate()?;

    let req = SignupRequest {
        username: dto.username.unwrap_or_default(),
        email: dto.email.unwrap_or_default(),
        first_name: dto.first_name.unwrap_or_default(),
        last_name: dto.last_name.unwrap_or_default(),
        password: dto.password.unwrap_or_default(),
    };

    let user = state.auth_service.signup(req).await?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponseDto {
            message: "User created successfully".to_string(),
            user: user.into(),
        }),
    ))
}

#[utoipa::path(
    post,
    path = "/login",
    tag = "auth",
    request_body = LoginDto,
    responses(
        (status = 200, description = "Login successful", body = AuthResponseDto),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Invalid credentials"),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn login(
    State(state): State<AppState>,
    ApiJson(dto): ApiJson<LoginDto>,
) -> AppResult<(StatusCode, Json<AuthResponseDto>)> {
    dto.validate()?;

    let req = LoginRequest {
        email: dto.email.unwrap_or_default(),
        password: dto.password.unwrap_or_default(),
    };

    let user = state.auth_service.login(req).await?;

    Ok((
        StatusCode::OK,
        Json(AuthResponseDto {
            message: "Login successful".to_string(),
            user: user.into(),
        }),
    ))
}
