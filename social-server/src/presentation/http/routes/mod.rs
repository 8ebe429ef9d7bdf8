use axum::Router;

use crate::presentation::AppState;

pub(crate) mod auth;
pub(crate) mod comments;
pub(crate) mod follows;
pub(crate) mod likes;
pub(crate) mod posts;
pub(crate) mod profiles;
pub(crate) mod users;

pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .merge(auth::router())
        .nest("/users", users::router())
        .nest("/posts", posts::router())
        .nest("/comments", comments::router())
        .nest("/profiles", profiles::router())
        .nest("/likes", likes::router())
        .nest("/follows", follows::router())
}
