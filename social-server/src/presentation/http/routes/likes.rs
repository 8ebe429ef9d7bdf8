use axum::{
    Router,
    routing::{delete, get},
};

use crate::presentation::AppState;
use crate::presentation::http::handlers::likes::{create_like, delete_like, list_likes};

pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_likes).post(create_like))
        .route("/{id}", delete(delete_like))
}
