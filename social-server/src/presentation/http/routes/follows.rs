use axum::{
    Router,
    routing::{delete, get},
};

use crate::presentation::AppState;
use crate::presentation::http::handlers::follows::{create_follow, delete_follow, list_follows};

pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_follows).post(create_follow))
        .route("/{id}", delete(delete_follow))
}
