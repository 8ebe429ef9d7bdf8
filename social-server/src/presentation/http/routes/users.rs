use axum::{Router, routing::get};

use crate::presentation::AppState;
use crate::presentation::http::handlers::users::{
    delete_user, get_feed, get_user, list_users, update_user,
};

pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users))
        .route("/{id}", get(get_user).patch(update_user).delete(delete_user))
        .route("/{id}/feed", get(get_feed))
}
