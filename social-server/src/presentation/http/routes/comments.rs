use axum::{Router, routing::get};

use crate::presentation::AppState;
use crate::presentation::http::handlers::comments::{
    create_comment, delete_comment, get_comment, list_comments, update_comment,
};

pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_comments).post(create_comment))
        .route(
            "/{id}",
            get(get_comment).patch(update_comment).delete(delete_comment),
        )
}
