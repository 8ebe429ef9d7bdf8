use axum::{Router, routing::get};

use crate::presentation::AppState;
use crate::presentation::http::handlers::profiles::{
    create_profile, get_profile, list_profiles, update_profile,
};

pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_profiles).post(create_profile))
        .route("/{user_id}", get(get_profile).patch(update_profile))
}
