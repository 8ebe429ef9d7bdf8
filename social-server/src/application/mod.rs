pub(crate) mod auth_service;
pub(crate) mod comment_service;
pub(crate) mod follow_service;
pub(crate) mod like_service;
pub(crate) mod post_service;
pub(crate) mod profile_service;
pub(crate) mod user_service;
