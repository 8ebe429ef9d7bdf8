use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub(crate) mod auth;
pub(crate) mod comments;
pub(crate) mod follows;
pub(crate) mod likes;
pub(crate) mod posts;
pub(crate) mod profiles;
pub(crate) mod users;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct MessageDto {
    pub(crate) message: String,
}

impl MessageDto {
    pub(crate) fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}
