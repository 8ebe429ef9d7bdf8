pub(crate) mod comment;
pub(crate) mod error;
pub(crate) mod follow;
pub(crate) mod like;
pub(crate) mod post;
pub(crate) mod profile;
pub(crate) mod rules;
pub(crate) mod user;
