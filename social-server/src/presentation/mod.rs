use std::sync::Arc;

use sqlx::SqlitePool;

use crate::application::auth_service::AuthService;
use crate::application::comment_service::CommentService;
use crate::application::follow_service::FollowService;
use crate::application::like_service::LikeService;
use crate::application::post_service::PostService;
use crate::application::profile_service::ProfileService;
use crate::application::user_service::UserService;
use crate::data::repositories::sqlite::comment_repository::SqliteCommentRepository;
use crate::data::repositories::sqlite::follow_repository::SqliteFollowRepository;
use crate::data::repositories::sqlite::like_repository::SqliteLikeRepository;
use crate::data::repositories::sqlite::post_repository::SqlitePostRepository;
use crate::data::repositories::sqlite::profile_repository::SqliteProfileRepository;
use crate::data::repositories::sqlite::user_repository::SqliteUserRepository;
use crate::infrastructure::credentials::{CredentialError, CredentialService};

pub(crate) mod http;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) pool: SqlitePool,
    pub(crate) auth_service: Arc<AuthService<SqliteUserRepository>>,
    pub(crate) user_service: Arc<UserService<SqliteUserRepository>>,
    pub(crate) post_service: Arc<PostService<SqlitePostRepository>>,
    pub(crate) comment_service: Arc<CommentService<SqliteCommentRepository>>,
    pub(crate) profile_service: Arc<ProfileService<SqliteProfileRepository>>,
    pub(crate) like_service: Arc<LikeService<SqliteLikeRepository>>,
    pub(crate) follow_service: Arc<FollowService<SqliteFollowRepository>>,
}

impl AppState {
    pub(crate) fn new(
        pool: SqlitePool,
        comment_thread_max_depth: usize,
    ) -> Result<Self, CredentialError> {
        let credentials = CredentialService::new()?;

        Ok(Self {
            auth_service: Arc::new(AuthService::new(
                SqliteUserRepository::new(pool.clone()),
                credentials,
            )),
            user_service: Arc::new(UserService::new(SqliteUserRepository::new(pool.clone()))),
            post_service: Arc::new(PostService::new(SqlitePostRepository::new(pool.clone()))),
            comment_service: Arc::new(CommentService::new(
                SqliteCommentRepository::new(pool.clone()),
                comment_thread_max_depth,
            )),
            profile_service: Arc::new(ProfileService::new(SqliteProfileRepository::new(
                pool.clone(),
            ))),
            like_service: Arc::new(LikeService::new(SqliteLikeRepository::new(pool.clone()))),
            follow_service: Arc::new(FollowService::new(SqliteFollowRepository::new(
                pool.clone(),
            ))),
            pool,
        })
    }
}
