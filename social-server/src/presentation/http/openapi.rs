use utoipa::OpenApi;

use crate::presentation::http::handlers::MessageDto;
use crate::presentation::http::handlers::auth::{AuthResponseDto, LoginDto, SignupDto};
use crate::presentation::http::handlers::comments::{
    CommentDto, CreateCommentDto, UpdateCommentDto,
};
use crate::presentation::http::handlers::follows::{CreateFollowDto, FollowDto};
use crate::presentation::http::handlers::likes::{CreateLikeDto, LikeDto};
use crate::presentation::http::handlers::posts::{CreatePostDto, PostDto, SortDto, UpdatePostDto};
use crate::presentation::http::handlers::profiles::{
    CreateProfileDto, ProfileDto, UpdateProfileDto,
};
use crate::presentation::http::handlers::users::{UpdateUserDto, UserDto};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::handlers::auth::signup,
        crate::presentation::http::handlers::auth::login,
        crate::presentation::http::handlers::users::list_users,
        crate::presentation::http::handlers::users::get_user,
        crate::presentation::http::handlers::users::update_user,
        crate::presentation::http::handlers::users::delete_user,
        crate::presentation::http::handlers::users::get_feed,
        crate::presentation::http::handlers::posts::list_posts,
        crate::presentation::http::handlers::posts::get_post,
        crate::presentation::http::handlers::posts::create_post,
        crate::presentation::http::handlers::posts::update_post,
        crate::presentation::http::handlers::posts::delete_post,
        crate::presentation::http::handlers::comments::list_comments,
        crate::presentation::http::handlers::comments::get_comment,
        crate::presentation::http::handlers::comments::create_comment,
        crate::presentation::http::handlers::comments::update_comment,
        crate::presentation::http::handlers::comments::delete_comment,
        crate::presentation::http::handlers::profiles::list_profiles,
        crate::presentation::http::handlers::profiles::get_profile,
        crate::presentation::http::handlers::profiles::create_profile,
        crate::presentation::http::handlers::profiles::update_profile,
        crate::presentation::http::handlers::likes::list_likes,
        crate::presentation::http::handlers::likes::create_like,
        crate::presentation::http::handlers::likes::delete_like,
        crate::presentation::http::handlers::follows::list_follows,
        crate::presentation::http::handlers::follows::create_follow,
        crate::presentation::http::handlers::follows::delete_follow
    ),
    components(
        schemas(
            MessageDto,
            SignupDto,
            LoginDto,
            AuthResponseDto,
            UserDto,
            UpdateUserDto,
            SortDto,
            CreatePostDto,
            UpdatePostDto,
            PostDto,
            CreateCommentDto,
            UpdateCommentDto,
            CommentDto,
            CreateProfileDto,
            UpdateProfileDto,
            ProfileDto,
            CreateLikeDto,
            LikeDto,
            CreateFollowDto,
            FollowDto
        )
    ),
    tags(
        (name = "auth", description = "Signup and login"),
        (name = "users", description = "Users and their feeds"),
        (name = "posts", description = "Post endpoints"),
        (name = "comments", description = "Threaded comments"),
        (name = "profiles", description = "User profiles"),
        (name = "likes", description = "Post likes"),
        (name = "follows", description = "Follow relations")
    )
)]
pub(crate) struct ApiDoc;

#[cfg(test)]
mod tests {
    use utoipa::OpenApi;

    use super::ApiDoc;

    #[test]
    fn every_resource_is_documented() {
        let doc = ApiDoc::openapi();
        for path in [
            "/signup",
            "/login",
            "/users/{id}/feed",
            "/posts/{id}",
            "/comments/{id}",
            "/profiles/{user_id}",
            "/likes/{id}",
            "/follows/{id}",
        ] {
            assert!(doc.paths.paths.contains_key(path), "{path} is missing");
        }
    }
}
