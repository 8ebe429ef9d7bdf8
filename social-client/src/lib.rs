//! Клиентская библиотека для REST API `social-server`.
//!
//! `SocialClient` предоставляет по одному асинхронному методу на каждый
//! маршрут сервера: пользователи, посты, комментарии, профили, лайки и
//! подписки. Ошибки сервера (`{"error": ...}`) превращаются в
//! [`SocialClientError`] по HTTP-статусу.
#![warn(missing_docs)]

mod error;
mod http_client;
mod models;

pub use error::{SocialClientError, SocialClientResult};
pub use models::{
    AuthResponse, Comment, Follow, Like, NewProfile, Post, PostPatch, PostSort, Profile,
    ProfilePatch, User,
};

use reqwest::Method;
use serde::{Deserialize, Serialize};

use http_client::HttpClient;

#[derive(Debug, Serialize)]
struct SignupRequestDto<'a> {
    username: &'a str,
    email: &'a str,
    first_name: &'a str,
    last_name: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct LoginRequestDto<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct UpdateUserRequestDto<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    first_name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    last_name: Option<&'a str>,
}

#[derive(Debug, Serialize)]
struct CreatePostRequestDto<'a> {
    title: &'a str,
    body: &'a str,
    author_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    image_url: Option<&'a str>,
}

#[derive(Debug, Serialize)]
struct CreateCommentRequestDto<'a> {
    body: &'a str,
    post_id: i64,
    user_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    parent_comment_id: Option<i64>,
}

#[derive(Debug, Serialize)]
struct UpdateCommentRequestDto<'a> {
    body: &'a str,
}

#[derive(Debug, Serialize)]
struct LikeRequestDto {
    user_id: i64,
    post_id: i64,
}

#[derive(Debug, Serialize)]
struct FollowRequestDto {
    follower_id: i64,
    followed_id: i64,
}

#[derive(Debug, Default, Serialize)]
struct PostsQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    author_id: Option<i64>,
    sort: PostSort,
}

#[derive(Debug, Default, Serialize)]
struct CommentsQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    post_id: Option<i64>,
}

#[derive(Debug, Default, Serialize)]
struct LikesQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    user_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    post_id: Option<i64>,
}

#[derive(Debug, Default, Serialize)]
struct FollowsQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    follower_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    followed_id: Option<i64>,
}

#[derive(Debug, Serialize)]
struct FeedQuery {
    sort: PostSort,
}

/// Ответ `GET /profiles/{user_id}`: профиль или пустой объект.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ProfileLookup {
    Found(Profile),
    Missing {},
}

#[derive(Debug, Deserialize)]
struct HealthDto {
    status: String,
}

#[derive(Debug, Clone)]
/// Клиент REST API социальной сети.
pub struct SocialClient {
    http: HttpClient,
}

impl SocialClient {
    /// Создаёт клиент для сервера с базовым URL, например `http://127.0.0.1:8080`.
    pub fn new(base_url: impl Into<String>) -> SocialClientResult<Self> {
        Ok(Self {
            http: HttpClient::new(base_url)?,
        })
    }

    /// Проверяет, что сервер и база данных доступны.
    pub async fn health(&self) -> SocialClientResult<bool> {
        let dto: HealthDto = self.http.get("/healthz").await?;
        Ok(dto.status == "ok")
    }

    /// Регистрирует пользователя.
    pub async fn signup(
        &self,
        username: &str,
        email: &str,
        first_name: &str,
        last_name: &str,
        password: &str,
    ) -> SocialClientResult<AuthResponse> {
        let payload = SignupRequestDto {
            username,
            email,
            first_name,
            last_name,
            password,
        };
        self.http.send_json(Method::POST, "/signup", &payload).await
    }

    /// Проверяет email и пароль. Токен не выдаётся: ответ содержит только
    /// данные пользователя.
    pub async fn login(&self, email: &str, password: &str) -> SocialClientResult<AuthResponse> {
        let payload = LoginRequestDto { email, password };
        self.http.send_json(Method::POST, "/login", &payload).await
    }

    /// Возвращает всех пользователей.
    pub async fn list_users(&self) -> SocialClientResult<Vec<User>> {
        self.http.get("/users").await
    }

    /// Возвращает пользователя по идентификатору.
    pub async fn get_user(&self, id: i64) -> SocialClientResult<User> {
        self.http.get(&format!("/users/{id}")).await
    }

    /// Меняет имя и/или фамилию пользователя.
    pub async fn update_user(
        &self,
        id: i64,
        first_name: Option<&str>,
        last_name: Option<&str>,
    ) -> SocialClientResult<User> {
        let payload = UpdateUserRequestDto {
            first_name,
            last_name,
        };
        self.http
            .send_json(Method::PATCH, &format!("/users/{id}"), &payload)
            .await
    }

    /// Удаляет пользователя вместе с его постами, профилем, лайками,
    /// комментариями и подписками.
    pub async fn delete_user(&self, id: i64) -> SocialClientResult<()> {
        self.http.delete(&format!("/users/{id}")).await
    }

    /// Лента пользователя: его посты и посты тех, на кого он подписан.
    pub async fn feed(&self, user_id: i64, sort: PostSort) -> SocialClientResult<Vec<Post>> {
        self.http
            .get_with_query(&format!("/users/{user_id}/feed"), &FeedQuery { sort })
            .await
    }

    /// Возвращает посты, при необходимости только одного автора.
    pub async fn list_posts(
        &self,
        author_id: Option<i64>,
        sort: PostSort,
    ) -> SocialClientResult<Vec<Post>> {
        self.http
            .get_with_query("/posts", &PostsQuery { author_id, sort })
            .await
    }

    /// Возвращает пост по идентификатору.
    pub async fn get_post(&self, id: i64) -> SocialClientResult<Post> {
        self.http.get(&format!("/posts/{id}")).await
    }

    /// Создаёт пост от имени `author_id`.
    pub async fn create_post(
        &self,
        author_id: i64,
        title: &str,
        body: &str,
        image_url: Option<&str>,
    ) -> SocialClientResult<Post> {
        let payload = CreatePostRequestDto {
            title,
            body,
            author_id,
            image_url,
        };
        self.http.send_json(Method::POST, "/posts", &payload).await
    }

    /// Частично обновляет пост.
    pub async fn update_post(&self, id: i64, patch: &PostPatch) -> SocialClientResult<Post> {
        self.http
            .send_json(Method::PATCH, &format!("/posts/{id}"), patch)
            .await
    }

    /// Удаляет пост вместе с комментариями и лайками.
    pub async fn delete_post(&self, id: i64) -> SocialClientResult<()> {
        self.http.delete(&format!("/posts/{id}")).await
    }

    /// Возвращает комментарии (с вложенными ответами), при необходимости
    /// только к одному посту.
    pub async fn list_comments(&self, post_id: Option<i64>) -> SocialClientResult<Vec<Comment>> {
        self.http.get_with_query("/comments", &CommentsQuery { post_id }).await
    }

    /// Возвращает комментарий с деревом ответов.
    pub async fn get_comment(&self, id: i64) -> SocialClientResult<Comment> {
        self.http.get(&format!("/comments/{id}")).await
    }

    /// Комментирует пост; `parent_comment_id` делает комментарий ответом.
    pub async fn create_comment(
        &self,
        user_id: i64,
        post_id: i64,
        body: &str,
        parent_comment_id: Option<i64>,
    ) -> SocialClientResult<Comment> {
        let payload = CreateCommentRequestDto {
            body,
            post_id,
            user_id,
            parent_comment_id,
        };
        self.http.send_json(Method::POST, "/comments", &payload).await
    }

    /// Меняет текст комментария.
    pub async fn update_comment(&self, id: i64, body: &str) -> SocialClientResult<Comment> {
        let payload = UpdateCommentRequestDto { body };
        self.http
            .send_json(Method::PATCH, &format!("/comments/{id}"), &payload)
            .await
    }

    /// Удаляет комментарий и все ответы на него.
    pub async fn delete_comment(&self, id: i64) -> SocialClientResult<()> {
        self.http.delete(&format!("/comments/{id}")).await
    }

    /// Возвращает все профили.
    pub async fn list_profiles(&self) -> SocialClientResult<Vec<Profile>> {
        self.http.get("/profiles").await
    }

    /// Профиль пользователя; `None`, если профиль ещё не создан.
    pub async fn get_profile(&self, user_id: i64) -> SocialClientResult<Option<Profile>> {
        let lookup: ProfileLookup = self.http.get(&format!("/profiles/{user_id}")).await?;
        Ok(match lookup {
            ProfileLookup::Found(profile) => Some(profile),
            ProfileLookup::Missing {} => None,
        })
    }

    /// Создаёт профиль; у пользователя может быть только один профиль.
    pub async fn create_profile(&self, profile: &NewProfile) -> SocialClientResult<Profile> {
        self.http.send_json(Method::POST, "/profiles", profile).await
    }

    /// Частично обновляет профиль пользователя.
    pub async fn update_profile(
        &self,
        user_id: i64,
        patch: &ProfilePatch,
    ) -> SocialClientResult<Profile> {
        self.http
            .send_json(Method::PATCH, &format!("/profiles/{user_id}"), patch)
            .await
    }

    /// Возвращает лайки с фильтром по пользователю и/или посту.
    pub async fn list_likes(
        &self,
        user_id: Option<i64>,
        post_id: Option<i64>,
    ) -> SocialClientResult<Vec<Like>> {
        self.http
            .get_with_query("/likes", &LikesQuery { user_id, post_id })
            .await
    }

    /// Ставит лайк; повторный лайк даёт [`SocialClientError::Conflict`].
    pub async fn like_post(&self, user_id: i64, post_id: i64) -> SocialClientResult<Like> {
        let payload = LikeRequestDto { user_id, post_id };
        self.http.send_json(Method::POST, "/likes", &payload).await
    }

    /// Снимает лайк по его идентификатору.
    pub async fn unlike(&self, like_id: i64) -> SocialClientResult<()> {
        self.http.delete(&format!("/likes/{like_id}")).await
    }

    /// Возвращает подписки с фильтром по подписчику и/или цели.
    pub async fn list_follows(
        &self,
        follower_id: Option<i64>,
        followed_id: Option<i64>,
    ) -> SocialClientResult<Vec<Follow>> {
        self.http
            .get_with_query(
                "/follows",
                &FollowsQuery {
                    follower_id,
                    followed_id,
                },
            )
            .await
    }

    /// Подписывает `follower_id` на `followed_id`.
    pub async fn follow(&self, follower_id: i64, followed_id: i64) -> SocialClientResult<Follow> {
        let payload = FollowRequestDto {
            follower_id,
            followed_id,
        };
        self.http.send_json(Method::POST, "/follows", &payload).await
    }

    /// Удаляет подписку по её идентификатору.
    pub async fn unfollow(&self, follow_id: i64) -> SocialClientResult<()> {
        self.http.delete(&format!("/follows/{follow_id}")).await
    }
}

#[cfg(test)]
mod tests {
    use super::{PostPatch, ProfileLookup};

    #[test]
    fn empty_object_means_no_profile() {
        let lookup: ProfileLookup = serde_json::from_str("{}").expect("must parse");
        assert!(matches!(lookup, ProfileLookup::Missing {}));

        let lookup: ProfileLookup = serde_json::from_str(
            r#"{"id":1,"location":"Lagos","profile_image":"img","website":"site","bio":"long enough bio text for the profile","user_id":3}"#,
        )
        .expect("must parse");
        assert!(matches!(lookup, ProfileLookup::Found(ref profile) if profile.user_id == 3));
    }

    #[test]
    fn patch_omits_absent_fields() {
        let patch = PostPatch {
            title: Some("New Title Ok".to_string()),
            ..PostPatch::default()
        };
        let json = serde_json::to_value(&patch).expect("serializable");
        assert_eq!(json, serde_json::json!({ "title": "New Title Ok" }));
    }
}
