use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Публичная модель пользователя.
pub struct User {
    /// Идентификатор пользователя.
    pub id: i64,
    /// Логин.
    pub username: String,
    /// Email.
    pub email: String,
    /// Имя.
    pub first_name: String,
    /// Фамилия.
    pub last_name: String,
    /// Дата и время создания пользователя (UTC).
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Ответ после успешной регистрации или входа.
pub struct AuthResponse {
    /// Сообщение сервера.
    pub message: String,
    /// Данные пользователя.
    pub user: User,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Публичная модель поста.
pub struct Post {
    /// Идентификатор поста.
    pub id: i64,
    /// Заголовок поста.
    pub title: String,
    /// Текст поста.
    pub body: String,
    /// Ссылка на картинку.
    pub image_url: Option<String>,
    /// Идентификатор автора.
    pub author_id: i64,
    /// Дата и время создания поста (UTC).
    pub created_at: DateTime<Utc>,
    /// Дата и время последнего обновления поста (UTC).
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Порядок выдачи постов.
pub enum PostSort {
    /// Сначала новые.
    #[default]
    Newest,
    /// Сначала старые.
    Oldest,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Комментарий вместе с ответами.
pub struct Comment {
    /// Идентификатор комментария.
    pub id: i64,
    /// Текст комментария.
    pub body: String,
    /// Пост, к которому относится комментарий.
    pub post_id: i64,
    /// Автор комментария.
    pub user_id: i64,
    /// Родительский комментарий, если это ответ.
    pub parent_comment_id: Option<i64>,
    /// Дата и время создания (UTC).
    pub created_at: DateTime<Utc>,
    /// Ответы, от старых к новым.
    #[serde(default)]
    pub replies: Vec<Comment>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Профиль пользователя.
pub struct Profile {
    /// Идентификатор профиля.
    pub id: i64,
    /// Город или страна.
    pub location: String,
    /// Ссылка на аватар.
    pub profile_image: String,
    /// Личный сайт.
    pub website: String,
    /// О себе.
    pub bio: String,
    /// Владелец профиля.
    pub user_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Лайк поста.
pub struct Like {
    /// Идентификатор лайка.
    pub id: i64,
    /// Кто поставил.
    pub user_id: i64,
    /// Какой пост.
    pub post_id: i64,
    /// Дата и время (UTC).
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Подписка одного пользователя на другого.
pub struct Follow {
    /// Идентификатор подписки.
    pub id: i64,
    /// Подписчик.
    pub follower_id: i64,
    /// На кого подписан.
    pub followed_id: i64,
    /// Дата и время (UTC).
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize)]
/// Данные для создания профиля.
pub struct NewProfile {
    /// Город или страна (не короче 4 символов).
    pub location: String,
    /// Ссылка на аватар.
    pub profile_image: String,
    /// Личный сайт.
    pub website: String,
    /// О себе (не короче 30 символов).
    pub bio: String,
    /// Владелец профиля.
    pub user_id: i64,
}

#[derive(Debug, Clone, Default, Serialize)]
/// Частичное обновление поста; `None` оставляет поле без изменений.
pub struct PostPatch {
    /// Новый заголовок.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Новый текст.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    /// Новая картинка; пустая строка убирает её.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
/// Частичное обновление профиля; `None` оставляет поле без изменений.
pub struct ProfilePatch {
    /// Новый город.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Новый аватар.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
    /// Новый сайт.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    /// Новый текст о себе.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}
