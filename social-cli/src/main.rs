use std::fs;
use std::io;
use std::path::Path;
use std::process;

use anyhow::{Context, Result, anyhow};
use clap::{Args, Parser, Subcommand};
use social_client::{
    AuthResponse, Comment, NewProfile, Post, PostPatch, PostSort, Profile, ProfilePatch,
    SocialClient, SocialClientError, User,
};

mod seed;

const SESSION_FILE: &str = ".social_session";
const DEFAULT_HTTP_SERVER: &str = "http://127.0.0.1:8080";

#[derive(Debug, Parser)]
#[command(name = "social-cli", version, about = "CLI клиент для social-server")]
struct Cli {
    /// Адрес HTTP-сервера (по умолчанию SOCIAL_SERVER или http://127.0.0.1:8080).
    #[arg(long, global = true, env = "SOCIAL_SERVER")]
    server: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Регистрация пользователя; он же становится текущим.
    Signup {
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        password: String,
    },
    /// Вход пользователя; он становится текущим.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Забыть текущего пользователя.
    Logout,
    /// Показать текущего пользователя.
    Whoami,
    /// Список пользователей.
    Users,
    /// Лента: посты пользователя и тех, на кого он подписан.
    Feed {
        /// Чья лента (по умолчанию текущего пользователя).
        #[arg(long)]
        user: Option<i64>,
        #[command(flatten)]
        order: SortArgs,
    },
    /// Список постов.
    Posts {
        /// Только посты этого автора.
        #[arg(long)]
        author: Option<i64>,
        #[command(flatten)]
        order: SortArgs,
    },
    /// Операции с одним постом.
    #[command(subcommand)]
    Post(PostCommand),
    /// Комментарии с ответами.
    Comments {
        /// Только комментарии к этому посту.
        #[arg(long)]
        post: Option<i64>,
    },
    /// Операции с одним комментарием.
    #[command(subcommand)]
    Comment(CommentCommand),
    /// Поставить лайк посту от имени текущего пользователя.
    Like {
        #[arg(long)]
        post: i64,
    },
    /// Снять лайк текущего пользователя с поста.
    Unlike {
        #[arg(long)]
        post: i64,
    },
    /// Подписаться на пользователя.
    Follow {
        #[arg(long)]
        user: i64,
    },
    /// Отписаться от пользователя.
    Unfollow {
        #[arg(long)]
        user: i64,
    },
    /// Профили пользователей.
    #[command(subcommand)]
    Profile(ProfileCommand),
    /// Пересоздать демонстрационные данные.
    Seed,
}

#[derive(Debug, Args)]
struct SortArgs {
    /// Сначала старые посты.
    #[arg(long)]
    oldest: bool,
}

impl SortArgs {
    fn sort(&self) -> PostSort {
        if self.oldest {
            PostSort::Oldest
        } else {
            PostSort::Newest
        }
    }
}

#[derive(Debug, Subcommand)]
enum PostCommand {
    /// Создание поста от имени текущего пользователя.
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        body: String,
        #[arg(long)]
        image_url: Option<String>,
    },
    /// Получение поста по id.
    Show {
        #[arg(long)]
        id: i64,
    },
    /// Обновление поста; неуказанные поля не меняются.
    Update {
        #[arg(long)]
        id: i64,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        body: Option<String>,
        /// Пустая строка убирает картинку.
        #[arg(long)]
        image_url: Option<String>,
    },
    /// Удаление поста вместе с комментариями и лайками.
    Delete {
        #[arg(long)]
        id: i64,
    },
}

#[derive(Debug, Subcommand)]
enum CommentCommand {
    /// Комментарий к посту от имени текущего пользователя.
    Add {
        #[arg(long)]
        post: i64,
        #[arg(long)]
        body: String,
        /// Ответить на комментарий с этим id.
        #[arg(long)]
        reply_to: Option<i64>,
    },
    /// Комментарий с деревом ответов.
    Show {
        #[arg(long)]
        id: i64,
    },
    /// Изменить текст комментария.
    Edit {
        #[arg(long)]
        id: i64,
        #[arg(long)]
        body: String,
    },
    /// Удалить комментарий и все ответы на него.
    Delete {
        #[arg(long)]
        id: i64,
    },
}

#[derive(Debug, Subcommand)]
enum ProfileCommand {
    /// Показать профиль (по умолчанию текущего пользователя).
    Show {
        #[arg(long)]
        user: Option<i64>,
    },
    /// Создать или обновить профиль текущего пользователя.
    Set {
        #[arg(long)]
        location: Option<String>,
        #[arg(long)]
        profile_image: Option<String>,
        #[arg(long)]
        website: Option<String>,
        #[arg(long)]
        bio: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    if let Err(err) = run().await {
        eprintln!("Ошибка: {err}");
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    let server = normalize_server(cli.server.unwrap_or_else(|| DEFAULT_HTTP_SERVER.to_string()));
    let client = SocialClient::new(server).map_err(map_client_error)?;
    let session = load_session().context("не удалось прочитать .social_session")?;

    match cli.command {
        Command::Signup {
            username,
            email,
            first_name,
            last_name,
            password,
        } => {
            let auth = client
                .signup(&username, &email, &first_name, &last_name, &password)
                .await
                .map_err(map_client_error)?;
            persist_session(auth.user.id).context("не удалось сохранить сессию")?;
            print_auth(&auth);
        }
        Command::Login { email, password } => {
            let auth = client
                .login(&email, &password)
                .await
                .map_err(map_client_error)?;
            persist_session(auth.user.id).context("не удалось сохранить сессию")?;
            print_auth(&auth);
        }
        Command::Logout => {
            clear_session().context("не удалось удалить сессию")?;
            println!("Сессия завершена");
        }
        Command::Whoami => {
            let user = client
                .get_user(require_session(session)?)
                .await
                .map_err(map_client_error)?;
            print_user(&user);
        }
        Command::Users => {
            let users = client.list_users().await.map_err(map_client_error)?;
            println!("Пользователей: {}", users.len());
            for user in &users {
                println!("- [{}] {} <{}>", user.id, user.username, user.email);
            }
        }
        Command::Feed { user, order } => {
            let user_id = match user {
                Some(id) => id,
                None => require_session(session)?,
            };
            let posts = client
                .feed(user_id, order.sort())
                .await
                .map_err(map_client_error)?;
            print_posts(&posts);
        }
        Command::Posts { author, order } => {
            let posts = client
                .list_posts(author, order.sort())
                .await
                .map_err(map_client_error)?;
            print_posts(&posts);
        }
        Command::Post(command) => run_post(&client, session, command).await?,
        Command::Comments { post } => {
            let comments = client.list_comments(post).await.map_err(map_client_error)?;
            for comment in &comments {
                print_comment(comment, 0);
            }
        }
        Command::Comment(command) => run_comment(&client, session, command).await?,
        Command::Like { post } => {
            let like = client
                .like_post(require_session(session)?, post)
                .await
                .map_err(map_client_error)?;
            println!("Лайк поставлен: id={}", like.id);
        }
        Command::Unlike { post } => {
            let me = require_session(session)?;
            let likes = client
                .list_likes(Some(me), Some(post))
                .await
                .map_err(map_client_error)?;
            let like = likes
                .first()
                .ok_or_else(|| anyhow!("лайка на посте {post} нет"))?;
            client.unlike(like.id).await.map_err(map_client_error)?;
            println!("Лайк снят");
        }
        Command::Follow { user } => {
            let follow = client
                .follow(require_session(session)?, user)
                .await
                .map_err(map_client_error)?;
            println!("Подписка оформлена: id={}", follow.id);
        }
        Command::Unfollow { user } => {
            let me = require_session(session)?;
            let follows = client
                .list_follows(Some(me), Some(user))
                .await
                .map_err(map_client_error)?;
            let follow = follows
                .first()
                .ok_or_else(|| anyhow!("подписки на пользователя {user} нет"))?;
            client.unfollow(follow.id).await.map_err(map_client_error)?;
            println!("Подписка отменена");
        }
        Command::Profile(command) => run_profile(&client, session, command).await?,
        Command::Seed => {
            let summary = seed::run(&client).await.map_err(map_client_error)?;
            println!("{summary}");
        }
    }

    Ok(())
}

async fn run_post(client: &SocialClient, session: Option<i64>, command: PostCommand) -> Result<()> {
    match command {
        PostCommand::Create {
            title,
            body,
            image_url,
        } => {
            let post = client
                .create_post(require_session(session)?, &title, &body, image_url.as_deref())
                .await
                .map_err(map_client_error)?;
            print_post("Пост создан", &post);
        }
        PostCommand::Show { id } => {
            let post = client.get_post(id).await.map_err(map_client_error)?;
            print_post("Пост", &post);
        }
        PostCommand::Update {
            id,
            title,
            body,
            image_url,
        } => {
            let patch = PostPatch {
                title,
                body,
                image_url,
            };
            let post = client
                .update_post(id, &patch)
                .await
                .map_err(map_client_error)?;
            print_post("Пост обновлён", &post);
        }
        PostCommand::Delete { id } => {
            client.delete_post(id).await.map_err(map_client_error)?;
            println!("Пост удалён: id={id}");
        }
    }
    Ok(())
}

async fn run_comment(
    client: &SocialClient,
    session: Option<i64>,
    command: CommentCommand,
) -> Result<()> {
    match command {
        CommentCommand::Add {
            post,
            body,
            reply_to,
        } => {
            let comment = client
                .create_comment(require_session(session)?, post, &body, reply_to)
                .await
                .map_err(map_client_error)?;
            println!("Комментарий добавлен: id={}", comment.id);
        }
        CommentCommand::Show { id } => {
            let comment = client.get_comment(id).await.map_err(map_client_error)?;
            print_comment(&comment, 0);
        }
        CommentCommand::Edit { id, body } => {
            let comment = client
                .update_comment(id, &body)
                .await
                .map_err(map_client_error)?;
            print_comment(&comment, 0);
        }
        CommentCommand::Delete { id } => {
            client.delete_comment(id).await.map_err(map_client_error)?;
            println!("Комментарий удалён: id={id}");
        }
    }
    Ok(())
}

async fn run_profile(
    client: &SocialClient,
    session: Option<i64>,
    command: ProfileCommand,
) -> Result<()> {
    match command {
        ProfileCommand::Show { user } => {
            let user_id = match user {
                Some(id) => id,
                None => require_session(session)?,
            };
            match client.get_profile(user_id).await.map_err(map_client_error)? {
                Some(profile) => print_profile(&profile),
                None => println!("У пользователя {user_id} нет профиля"),
            }
        }
        ProfileCommand::Set {
            location,
            profile_image,
            website,
            bio,
        } => {
            let me = require_session(session)?;
            let existing = client.get_profile(me).await.map_err(map_client_error)?;
            let profile = if existing.is_some() {
                let patch = ProfilePatch {
                    location,
                    profile_image,
                    website,
                    bio,
                };
                client.update_profile(me, &patch).await
            } else {
                let new_profile = NewProfile {
                    location: location.unwrap_or_default(),
                    profile_image: profile_image.unwrap_or_default(),
                    website: website.unwrap_or_default(),
                    bio: bio.unwrap_or_default(),
                    user_id: me,
                };
                client.create_profile(&new_profile).await
            }
            .map_err(map_client_error)?;
            print_profile(&profile);
        }
    }
    Ok(())
}

fn normalize_server(server: String) -> String {
    if server.starts_with("http://") || server.starts_with("https://") {
        return server;
    }

    format!("http://{server}")
}

fn parse_session_content(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok().filter(|id| *id > 0)
}

fn load_session() -> io::Result<Option<i64>> {
    if !Path::new(SESSION_FILE).exists() {
        return Ok(None);
    }

    let raw = fs::read_to_string(SESSION_FILE)?;
    Ok(parse_session_content(&raw))
}

fn persist_session(user_id: i64) -> io::Result<()> {
    fs::write(SESSION_FILE, user_id.to_string())
}

fn clear_session() -> io::Result<()> {
    match fs::remove_file(SESSION_FILE) {
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
        other => other,
    }
}

fn require_session(session: Option<i64>) -> Result<i64> {
    session.ok_or_else(|| {
        anyhow!("нет текущего пользователя: выполните `social-cli login ...` или `social-cli signup ...`")
    })
}

fn map_client_error(err: SocialClientError) -> anyhow::Error {
    let message = match err {
        SocialClientError::Unauthorized(message) => format!("доступ запрещён: {message}"),
        SocialClientError::NotFound(message) => format!("не найдено: {message}"),
        SocialClientError::Conflict(message) => format!("конфликт: {message}"),
        SocialClientError::InvalidRequest(message) => format!("некорректный запрос: {message}"),
        SocialClientError::Http(err) => format!("ошибка HTTP: {err}"),
    };
    anyhow!(message)
}

fn print_auth(auth: &AuthResponse) {
    println!("{}", auth.message);
    print_user(&auth.user);
}

fn print_user(user: &User) {
    println!("user:");
    println!("  id: {}", user.id);
    println!("  username: {}", user.username);
    println!("  email: {}", user.email);
    println!("  name: {} {}", user.first_name, user.last_name);
    println!("  created_at: {}", user.created_at);
}

fn print_post(title: &str, post: &Post) {
    println!("{title}");
    println!("id: {}", post.id);
    println!("title: {}", post.title);
    println!("body: {}", post.body);
    if let Some(image_url) = &post.image_url {
        println!("image_url: {image_url}");
    }
    println!("author_id: {}", post.author_id);
    println!("created_at: {}", post.created_at);
    println!("updated_at: {}", post.updated_at);
}

fn print_posts(posts: &[Post]) {
    println!("Постов: {}", posts.len());
    for post in posts {
        println!(
            "- [{}] {} (author_id={}, {})",
            post.id, post.title, post.author_id, post.created_at
        );
    }
}

fn print_comment(comment: &Comment, depth: usize) {
    println!(
        "{}- [{}] {} (user_id={})",
        "  ".repeat(depth),
        comment.id,
        comment.body,
        comment.user_id
    );
    for reply in &comment.replies {
        print_comment(reply, depth + 1);
    }
}

fn print_profile(profile: &Profile) {
    println!("profile:");
    println!("  user_id: {}", profile.user_id);
    println!("  location: {}", profile.location);
    println!("  website: {}", profile.website);
    println!("  profile_image: {}", profile.profile_image);
    println!("  bio: {}", profile.bio);
}
