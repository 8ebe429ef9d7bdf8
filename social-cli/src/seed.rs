//! Демонстрационный набор данных: три пользователя с профилями, постами,
//! комментариями, подписками и лайками.

use social_client::{NewProfile, SocialClient, SocialClientResult};

const SEED_PASSWORD: &str = "password4040";
const PROFILE_IMAGE: &str = "https://images.example.com/avatar-default.jpg";
const WEBSITE: &str = "https://example.com/blog";

struct SeedUser {
    username: &'static str,
    email: &'static str,
    first_name: &'static str,
    last_name: &'static str,
    location: &'static str,
    bio: &'static str,
}

const USERS: [SeedUser; 3] = [
    SeedUser {
        username: "irarubrian",
        email: "irarubrian@example.com",
        first_name: "iraru",
        last_name: "brian",
        location: "New York",
        bio: "Software engineer passionate about web development and open source.",
    },
    SeedUser {
        username: "irarubrian2",
        email: "irarubrian2@example.com",
        first_name: "brian",
        last_name: "iraru",
        location: "San Francisco",
        bio: "Digital marketer with 5 years of experience in tech companies.",
    },
    SeedUser {
        username: "brivianbella",
        email: "brivianbella@example.com",
        first_name: "brivian",
        last_name: "bella",
        location: "Chicago",
        bio: "Graphic designer and illustrator creating beautiful visuals.",
    },
];

/// (индекс автора, заголовок, текст)
const POSTS: [(usize, &str, &str); 3] = [
    (
        0,
        "My First Blog Post",
        "This is the content of my first blog post. I'm excited to start blogging!",
    ),
    (
        1,
        "Web Development Tips",
        "Here are some tips I've learned after 5 years of web development experience.",
    ),
    (
        2,
        "Design Principles",
        "Key design principles every developer should know to create better UIs.",
    ),
];

/// (индекс поста, индекс автора, текст)
const COMMENTS: [(usize, usize, &str); 3] = [
    (0, 1, "Great first post! Looking forward to more content."),
    (1, 2, "Thanks for sharing these valuable tips!"),
    (2, 0, "I especially agree with point #3 about color theory."),
];

/// (подписчик, на кого подписан)
const FOLLOWS: [(usize, usize); 3] = [(0, 1), (1, 2), (2, 0)];

/// (индекс пользователя, индекс поста)
const LIKES: [(usize, usize); 3] = [(0, 1), (1, 2), (2, 0)];

/// Удаляет прежние демо-записи и создаёт их заново через API.
pub(crate) async fn run(client: &SocialClient) -> SocialClientResult<String> {
    let existing = client.list_users().await?;
    let mut removed = 0;
    for user in existing
        .iter()
        .filter(|user| USERS.iter().any(|seed| seed.email == user.email))
    {
        client.delete_user(user.id).await?;
        removed += 1;
    }

    let mut user_ids = Vec::with_capacity(USERS.len());
    for seed in &USERS {
        let auth = client
            .signup(
                seed.username,
                seed.email,
                seed.first_name,
                seed.last_name,
                SEED_PASSWORD,
            )
            .await?;
        user_ids.push(auth.user.id);
    }

    for (seed, user_id) in USERS.iter().zip(&user_ids) {
        client
            .create_profile(&NewProfile {
                location: seed.location.to_string(),
                profile_image: PROFILE_IMAGE.to_string(),
                website: WEBSITE.to_string(),
                bio: seed.bio.to_string(),
                user_id: *user_id,
            })
            .await?;
    }

    let mut post_ids = Vec::with_capacity(POSTS.len());
    for (author, title, body) in POSTS {
        let post = client
            .create_post(user_ids[author], title, body, None)
            .await?;
        post_ids.push(post.id);
    }

    for (post, author, body) in COMMENTS {
        client
            .create_comment(user_ids[author], post_ids[post], body, None)
            .await?;
    }

    for (follower, followed) in FOLLOWS {
        client.follow(user_ids[follower], user_ids[followed]).await?;
    }

    for (user, post) in LIKES {
        client.like_post(user_ids[user], post_ids[post]).await?;
    }

    Ok(format!(
        "Демо-данные созданы: удалено прежних пользователей {removed}, \
         пользователей {}, постов {}, комментариев {}, подписок {}, лайков {} \
         (пароль: {SEED_PASSWORD})",
        user_ids.len(),
        post_ids.len(),
        COMMENTS.len(),
        FOLLOWS.len(),
        LIKES.len()
    ))
}
