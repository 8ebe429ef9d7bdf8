use std::time::{SystemTime, UNIX_EPOCH};

use social_client::{PostPatch, PostSort, SocialClient, SocialClientError};

fn unique_suffix() -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock must be after unix epoch")
        .as_nanos();
    format!("{nanos}")
}

#[tokio::test]
#[ignore = "requires running HTTP server"]
async fn http_smoke_flow() {
    let base_url =
        std::env::var("SOCIAL_HTTP_URL").unwrap_or_else(|_| "http://127.0.0.1:8080".to_string());
    let client = SocialClient::new(base_url).expect("client must build");
    assert!(client.health().await.expect("health must succeed"));

    let suffix = unique_suffix();
    let username = format!("user_{suffix}");
    let email = format!("user_{suffix}@example.com");
    let password = "password123";

    let signup = client
        .signup(&username, &email, "Smoke", "Test", password)
        .await
        .expect("signup must succeed");
    assert_eq!(signup.user.username, username);

    let login = client.login(&email, password).await.expect("login must succeed");
    assert_eq!(login.user.id, signup.user.id);

    let wrong = client.login(&email, "wrong-password").await;
    assert!(matches!(wrong, Err(SocialClientError::Unauthorized(_))));

    let author = signup.user.id;
    let created = client
        .create_post(author, "smoke title", "smoke body", None)
        .await
        .expect("create_post must succeed");
    assert_eq!(created.title, "smoke title");

    let updated = client
        .update_post(
            created.id,
            &PostPatch {
                title: Some("smoke title updated".to_string()),
                ..PostPatch::default()
            },
        )
        .await
        .expect("update_post must succeed");
    assert_eq!(updated.body, "smoke body");

    let feed = client
        .feed(author, PostSort::Newest)
        .await
        .expect("feed must succeed");
    assert!(feed.iter().any(|post| post.id == created.id));

    let like = client
        .like_post(author, created.id)
        .await
        .expect("like must succeed");
    let again = client.like_post(author, created.id).await;
    assert!(matches!(again, Err(SocialClientError::Conflict(_))));
    client.unlike(like.id).await.expect("unlike must succeed");

    assert!(
        client
            .get_profile(author)
            .await
            .expect("get_profile must succeed")
            .is_none()
    );

    client
        .delete_user(author)
        .await
        .expect("delete_user must succeed");
    let after_delete = client.get_post(created.id).await;
    assert!(matches!(after_delete, Err(SocialClientError::NotFound(_))));
}
