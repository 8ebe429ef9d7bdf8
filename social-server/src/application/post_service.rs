use tracing::info;

use crate::data::post_repository::{NewPost, PostFilter, PostRepository};
use crate::domain::error::DomainError;
use crate::domain::post::{CreatePostRequest, Post, PostSort, UpdatePostRequest};

pub(crate) struct PostService<R: PostRepository> {
    repo: R,
}

impl<R: PostRepository> PostService<R> {
    pub(crate) fn new(repo: R) -> Self {
        Self { repo }
    }

    pub(crate) async fn create_post(&self, req: CreatePostRequest) -> Result<Post, DomainError> {
        let req = req.validate()?;

        let new_post = NewPost {
            title: req.title,
            body: req.body,
            image_url: req.image_url,
            author_id: req.author_id,
        };
        let post = self.repo.create_post(new_post).await?;
        info!(post_id = post.id, author_id = post.author_id, "post created");
        Ok(post)
    }

    pub(crate) async fn get_post(&self, id: i64) -> Result<Post, DomainError> {
        self.repo
            .get_post(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Post"))
    }

    pub(crate) async fn update_post(
        &self,
        id: i64,
        req: UpdatePostRequest,
    ) -> Result<Post, DomainError> {
        let req = req.validate()?;
        self.repo
            .update_post(id, req)
            .await?
            .ok_or_else(|| DomainError::not_found("Post"))
    }

    pub(crate) async fn delete_post(&self, id: i64) -> Result<(), DomainError> {
        if !self.repo.delete_post(id).await? {
            return Err(DomainError::not_found("Post"));
        }
        info!(post_id = id, "post deleted");
        Ok(())
    }

    pub(crate) async fn list_posts(&self, filter: PostFilter) -> Result<Vec<Post>, DomainError> {
        self.repo.list_posts(filter).await
    }

    pub(crate) async fn feed(&self, user_id: i64, sort: PostSort) -> Result<Vec<Post>, DomainError> {
        if !self.repo.user_exists(user_id).await? {
            return Err(DomainError::not_found("User"));
        }
        self.repo.list_feed(user_id, sort).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use chrono::Utc;

    use super::PostService;
    use crate::data::post_repository::{NewPost, PostFilter, PostRepository};
    use crate::domain::error::DomainError;
    use crate::domain::post::{CreatePostRequest, Post, PostSort, UpdatePostRequest};

    #[derive(Clone)]
    struct FakePostRepo {
        created_input: Arc<Mutex<Option<NewPost>>>,
        post_for_get: Arc<Mutex<Option<Post>>>,
        update_call: Arc<Mutex<Option<(i64, UpdatePostRequest)>>>,
        update_result: Arc<Mutex<Option<Post>>>,
        delete_result: Arc<Mutex<bool>>,
        feed_call: Arc<Mutex<Option<(i64, PostSort)>>>,
        known_user: Arc<Mutex<bool>>,
    }

    impl FakePostRepo {
        fn new() -> Self {
            Self {
                created_input: Arc::new(Mutex::new(None)),
                post_for_get: Arc::new(Mutex::new(None)),
                update_call: Arc::new(Mutex::new(None)),
                update_result: Arc::new(Mutex::new(None)),
                delete_result: Arc::new(Mutex::new(true)),
                feed_call: Arc::new(Mutex::new(None)),
                known_user: Arc::new(Mutex::new(true)),
            }
        }
    }

    #[async_trait]
    impl PostRepository for FakePostRepo {
        async fn create_post(&self, input: NewPost) -> Result<Post, DomainError> {
            *self
                .created_input
                .lock()
                .expect("created_input mutex poisoned") = Some(input.clone());
            Ok(sample_post(1, &input.title, &input.body, input.author_id))
        }

        async fn get_post(&self, _id: i64) -> Result<Option<Post>, DomainError> {
            Ok(self
                .post_for_get
                .lock()
                .expect("post_for_get mutex poisoned")
                .clone())
        }

        async fn update_post(
            &self,
            id: i64,
            patch: UpdatePostRequest,
        ) -> Result<Option<Post>, DomainError> {
            *self.update_call.lock().expect("update_call mutex poisoned") = Some((id, patch));
            Ok(self
                .update_result
                .lock()
                .expect("update_result mutex poisoned")
                .clone())
        }

        async fn delete_post(&self, _id: i64) -> Result<bool, DomainError> {
            Ok(*self.delete_result.lock().expect("delete_result mutex poisoned"))
        }

        async fn list_posts(&self, _filter: PostFilter) -> Result<Vec<Post>, DomainError> {
            Ok(Vec::new())
        }

        async fn list_feed(&self, user_id: i64, sort: PostSort) -> Result<Vec<Post>, DomainError> {
            *self.feed_call.lock().expect("feed_call mutex poisoned") = Some((user_id, sort));
            Ok(vec![sample_post(2, "Feed post", "feed body", user_id)])
        }

        async fn user_exists(&self, _user_id: i64) -> Result<bool, DomainError> {
            Ok(*self.known_user.lock().expect("known_user mutex poisoned"))
        }
    }

    #[tokio::test]
    async fn create_post_normalizes_request_before_repo_call() {
        let repo = FakePostRepo::new();
        let service = PostService::new(repo.clone());

        let req = CreatePostRequest {
            title: "  Hello world  ".to_string(),
            body: "  content  ".to_string(),
            author_id: 10,
            image_url: None,
        };

        let created = service
            .create_post(req)
            .await
            .expect("create_post must succeed");
        assert_eq!(created.title, "Hello world");

        let input = repo
            .created_input
            .lock()
            .expect("created_input mutex poisoned")
            .clone()
            .expect("repo input must be captured");
        assert_eq!(input.title, "Hello world");
        assert_eq!(input.body, "content");
        assert_eq!(input.author_id, 10);
    }

    #[tokio::test]
    async fn create_post_with_short_title_never_reaches_repo() {
        let repo = FakePostRepo::new();
        let service = PostService::new(repo.clone());

        let req = CreatePostRequest {
            title: "Hey".to_string(),
            body: "content".to_string(),
            author_id: 10,
            image_url: None,
        };

        let err = service.create_post(req).await.expect_err("must fail");
        assert!(matches!(err, DomainError::Validation { field: "title", .. }));
        assert!(
            repo.created_input
                .lock()
                .expect("created_input mutex poisoned")
                .is_none()
        );
    }

    #[tokio::test]
    async fn get_post_returns_not_found_when_missing() {
        let service = PostService::new(FakePostRepo::new());

        let err = service.get_post(42).await.expect_err("post must be missing");
        assert_eq!(err.to_string(), "Post not found");
    }

    #[tokio::test]
    async fn update_post_passes_only_present_fields() {
        let repo = FakePostRepo::new();
        *repo
            .update_result
            .lock()
            .expect("update_result mutex poisoned") =
            Some(sample_post(7, "New Title Ok", "old body", 10));

        let service = PostService::new(repo.clone());
        let req = UpdatePostRequest {
            title: Some("  New Title Ok  ".to_string()),
            ..UpdatePostRequest::default()
        };

        let updated = service.update_post(7, req).await.expect("update must succeed");
        assert_eq!(updated.id, 7);

        let (id, patch) = repo
            .update_call
            .lock()
            .expect("update_call mutex poisoned")
            .clone()
            .expect("update call must be captured");
        assert_eq!(id, 7);
        assert_eq!(patch.title.as_deref(), Some("New Title Ok"));
        assert!(patch.body.is_none());
    }

    #[tokio::test]
    async fn delete_missing_post_is_not_found() {
        let repo = FakePostRepo::new();
        *repo.delete_result.lock().expect("delete_result mutex poisoned") = false;
        let service = PostService::new(repo);

        let err = service.delete_post(3).await.expect_err("must be missing");
        assert!(matches!(err, DomainError::NotFound(_)));
    }

    #[tokio::test]
    async fn feed_for_unknown_user_is_not_found() {
        let repo = FakePostRepo::new();
        *repo.known_user.lock().expect("known_user mutex poisoned") = false;
        let service = PostService::new(repo.clone());

        let err = service
            .feed(5, PostSort::Newest)
            .await
            .expect_err("unknown user");
        assert_eq!(err.to_string(), "User not found");
        assert!(repo.feed_call.lock().expect("feed_call mutex poisoned").is_none());
    }

    #[tokio::test]
    async fn feed_forwards_sort_order() {
        let repo = FakePostRepo::new();
        let service = PostService::new(repo.clone());

        let posts = service.feed(5, PostSort::Oldest).await.expect("feed");
        assert_eq!(posts.len(), 1);
        let call = *repo.feed_call.lock().expect("feed_call mutex poisoned");
        assert_eq!(call, Some((5, PostSort::Oldest)));
    }

    fn sample_post(id: i64, title: &str, body: &str, author_id: i64) -> Post {
        let now = Utc::now();
        Post::new(id, title, body, None, author_id, now, now).expect("sample post must be valid")
    }
}
