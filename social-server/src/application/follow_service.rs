use tracing::info;

use crate::data::follow_repository::{FollowFilter, FollowRepository};
use crate::domain::error::DomainError;
use crate::domain::follow::{CreateFollowRequest, Follow};

pub(crate) struct FollowService<R: FollowRepository> {
    repo: R,
}

impl<R: FollowRepository> FollowService<R> {
    pub(crate) fn new(repo: R) -> Self {
        Self { repo }
    }

    pub(crate) async fn follow(&self, req: CreateFollowRequest) -> Result<Follow, DomainError> {
        let req = req.validate()?;

        if self
            .repo
            .find_pair(req.follower_id, req.followed_id)
            .await?
            .is_some()
        {
            return Err(DomainError::AlreadyExists(
                "Already following this user.".to_string(),
            ));
        }

        let follow = self.repo.create_follow(req).await?;
        info!(
            follow_id = follow.id,
            follower_id = follow.follower_id,
            followed_id = follow.followed_id,
            "follow created"
        );
        Ok(follow)
    }

    pub(crate) async fn list_follows(
        &self,
        filter: FollowFilter,
    ) -> Result<Vec<Follow>, DomainError> {
        self.repo.list_follows(filter).await
    }

    pub(crate) async fn unfollow(&self, id: i64) -> Result<(), DomainError> {
        if !self.repo.delete_follow(id).await? {
            return Err(DomainError::not_found("Follow"));
        }
        info!(follow_id = id, "follow removed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use chrono::Utc;

    use super::FollowService;
    use crate::data::follow_repository::{FollowFilter, FollowRepository};
    use crate::domain::error::DomainError;
    use crate::domain::follow::{CreateFollowRequest, Follow};

    #[derive(Clone, Default)]
    struct FakeFollowRepo {
        follows: Arc<Mutex<Vec<Follow>>>,
    }

    #[async_trait]
    impl FollowRepository for FakeFollowRepo {
        async fn create_follow(&self, input: CreateFollowRequest) -> Result<Follow, DomainError> {
            let mut follows = self.follows.lock().expect("follows mutex poisoned");
            let follow = Follow {
                id: follows.len() as i64 + 1,
                follower_id: input.follower_id,
                followed_id: input.followed_id,
                created_at: Utc::now(),
            };
            follows.push(follow.clone());
            Ok(follow)
        }

        async fn find_pair(
            &self,
            follower_id: i64,
            followed_id: i64,
        ) -> Result<Option<Follow>, DomainError> {
            Ok(self
                .follows
                .lock()
                .expect("follows mutex poisoned")
                .iter()
                .find(|f| f.follower_id == follower_id && f.followed_id == followed_id)
                .cloned())
        }

        async fn list_follows(&self, _filter: FollowFilter) -> Result<Vec<Follow>, DomainError> {
            Ok(self.follows.lock().expect("follows mutex poisoned").clone())
        }

        async fn delete_follow(&self, _id: i64) -> Result<bool, DomainError> {
            Ok(false)
        }
    }

    fn follow(follower_id: i64, followed_id: i64) -> CreateFollowRequest {
        CreateFollowRequest {
            follower_id,
            followed_id,
        }
    }

    #[tokio::test]
    async fn second_follow_of_same_pair_conflicts() {
        let repo = FakeFollowRepo::default();
        let service = FollowService::new(repo.clone());

        service.follow(follow(1, 2)).await.expect("first follow");
        let err = service
            .follow(follow(1, 2))
            .await
            .expect_err("duplicate must fail");

        assert_eq!(err.to_string(), "Already following this user.");
        assert_eq!(repo.follows.lock().expect("follows mutex poisoned").len(), 1);
    }

    #[tokio::test]
    async fn self_follow_never_reaches_repo() {
        let repo = FakeFollowRepo::default();
        let service = FollowService::new(repo.clone());

        let err = service.follow(follow(3, 3)).await.expect_err("self follow");
        assert_eq!(err.to_string(), "User cannot follow themselves.");
        assert!(repo.follows.lock().expect("follows mutex poisoned").is_empty());
    }

    #[tokio::test]
    async fn reverse_direction_is_a_separate_follow() {
        let service = FollowService::new(FakeFollowRepo::default());
        service.follow(follow(1, 2)).await.expect("forward");
        service.follow(follow(2, 1)).await.expect("reverse");
    }

    #[tokio::test]
    async fn unfollow_missing_is_not_found() {
        let service = FollowService::new(FakeFollowRepo::default());
        let err = service.unfollow(4).await.expect_err("missing");
        assert_eq!(err.to_string(), "Follow not found");
    }
}
