use tracing::{info, warn};

use crate::data::user_repository::{NewUser, UserRepository};
use crate::domain::error::DomainError;
use crate::domain::user::{LoginRequest, SignupRequest, User};
use crate::infrastructure::credentials::CredentialService;

pub(crate) struct AuthService<R: UserRepository> {
    repo: R,
    credentials: CredentialService,
}

impl<R: UserRepository> AuthService<R> {
    pub(crate) fn new(repo: R, credentials: CredentialService) -> Self {
        Self { repo, credentials }
    }

    pub(crate) async fn signup(&self, req: SignupRequest) -> Result<User, DomainError> {
        let req = req.validate()?;

        // быстрый ответ без хеширования; гонку закрывает UNIQUE в схеме
        if self.repo.find_by_email(&req.email).await?.is_some() {
            return Err(DomainError::AlreadyExists("Email already exists".to_string()));
        }

        let password_hash = self
            .credentials
            .hash_password(&req.password)
            .map_err(|err| DomainError::Unexpected(err.to_string()))?;

        let user = self.repo.create_user(Self::into_new_user(req, password_hash)).await?;
        info!(user_id = user.id, username = %user.username, "user signed up");
        Ok(user)
    }

    pub(crate) async fn login(&self, req: LoginRequest) -> Result<User, DomainError> {
        let req = req.validate()?;

        let Some(user_creds) = self.repo.find_by_email(&req.email).await? else {
            self.credentials.burn_verification(&req.password);
            warn!("login rejected");
            return Err(DomainError::InvalidCredentials);
        };

        let matches = self
            .credentials
            .verify_password(&req.password, &user_creds.password_hash)
            .map_err(|err| DomainError::Unexpected(err.to_string()))?;
        if !matches {
            warn!("login rejected");
            return Err(DomainError::InvalidCredentials);
        }

        Ok(user_creds.user)
    }

    fn into_new_user(req: SignupRequest, password_hash: String) -> NewUser {
        NewUser {
            username: req.username,
            email: req.email,
            first_name: req.first_name,
            last_name: req.last_name,
            password_hash,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use chrono::Utc;

    use super::AuthService;
    use crate::data::user_repository::{NewUser, UserCredentials, UserRepository};
    use crate::domain::error::DomainError;
    use crate::domain::user::{LoginRequest, SignupRequest, UpdateUserRequest, User};
    use crate::infrastructure::credentials::CredentialService;

    #[derive(Clone)]
    struct FakeUserRepo {
        created_input: Arc<Mutex<Option<NewUser>>>,
        login_credentials: Arc<Mutex<Option<UserCredentials>>>,
        create_user_out: User,
    }

    impl FakeUserRepo {
        fn new(create_user_out: User) -> Self {
            Self {
                created_input: Arc::new(Mutex::new(None)),
                login_credentials: Arc::new(Mutex::new(None)),
                create_user_out,
            }
        }

        fn set_login_credentials(&self, creds: Option<UserCredentials>) {
            *self
                .login_credentials
                .lock()
                .expect("login credentials mutex poisoned") = creds;
        }

        fn take_created_input(&self) -> Option<NewUser> {
            self.created_input
                .lock()
                .expect("created input mutex poisoned")
                .take()
        }
    }

    #[async_trait]
    impl UserRepository for FakeUserRepo {
        async fn create_user(&self, input: NewUser) -> Result<User, DomainError> {
            *self
                .created_input
                .lock()
                .expect("created input mutex poisoned") = Some(input);
            Ok(self.create_user_out.clone())
        }

        async fn find_by_email(&self, _email: &str) -> Result<Option<UserCredentials>, DomainError> {
            Ok(self
                .login_credentials
                .lock()
                .expect("login credentials mutex poisoned")
                .clone())
        }

        async fn get_user(&self, _id: i64) -> Result<Option<User>, DomainError> {
            Ok(None)
        }

        async fn list_users(&self) -> Result<Vec<User>, DomainError> {
            Ok(Vec::new())
        }

        async fn update_user(
            &self,
            _id: i64,
            _patch: UpdateUserRequest,
        ) -> Result<Option<User>, DomainError> {
            Ok(None)
        }

        async fn delete_user(&self, _id: i64) -> Result<bool, DomainError> {
            Ok(false)
        }
    }

    #[tokio::test]
    async fn signup_stores_hash_instead_of_password() {
        let repo = FakeUserRepo::new(sample_user(1, "valid_user", "valid@example.com"));
        let service = AuthService::new(repo.clone(), credentials());

        let req = SignupRequest {
            username: "  valid_user  ".to_string(),
            email: "  VALID@EXAMPLE.COM  ".to_string(),
            first_name: "Valid".to_string(),
            last_name: "User".to_string(),
            password: "very-secure-password".to_string(),
        };

        let user = service.signup(req).await.expect("signup must succeed");
        assert_eq!(user.username, "valid_user");

        let created = repo
            .take_created_input()
            .expect("create_user must be called");
        assert_eq!(created.username, "valid_user");
        assert_eq!(created.email, "valid@example.com");
        assert_ne!(created.password_hash, "very-secure-password");
        assert!(created.password_hash.starts_with("$argon2"));
    }

    #[tokio::test]
    async fn signup_rejects_taken_email_before_hashing() {
        let repo = FakeUserRepo::new(sample_user(1, "valid_user", "valid@example.com"));
        repo.set_login_credentials(Some(UserCredentials {
            user: sample_user(1, "valid_user", "valid@example.com"),
            password_hash: "irrelevant".to_string(),
        }));
        let service = AuthService::new(repo.clone(), credentials());

        let req = SignupRequest {
            username: "other_user".to_string(),
            email: "valid@example.com".to_string(),
            first_name: "Other".to_string(),
            last_name: "User".to_string(),
            password: "password".to_string(),
        };

        let err = service.signup(req).await.expect_err("email is taken");
        assert!(matches!(err, DomainError::AlreadyExists(_)));
        assert!(repo.take_created_input().is_none());
    }

    #[tokio::test]
    async fn login_failures_are_indistinguishable() {
        let repo = FakeUserRepo::new(sample_user(1, "valid_user", "valid@example.com"));
        let service = AuthService::new(repo.clone(), credentials());

        repo.set_login_credentials(None);
        let missing = service
            .login(login_req("wrong-password"))
            .await
            .expect_err("missing user must fail");

        let hash = credentials()
            .hash_password("correct-password")
            .expect("hash must be created");
        repo.set_login_credentials(Some(UserCredentials {
            user: sample_user(1, "valid_user", "valid@example.com"),
            password_hash: hash,
        }));
        let wrong = service
            .login(login_req("wrong-password"))
            .await
            .expect_err("wrong password must fail");

        assert!(matches!(missing, DomainError::InvalidCredentials));
        assert!(matches!(wrong, DomainError::InvalidCredentials));
        assert_eq!(missing.to_string(), wrong.to_string());
    }

    #[tokio::test]
    async fn login_returns_user_for_valid_credentials() {
        let repo = FakeUserRepo::new(sample_user(1, "valid_user", "valid@example.com"));
        let service = AuthService::new(repo.clone(), credentials());

        let hash = credentials()
            .hash_password("correct-password")
            .expect("hash must be created");
        repo.set_login_credentials(Some(UserCredentials {
            user: sample_user(1, "valid_user", "valid@example.com"),
            password_hash: hash,
        }));

        let user = service
            .login(login_req("correct-password"))
            .await
            .expect("login must succeed");
        assert_eq!(user.id, 1);
    }

    fn login_req(password: &str) -> LoginRequest {
        LoginRequest {
            email: "valid@example.com".to_string(),
            password: password.to_string(),
        }
    }

    fn sample_user(id: i64, username: &str, email: &str) -> User {
        User::new(id, username, email, "Valid", "User", Utc::now())
            .expect("sample user must be valid")
    }

    fn credentials() -> CredentialService {
        CredentialService::new().expect("credential service must build")
    }
}
