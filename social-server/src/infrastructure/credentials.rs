use argon2::{
    Argon2,
    password_hash::{
        Error as PasswordHashError, PasswordHash, PasswordHasher, PasswordVerifier, SaltString,
        rand_core::OsRng,
    },
};
use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum CredentialError {
    #[error("password hashing failed: {0}")]
    Hash(PasswordHashError),

    #[error("stored password hash is malformed: {0}")]
    MalformedHash(PasswordHashError),
}

/// Хеширование и проверка паролей (Argon2id, параметры по умолчанию).
pub(crate) struct CredentialService {
    argon2: Argon2<'static>,
    dummy_hash: String,
}

impl CredentialService {
    const DUMMY_PASSWORD: &'static str = "dummy-password-for-timing";

    pub(crate) fn new() -> Result<Self, CredentialError> {
        let argon2 = Argon2::default();
        let dummy_hash = Self::hash_with(&argon2, Self::DUMMY_PASSWORD)?;
        Ok(Self { argon2, dummy_hash })
    }

    pub(crate) fn hash_password(&self, raw_password: &str) -> Result<String, CredentialError> {
        Self::hash_with(&self.argon2, raw_password)
    }

    pub(crate) fn verify_password(
        &self,
        raw_password: &str,
        password_hash: &str,
    ) -> Result<bool, CredentialError> {
        let parsed_hash = PasswordHash::new(password_hash).map_err(CredentialError::MalformedHash)?;
        match self
            .argon2
            .verify_password(raw_password.as_bytes(), &parsed_hash)
        {
            Ok(()) => Ok(true),
            Err(PasswordHashError::Password) => Ok(false),
            Err(err) => Err(CredentialError::MalformedHash(err)),
        }
    }

    /// Проверка против заранее посчитанного хеша, чтобы ответ на вход
    /// несуществующего пользователя занимал столько же времени.
    pub(crate) fn burn_verification(&self, raw_password: &str) {
        let _ = self.verify_password(raw_password, &self.dummy_hash);
    }

    fn hash_with(argon2: &Argon2<'static>, raw_password: &str) -> Result<String, CredentialError> {
        let salt = SaltString::generate(&mut OsRng);
        let password_hash = argon2
            .hash_password(raw_password.as_bytes(), &salt)
            .map_err(CredentialError::Hash)?;
        Ok(password_hash.to_string())
    }
}
