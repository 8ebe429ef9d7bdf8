use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::rules::{USERNAME, normalize_email, validate_positive_i64};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct SignupRequest {
    pub(crate) username: String,
    pub(crate) email: String,
    pub(crate) first_name: String,
    pub(crate) last_name: String,
    pub(crate) password: String,
}

impl SignupRequest {
    pub(crate) fn validate(self) -> Result<Self, DomainError> {
        let username = USERNAME.normalize(&self.username)?;
        let email = normalize_email(&self.email)?;
        if self.password.is_empty() {
            return Err(DomainError::validation("password", "password cannot be empty."));
        }
        Ok(Self {
            username,
            email,
            first_name: required_name("first_name", &self.first_name)?,
            last_name: required_name("last_name", &self.last_name)?,
            password: self.password,
        })
    }
}

fn required_name(field: &'static str, raw: &str) -> Result<String, DomainError> {
    let value = raw.trim();
    if value.is_empty() {
        let message = match field {
            "first_name" => "first_name cannot be empty.",
            _ => "last_name cannot be empty.",
        };
        return Err(DomainError::validation(field, message));
    }
    Ok(value.to_string())
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct LoginRequest {
    pub(crate) email: String,
    pub(crate) password: String,
}

impl LoginRequest {
    pub(crate) fn validate(self) -> Result<Self, DomainError> {
        let email = self.email.trim().to_lowercase();
        if email.is_empty() {
            return Err(DomainError::validation("email", "Invalid email"));
        }
        if self.password.is_empty() {
            return Err(DomainError::validation("password", "password cannot be empty."));
        }
        Ok(Self {
            email,
            password: self.password,
        })
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub(crate) struct UpdateUserRequest {
    pub(crate) first_name: Option<String>,
    pub(crate) last_name: Option<String>,
}

impl UpdateUserRequest {
    pub(crate) fn validate(self) -> Result<Self, DomainError> {
        Ok(Self {
            first_name: self
                .first_name
                .map(|value| required_name("first_name", &value))
                .transpose()?,
            last_name: self
                .last_name
                .map(|value| required_name("last_name", &value))
                .transpose()?,
        })
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.first_name.is_none() && self.last_name.is_none()
    }
}

#[derive(Debug, Clone)]
pub(crate) struct User {
    pub(crate) id: i64,
    pub(crate) username: String,
    pub(crate) email: String,
    pub(crate) first_name: String,
    pub(crate) last_name: String,
    pub(crate) created_at: DateTime<Utc>,
}

impl User {
    pub(crate) fn new(
        id: i64,
        username: impl Into<String>,
        email: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        validate_positive_i64("id", id)?;
        let username = USERNAME.normalize(&username.into())?;
        let email = normalize_email(&email.into())?;

        Ok(Self {
            id,
            username,
            email,
            first_name: first_name.into(),
            last_name: last_name.into(),
            created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{LoginRequest, SignupRequest, UpdateUserRequest, User};
    use crate::domain::error::DomainError;
    use chrono::Utc;

    fn signup(username: &str, email: &str, password: &str) -> SignupRequest {
        SignupRequest {
            username: username.to_string(),
            email: email.to_string(),
            first_name: " Ada ".to_string(),
            last_name: " Lovelace ".to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn user_new_rejects_non_positive_id() {
        let result = User::new(0, "valid_user", "test@example.com", "A", "B", Utc::now());
        assert!(result.is_err());
    }

    #[test]
    fn signup_rejects_two_char_username() {
        let err = signup("ab", "a@b.com", "x")
            .validate()
            .expect_err("username must be rejected");
        assert!(matches!(
            err,
            DomainError::Validation {
                field: "username",
                ..
            }
        ));
    }

    #[test]
    fn signup_accepts_three_char_username_and_normalizes() {
        let validated = signup(" abc ", " A@B.COM ", "x")
            .validate()
            .expect("must be valid");
        assert_eq!(validated.username, "abc");
        assert_eq!(validated.email, "a@b.com");
        assert_eq!(validated.first_name, "Ada");
        assert_eq!(validated.last_name, "Lovelace");
        assert_eq!(validated.password, "x");
    }

    #[test]
    fn signup_rejects_email_without_at_sign() {
        let err = signup("valid_user", "not-an-email", "secret")
            .validate()
            .expect_err("email must be rejected");
        assert_eq!(err.to_string(), "Invalid email");
    }

    #[test]
    fn signup_rejects_empty_password() {
        assert!(signup("valid_user", "a@b.com", "").validate().is_err());
    }

    #[test]
    fn signup_rejects_blank_names() {
        let mut req = signup("valid_user", "a@b.com", "secret");
        req.first_name = String::new();
        let err = req.validate().expect_err("empty first_name must be rejected");
        assert_eq!(err.to_string(), "first_name cannot be empty.");

        let mut req = signup("valid_user", "a@b.com", "secret");
        req.last_name = "   ".to_string();
        let err = req.validate().expect_err("blank last_name must be rejected");
        assert!(matches!(
            err,
            DomainError::Validation {
                field: "last_name",
                ..
            }
        ));
    }

    #[test]
    fn update_rejects_blank_name() {
        let req = UpdateUserRequest {
            first_name: None,
            last_name: Some(" ".to_string()),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn login_lowercases_email() {
        let req = LoginRequest {
            email: " Ada@Example.COM ".to_string(),
            password: "secret".to_string(),
        };
        assert_eq!(req.validate().expect("valid").email, "ada@example.com");
    }

    #[test]
    fn empty_update_is_detected() {
        assert!(UpdateUserRequest::default().is_empty());
        let req = UpdateUserRequest {
            first_name: Some("  Grace ".to_string()),
            last_name: None,
        }
        .validate()
        .expect("valid");
        assert!(!req.is_empty());
        assert_eq!(req.first_name.as_deref(), Some("Grace"));
    }
}
