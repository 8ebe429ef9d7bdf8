use super::error::DomainError;

/// Сообщения об ошибках для правила "не пусто и не короче N символов".
pub(crate) struct LengthRule {
    pub(crate) field: &'static str,
    pub(crate) min_chars: usize,
    pub(crate) empty: &'static str,
    pub(crate) too_short: &'static str,
}

pub(crate) const USERNAME: LengthRule = LengthRule {
    field: "username",
    min_chars: 3,
    empty: "username cannot be empty.",
    too_short: "username must be 3 characters long.",
};

pub(crate) const POST_TITLE: LengthRule = LengthRule {
    field: "title",
    min_chars: 5,
    empty: "title cannot be empty.",
    too_short: "title must be at least 5 characters",
};

pub(crate) const BODY: LengthRule = LengthRule {
    field: "body",
    min_chars: 4,
    empty: "Body cannot be empty",
    too_short: "The body must have at least 4 characters.",
};

pub(crate) const PROFILE_LOCATION: LengthRule = LengthRule {
    field: "location",
    min_chars: 4,
    empty: "location cannot be empty",
    too_short: "location must be at least 4 characters long.",
};

pub(crate) const PROFILE_BIO: LengthRule = LengthRule {
    field: "bio",
    min_chars: 30,
    empty: "bio cannot be empty.",
    too_short: "bio must be at least 30 characters long.",
};

impl LengthRule {
    pub(crate) fn normalize(&self, value: &str) -> Result<String, DomainError> {
        let value = value.trim();
        if value.is_empty() {
            return Err(DomainError::validation(self.field, self.empty));
        }
        if value.chars().count() < self.min_chars {
            return Err(DomainError::validation(self.field, self.too_short));
        }
        Ok(value.to_string())
    }
}

pub(crate) fn normalize_email(email: &str) -> Result<String, DomainError> {
    let email = email.trim().to_lowercase();
    if email.is_empty() || !email.contains('@') {
        return Err(DomainError::validation("email", "Invalid email"));
    }
    Ok(email)
}

pub(crate) fn validate_positive_i64(field: &'static str, value: i64) -> Result<(), DomainError> {
    if value <= 0 {
        return Err(DomainError::validation(field, "must be > 0"));
    }
    Ok(())
}

pub(crate) fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::{BODY, PROFILE_BIO, USERNAME, normalize_email, normalize_optional};
    use crate::domain::error::DomainError;

    #[test]
    fn username_of_three_chars_is_accepted() {
        assert_eq!(USERNAME.normalize("abc").expect("3 chars ok"), "abc");
    }

    #[test]
    fn username_shorter_than_three_chars_is_rejected() {
        let err = USERNAME.normalize("ab").expect_err("2 chars must fail");
        assert_eq!(err.to_string(), "username must be 3 characters long.");
    }

    #[test]
    fn blank_value_reports_empty_message() {
        let err = BODY.normalize("   ").expect_err("blank must fail");
        match err {
            DomainError::Validation { field, message } => {
                assert_eq!(field, "body");
                assert_eq!(message, "Body cannot be empty");
            }
            _ => panic!("expected DomainError::Validation"),
        }
    }

    #[test]
    fn length_is_counted_in_chars_after_trim() {
        assert!(BODY.normalize("  ёжик  ").is_ok());
        assert!(BODY.normalize("  abc ").is_err());
    }

    #[test]
    fn bio_requires_thirty_chars() {
        assert!(PROFILE_BIO.normalize(&"x".repeat(29)).is_err());
        assert!(PROFILE_BIO.normalize(&"x".repeat(30)).is_ok());
    }

    #[test]
    fn email_must_contain_at_sign() {
        assert!(normalize_email("nobody.example.com").is_err());
        assert!(normalize_email("").is_err());
        assert_eq!(
            normalize_email("  A@B.com ").expect("valid"),
            "a@b.com".to_string()
        );
    }

    #[test]
    fn normalize_optional_drops_blank() {
        assert_eq!(normalize_optional(Some("  ".to_string())), None);
        assert_eq!(
            normalize_optional(Some(" x ".to_string())),
            Some("x".to_string())
        );
        assert_eq!(normalize_optional(None), None);
    }
}
