use sqlx::error::ErrorKind;

pub(crate) mod comment_repository;
pub(crate) mod follow_repository;
pub(crate) mod like_repository;
pub(crate) mod post_repository;
pub(crate) mod profile_repository;
pub(crate) mod user_repository;

/// Нарушение ограничения схемы, которое имеет смысл для домена.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Violation<'a> {
    /// Текст ошибки SQLite, например `UNIQUE constraint failed: users.email`.
    Unique(&'a str),
    ForeignKey,
    Check,
}

pub(crate) fn violation(err: &sqlx::Error) -> Option<Violation<'_>> {
    let sqlx::Error::Database(db_err) = err else {
        return None;
    };
    match db_err.kind() {
        ErrorKind::UniqueViolation => Some(Violation::Unique(db_err.message())),
        ErrorKind::ForeignKeyViolation => Some(Violation::ForeignKey),
        ErrorKind::CheckViolation => Some(Violation::Check),
        _ => None,
    }
}
