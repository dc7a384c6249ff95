// src/error.rs

use sqlx::error::ErrorKind;
use std::fmt;

/// Which schema rule a write broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintKind {
    /// Duplicate value in a unique column or primary key.
    Unique,
    /// A foreign key points at a missing row, or a delete would orphan rows.
    ForeignKey,
    NotNull,
    /// CHECK constraint: enum membership, length limits, no self-follow.
    Check,
}

/// Global Application Error Enum.
/// Schema rule violations are reported apart from every other persistence failure.
#[derive(Debug)]
pub enum AppError {
    ConstraintViolation {
        kind: ConstraintKind,
        message: String,
    },

    NotFound(String),

    // Connection, query or migration failure
    Database(String),

    // Invalid environment value
    Config(String),
}

impl AppError {
    pub fn constraint(kind: ConstraintKind, message: impl Into<String>) -> Self {
        AppError::ConstraintViolation {
            kind,
            message: message.into(),
        }
    }

    /// The constraint kind, if this is a constraint violation.
    pub fn constraint_kind(&self) -> Option<ConstraintKind> {
        match self {
            AppError::ConstraintViolation { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::ConstraintViolation { kind, message } => {
                write!(f, "constraint violation ({:?}): {}", kind, message)
            }
            AppError::NotFound(msg) => write!(f, "not found: {}", msg),
            AppError::Database(msg) => write!(f, "database error: {}", msg),
            AppError::Config(msg) => write!(f, "configuration error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// SQLite reports every constraint failure as "<KIND> constraint failed: ...".
/// Used when the driver does not classify the error itself.
fn kind_from_message(message: &str) -> Option<ConstraintKind> {
    if !message.contains("constraint failed") {
        return None;
    }
    if message.starts_with("UNIQUE") {
        Some(ConstraintKind::Unique)
    } else if message.starts_with("FOREIGN KEY") {
        Some(ConstraintKind::ForeignKey)
    } else if message.starts_with("NOT NULL") {
        Some(ConstraintKind::NotNull)
    } else if message.starts_with("CHECK") {
        Some(ConstraintKind::Check)
    } else {
        None
    }
}

/// Converts `sqlx::Error` into `AppError`.
/// Allows using `?` operator on database queries while keeping
/// constraint violations distinguishable.
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        if let Some(db_err) = err.as_database_error() {
            let kind = match db_err.kind() {
                ErrorKind::UniqueViolation => Some(ConstraintKind::Unique),
                ErrorKind::ForeignKeyViolation => Some(ConstraintKind::ForeignKey),
                ErrorKind::NotNullViolation => Some(ConstraintKind::NotNull),
                ErrorKind::CheckViolation => Some(ConstraintKind::Check),
                _ => kind_from_message(db_err.message()),
            };
            if let Some(kind) = kind {
                return AppError::constraint(kind, db_err.message());
            }
        }

        match err {
            sqlx::Error::RowNotFound => AppError::NotFound("Row not found".to_string()),
            other => AppError::Database(other.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for AppError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        AppError::Database(err.to_string())
    }
}

/// Payload validation mirrors the column limits, so a failure is reported
/// the same way the schema's CHECK constraint would report it.
impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::constraint(ConstraintKind::Check, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sqlite_messages_map_to_kinds() {
        assert_eq!(
            kind_from_message("UNIQUE constraint failed: user.email"),
            Some(ConstraintKind::Unique)
        );
        assert_eq!(
            kind_from_message("FOREIGN KEY constraint failed"),
            Some(ConstraintKind::ForeignKey)
        );
        assert_eq!(
            kind_from_message("NOT NULL constraint failed: media.url"),
            Some(ConstraintKind::NotNull)
        );
        assert_eq!(
            kind_from_message("CHECK constraint failed: type IN ('image', 'video')"),
            Some(ConstraintKind::Check)
        );
        assert_eq!(kind_from_message("database is locked"), None);
    }

    #[test]
    fn row_not_found_becomes_not_found() {
        let err = AppError::from(sqlx::Error::RowNotFound);
        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(err.constraint_kind(), None);
    }
}
