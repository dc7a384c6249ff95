// src/repo/mod.rs
//
// Persistence operations over a `SqlitePool`. Relationships are stored once,
// as foreign keys or follower edges, and every direction is read back by query.

pub mod comments;
pub mod followers;
pub mod media;
pub mod posts;
pub mod users;

use crate::error::AppError;

/// Converts a driver error and logs it.
/// Constraint violations are expected outcomes and only logged at debug level.
pub(crate) fn db_error(context: &'static str) -> impl Fn(sqlx::Error) -> AppError {
    move |e| {
        let err = AppError::from(e);
        match &err {
            AppError::ConstraintViolation { kind, message } => {
                tracing::debug!(?kind, "{}: {}", context, message);
            }
            _ => tracing::error!("{}: {}", context, err),
        }
        err
    }
}
