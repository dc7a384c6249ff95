// src/repo/followers.rs
//
// The follow graph is a set of directed edges keyed by (user_from_id, user_to_id).
// `following` and `followers` are two reads over the same rows.

use sqlx::SqlitePool;

use crate::{
    error::AppError,
    models::{
        follower::{FollowCounts, Follower, NewFollower},
        user::User,
    },
};

use super::db_error;

/// Records that `user_from_id` follows `user_to_id`.
///
/// Fails with a constraint violation when the edge already exists (unique),
/// when either user is missing (foreign key) or for a self-follow (check).
pub async fn follow(pool: &SqlitePool, edge: NewFollower) -> Result<Follower, AppError> {
    let follower = sqlx::query_as::<_, Follower>(
        r#"
        INSERT INTO follower (user_from_id, user_to_id)
        VALUES (?, ?)
        RETURNING user_from_id, user_to_id
        "#,
    )
    .bind(edge.user_from_id)
    .bind(edge.user_to_id)
    .fetch_one(pool)
    .await
    .map_err(db_error("Failed to follow user"))?;

    tracing::info!(
        user_from_id = follower.user_from_id,
        user_to_id = follower.user_to_id,
        "follow edge created"
    );
    Ok(follower)
}

/// Removes the edge. Returns `NotFound` when it did not exist.
pub async fn unfollow(pool: &SqlitePool, user_from_id: i64, user_to_id: i64) -> Result<(), AppError> {
    let result = sqlx::query("DELETE FROM follower WHERE user_from_id = ? AND user_to_id = ?")
        .bind(user_from_id)
        .bind(user_to_id)
        .execute(pool)
        .await
        .map_err(db_error("Failed to unfollow user"))?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound(format!(
            "User {} does not follow user {}",
            user_from_id, user_to_id
        )));
    }

    tracing::info!(user_from_id, user_to_id, "follow edge removed");
    Ok(())
}

pub async fn is_following(
    pool: &SqlitePool,
    user_from_id: i64,
    user_to_id: i64,
) -> Result<bool, AppError> {
    let found: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM follower WHERE user_from_id = ? AND user_to_id = ?",
    )
    .bind(user_from_id)
    .bind(user_to_id)
    .fetch_one(pool)
    .await
    .map_err(db_error("Failed to check follow edge"))?;

    Ok(found > 0)
}

/// Outgoing edges: everyone `user_id` follows.
pub async fn edges_from(pool: &SqlitePool, user_id: i64) -> Result<Vec<Follower>, AppError> {
    let edges = sqlx::query_as::<_, Follower>(
        r#"
        SELECT user_from_id, user_to_id
        FROM follower
        WHERE user_from_id = ?
        ORDER BY user_to_id
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
    .map_err(db_error("Failed to list outgoing edges"))?;

    Ok(edges)
}

/// Incoming edges: everyone who follows `user_id`.
pub async fn edges_to(pool: &SqlitePool, user_id: i64) -> Result<Vec<Follower>, AppError> {
    let edges = sqlx::query_as::<_, Follower>(
        r#"
        SELECT user_from_id, user_to_id
        FROM follower
        WHERE user_to_id = ?
        ORDER BY user_from_id
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
    .map_err(db_error("Failed to list incoming edges"))?;

    Ok(edges)
}

/// Users that `user_id` follows.
pub async fn following(pool: &SqlitePool, user_id: i64) -> Result<Vec<User>, AppError> {
    let users = sqlx::query_as::<_, User>(
        r#"
        SELECT u.id, u.username, u.firstname, u.lastname, u.email
        FROM follower f
        JOIN "user" u ON f.user_to_id = u.id
        WHERE f.user_from_id = ?
        ORDER BY u.id
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
    .map_err(db_error("Failed to list followed users"))?;

    Ok(users)
}

/// Users following `user_id`.
pub async fn followers(pool: &SqlitePool, user_id: i64) -> Result<Vec<User>, AppError> {
    let users = sqlx::query_as::<_, User>(
        r#"
        SELECT u.id, u.username, u.firstname, u.lastname, u.email
        FROM follower f
        JOIN "user" u ON f.user_from_id = u.id
        WHERE f.user_to_id = ?
        ORDER BY u.id
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
    .map_err(db_error("Failed to list followers"))?;

    Ok(users)
}

pub async fn follower_counts(pool: &SqlitePool, user_id: i64) -> Result<FollowCounts, AppError> {
    let (following, followers): (i64, i64) = sqlx::query_as(
        r#"
        SELECT
            (SELECT COUNT(*) FROM follower WHERE user_from_id = ?),
            (SELECT COUNT(*) FROM follower WHERE user_to_id = ?)
        "#,
    )
    .bind(user_id)
    .bind(user_id)
    .fetch_one(pool)
    .await
    .map_err(db_error("Failed to count follow edges"))?;

    Ok(FollowCounts {
        following,
        followers,
    })
}
