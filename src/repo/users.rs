use sqlx::SqlitePool;
use validator::Validate;

use crate::{
    error::AppError,
    models::{
        comment::Comment,
        post::Post,
        user::{NewUser, UpdateUser, User},
    },
};

use super::db_error;

/// Inserts a user.
/// Duplicate username or email surfaces as a unique constraint violation.
pub async fn create_user(pool: &SqlitePool, payload: &NewUser) -> Result<User, AppError> {
    payload.validate()?;

    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO "user" (username, firstname, lastname, email)
        VALUES (?, ?, ?, ?)
        RETURNING id, username, firstname, lastname, email
        "#,
    )
    .bind(&payload.username)
    .bind(&payload.firstname)
    .bind(&payload.lastname)
    .bind(&payload.email)
    .fetch_one(pool)
    .await
    .map_err(db_error("Failed to create user"))?;

    tracing::info!(user_id = user.id, "user created");
    Ok(user)
}

pub async fn get_user(pool: &SqlitePool, id: i64) -> Result<User, AppError> {
    sqlx::query_as::<_, User>(
        r#"SELECT id, username, firstname, lastname, email FROM "user" WHERE id = ?"#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
    .map_err(db_error("Failed to load user"))?
    .ok_or(AppError::NotFound(format!("User {} not found", id)))
}

pub async fn find_user_by_username(
    pool: &SqlitePool,
    username: &str,
) -> Result<Option<User>, AppError> {
    let user = sqlx::query_as::<_, User>(
        r#"SELECT id, username, firstname, lastname, email FROM "user" WHERE username = ?"#,
    )
    .bind(username)
    .fetch_optional(pool)
    .await
    .map_err(db_error("Failed to look up user"))?;

    Ok(user)
}

pub async fn list_users(pool: &SqlitePool) -> Result<Vec<User>, AppError> {
    let users = sqlx::query_as::<_, User>(
        r#"SELECT id, username, firstname, lastname, email FROM "user" ORDER BY id"#,
    )
    .fetch_all(pool)
    .await
    .map_err(db_error("Failed to list users"))?;

    Ok(users)
}

/// Updates the fields present in `payload`, leaving the rest untouched.
pub async fn update_user(
    pool: &SqlitePool,
    id: i64,
    payload: &UpdateUser,
) -> Result<User, AppError> {
    payload.validate()?;

    let user = sqlx::query_as::<_, User>(
        r#"
        UPDATE "user"
        SET username = COALESCE(?, username),
            firstname = COALESCE(?, firstname),
            lastname = COALESCE(?, lastname),
            email = COALESCE(?, email)
        WHERE id = ?
        RETURNING id, username, firstname, lastname, email
        "#,
    )
    .bind(payload.username.as_deref())
    .bind(payload.firstname.as_deref())
    .bind(payload.lastname.as_deref())
    .bind(payload.email.as_deref())
    .bind(id)
    .fetch_optional(pool)
    .await
    .map_err(db_error("Failed to update user"))?
    .ok_or(AppError::NotFound(format!("User {} not found", id)))?;

    tracing::info!(user_id = id, "user updated");
    Ok(user)
}

/// Deletes a user and their follower edges.
/// Refused with a foreign key violation while the user still owns posts or comments.
pub async fn delete_user(pool: &SqlitePool, id: i64) -> Result<(), AppError> {
    let result = sqlx::query(r#"DELETE FROM "user" WHERE id = ?"#)
        .bind(id)
        .execute(pool)
        .await
        .map_err(db_error("Failed to delete user"))?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound(format!("User {} not found", id)));
    }

    tracing::info!(user_id = id, "user deleted");
    Ok(())
}

/// Posts owned by the user, oldest first.
pub async fn posts_of_user(pool: &SqlitePool, user_id: i64) -> Result<Vec<Post>, AppError> {
    let posts =
        sqlx::query_as::<_, Post>("SELECT id, user_id FROM post WHERE user_id = ? ORDER BY id")
            .bind(user_id)
            .fetch_all(pool)
            .await
            .map_err(db_error("Failed to list posts of user"))?;

    Ok(posts)
}

/// Comments authored by the user, oldest first.
pub async fn comments_of_user(pool: &SqlitePool, user_id: i64) -> Result<Vec<Comment>, AppError> {
    let comments = sqlx::query_as::<_, Comment>(
        r#"
        SELECT id, comment_text, author_id, post_id
        FROM comments
        WHERE author_id = ?
        ORDER BY id
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
    .map_err(db_error("Failed to list comments of user"))?;

    Ok(comments)
}
