use sqlx::SqlitePool;
use validator::Validate;

use crate::{
    error::AppError,
    models::{
        comment::{Comment, NewComment, UpdateComment},
        post::Post,
        user::User,
    },
};

use super::db_error;

/// Inserts a comment. Both the author and the post must exist.
pub async fn create_comment(pool: &SqlitePool, payload: &NewComment) -> Result<Comment, AppError> {
    payload.validate()?;

    let comment = sqlx::query_as::<_, Comment>(
        r#"
        INSERT INTO comments (comment_text, author_id, post_id)
        VALUES (?, ?, ?)
        RETURNING id, comment_text, author_id, post_id
        "#,
    )
    .bind(&payload.comment_text)
    .bind(payload.author_id)
    .bind(payload.post_id)
    .fetch_one(pool)
    .await
    .map_err(db_error("Failed to create comment"))?;

    tracing::info!(
        comment_id = comment.id,
        post_id = comment.post_id,
        author_id = comment.author_id,
        "comment created"
    );
    Ok(comment)
}

pub async fn get_comment(pool: &SqlitePool, id: i64) -> Result<Comment, AppError> {
    sqlx::query_as::<_, Comment>(
        "SELECT id, comment_text, author_id, post_id FROM comments WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
    .map_err(db_error("Failed to load comment"))?
    .ok_or(AppError::NotFound(format!("Comment {} not found", id)))
}

pub async fn update_comment(
    pool: &SqlitePool,
    id: i64,
    payload: &UpdateComment,
) -> Result<Comment, AppError> {
    payload.validate()?;

    let comment = sqlx::query_as::<_, Comment>(
        r#"
        UPDATE comments
        SET comment_text = ?
        WHERE id = ?
        RETURNING id, comment_text, author_id, post_id
        "#,
    )
    .bind(&payload.comment_text)
    .bind(id)
    .fetch_optional(pool)
    .await
    .map_err(db_error("Failed to update comment"))?
    .ok_or(AppError::NotFound(format!("Comment {} not found", id)))?;

    tracing::info!(comment_id = id, "comment updated");
    Ok(comment)
}

pub async fn delete_comment(pool: &SqlitePool, id: i64) -> Result<(), AppError> {
    let result = sqlx::query("DELETE FROM comments WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await
        .map_err(db_error("Failed to delete comment"))?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound(format!("Comment {} not found", id)));
    }

    tracing::info!(comment_id = id, "comment deleted");
    Ok(())
}

pub async fn comment_author(pool: &SqlitePool, comment_id: i64) -> Result<User, AppError> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT u.id, u.username, u.firstname, u.lastname, u.email
        FROM comments c
        JOIN "user" u ON c.author_id = u.id
        WHERE c.id = ?
        "#,
    )
    .bind(comment_id)
    .fetch_optional(pool)
    .await
    .map_err(db_error("Failed to load comment author"))?
    .ok_or(AppError::NotFound(format!("Comment {} not found", comment_id)))
}

pub async fn post_of_comment(pool: &SqlitePool, comment_id: i64) -> Result<Post, AppError> {
    sqlx::query_as::<_, Post>(
        r#"
        SELECT p.id, p.user_id
        FROM comments c
        JOIN post p ON c.post_id = p.id
        WHERE c.id = ?
        "#,
    )
    .bind(comment_id)
    .fetch_optional(pool)
    .await
    .map_err(db_error("Failed to load post of comment"))?
    .ok_or(AppError::NotFound(format!("Comment {} not found", comment_id)))
}
