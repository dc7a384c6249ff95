use sqlx::SqlitePool;

use crate::{
    error::AppError,
    models::{
        comment::Comment,
        media::Media,
        post::{NewPost, Post},
        user::User,
    },
};

use super::db_error;

/// Inserts a post. The owner must exist.
pub async fn create_post(pool: &SqlitePool, payload: &NewPost) -> Result<Post, AppError> {
    let post = sqlx::query_as::<_, Post>(
        "INSERT INTO post (user_id) VALUES (?) RETURNING id, user_id",
    )
    .bind(payload.user_id)
    .fetch_one(pool)
    .await
    .map_err(db_error("Failed to create post"))?;

    tracing::info!(post_id = post.id, user_id = post.user_id, "post created");
    Ok(post)
}

pub async fn get_post(pool: &SqlitePool, id: i64) -> Result<Post, AppError> {
    sqlx::query_as::<_, Post>("SELECT id, user_id FROM post WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(db_error("Failed to load post"))?
        .ok_or(AppError::NotFound(format!("Post {} not found", id)))
}

/// All posts, most recent first.
pub async fn list_posts(pool: &SqlitePool) -> Result<Vec<Post>, AppError> {
    let posts = sqlx::query_as::<_, Post>("SELECT id, user_id FROM post ORDER BY id DESC")
        .fetch_all(pool)
        .await
        .map_err(db_error("Failed to list posts"))?;

    Ok(posts)
}

/// Moves a post to another owner.
pub async fn reassign_post(pool: &SqlitePool, id: i64, user_id: i64) -> Result<Post, AppError> {
    let post = sqlx::query_as::<_, Post>(
        "UPDATE post SET user_id = ? WHERE id = ? RETURNING id, user_id",
    )
    .bind(user_id)
    .bind(id)
    .fetch_optional(pool)
    .await
    .map_err(db_error("Failed to reassign post"))?
    .ok_or(AppError::NotFound(format!("Post {} not found", id)))?;

    tracing::info!(post_id = id, user_id, "post reassigned");
    Ok(post)
}

/// Deletes a post together with its media and comments.
pub async fn delete_post(pool: &SqlitePool, id: i64) -> Result<(), AppError> {
    let result = sqlx::query("DELETE FROM post WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await
        .map_err(db_error("Failed to delete post"))?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound(format!("Post {} not found", id)));
    }

    tracing::info!(post_id = id, "post deleted");
    Ok(())
}

/// The user who owns the post.
pub async fn post_author(pool: &SqlitePool, post_id: i64) -> Result<User, AppError> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT u.id, u.username, u.firstname, u.lastname, u.email
        FROM post p
        JOIN "user" u ON p.user_id = u.id
        WHERE p.id = ?
        "#,
    )
    .bind(post_id)
    .fetch_optional(pool)
    .await
    .map_err(db_error("Failed to load post author"))?
    .ok_or(AppError::NotFound(format!("Post {} not found", post_id)))
}

/// Media attached to the post, in insertion order.
pub async fn media_of_post(pool: &SqlitePool, post_id: i64) -> Result<Vec<Media>, AppError> {
    let media = sqlx::query_as::<_, Media>(
        "SELECT id, type, url, post_id FROM media WHERE post_id = ? ORDER BY id",
    )
    .bind(post_id)
    .fetch_all(pool)
    .await
    .map_err(db_error("Failed to list media of post"))?;

    Ok(media)
}

/// Comments on the post, oldest first.
pub async fn comments_of_post(pool: &SqlitePool, post_id: i64) -> Result<Vec<Comment>, AppError> {
    let comments = sqlx::query_as::<_, Comment>(
        r#"
        SELECT id, comment_text, author_id, post_id
        FROM comments
        WHERE post_id = ?
        ORDER BY id
        "#,
    )
    .bind(post_id)
    .fetch_all(pool)
    .await
    .map_err(db_error("Failed to list comments of post"))?;

    Ok(comments)
}
