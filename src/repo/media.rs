use sqlx::SqlitePool;
use validator::Validate;

use crate::{
    error::AppError,
    models::{
        media::{Media, NewMedia, UpdateMedia},
        post::Post,
    },
};

use super::db_error;

/// Attaches media to an existing post.
pub async fn create_media(pool: &SqlitePool, payload: &NewMedia) -> Result<Media, AppError> {
    payload.validate()?;

    let media = sqlx::query_as::<_, Media>(
        r#"
        INSERT INTO media (type, url, post_id)
        VALUES (?, ?, ?)
        RETURNING id, type, url, post_id
        "#,
    )
    .bind(payload.media_type)
    .bind(&payload.url)
    .bind(payload.post_id)
    .fetch_one(pool)
    .await
    .map_err(db_error("Failed to create media"))?;

    tracing::info!(media_id = media.id, post_id = media.post_id, "media created");
    Ok(media)
}

pub async fn get_media(pool: &SqlitePool, id: i64) -> Result<Media, AppError> {
    sqlx::query_as::<_, Media>("SELECT id, type, url, post_id FROM media WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(db_error("Failed to load media"))?
        .ok_or(AppError::NotFound(format!("Media {} not found", id)))
}

/// Updates the fields present in `payload`.
pub async fn update_media(
    pool: &SqlitePool,
    id: i64,
    payload: &UpdateMedia,
) -> Result<Media, AppError> {
    payload.validate()?;

    let media = sqlx::query_as::<_, Media>(
        r#"
        UPDATE media
        SET type = COALESCE(?, type),
            url = COALESCE(?, url)
        WHERE id = ?
        RETURNING id, type, url, post_id
        "#,
    )
    .bind(payload.media_type)
    .bind(payload.url.as_deref())
    .bind(id)
    .fetch_optional(pool)
    .await
    .map_err(db_error("Failed to update media"))?
    .ok_or(AppError::NotFound(format!("Media {} not found", id)))?;

    tracing::info!(media_id = id, "media updated");
    Ok(media)
}

pub async fn delete_media(pool: &SqlitePool, id: i64) -> Result<(), AppError> {
    let result = sqlx::query("DELETE FROM media WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await
        .map_err(db_error("Failed to delete media"))?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound(format!("Media {} not found", id)));
    }

    tracing::info!(media_id = id, "media deleted");
    Ok(())
}

/// The post this media belongs to.
pub async fn post_of_media(pool: &SqlitePool, media_id: i64) -> Result<Post, AppError> {
    sqlx::query_as::<_, Post>(
        r#"
        SELECT p.id, p.user_id
        FROM media m
        JOIN post p ON m.post_id = p.id
        WHERE m.id = ?
        "#,
    )
    .bind(media_id)
    .fetch_optional(pool)
    .await
    .map_err(db_error("Failed to load post of media"))?
    .ok_or(AppError::NotFound(format!("Media {} not found", media_id)))
}
