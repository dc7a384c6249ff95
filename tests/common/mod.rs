// tests/common/mod.rs

#![allow(dead_code)]

use social_model::db;
use social_model::models::{
    post::{NewPost, Post},
    user::{NewUser, User},
};
use social_model::repo::{posts, users};
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

/// Fresh in-memory database with the schema applied.
/// A single, never-recycled connection keeps the memory database alive.
pub async fn setup_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory SQLite");

    db::migrate(&pool).await.expect("Failed to migrate database");

    pool
}

pub fn new_user(username: &str) -> NewUser {
    NewUser {
        username: username.to_string(),
        firstname: format!("{}-first", username),
        lastname: format!("{}-last", username),
        email: format!("{}@example.com", username),
    }
}

pub async fn seed_user(pool: &SqlitePool, username: &str) -> User {
    users::create_user(pool, &new_user(username))
        .await
        .expect("Failed to seed user")
}

pub async fn seed_post(pool: &SqlitePool, user_id: i64) -> Post {
    posts::create_post(pool, &NewPost { user_id })
        .await
        .expect("Failed to seed post")
}
