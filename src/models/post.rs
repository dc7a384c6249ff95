use serde::Deserialize;
use serde_json::{Value, json};
use sqlx::FromRow;

/// Represents the 'post' table in the database.
/// A post carries no content of its own; text lives in comments
/// and attachments in media.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Post {
    pub id: i64,
    pub user_id: i64,
}

impl Post {
    pub fn serialize(&self) -> Value {
        json!({
            "id": self.id,
            "user_id": self.user_id,
        })
    }
}

/// DTO for creating a new post.
#[derive(Debug, Clone, Deserialize)]
pub struct NewPost {
    pub user_id: i64,
}
